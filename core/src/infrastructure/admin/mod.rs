pub mod jwt_authenticator;
