pub mod google_vision_client;
