use clap::Parser;
use fitpulse_core::domain::common::{
    AdminConfig, FatSecretConfig, FitpulseConfig, NutritionixConfig, ProvidersConfig, UsdaConfig,
    VisionConfig, non_blank,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "fitpulse-api", version, about = "Fitness backend with food recognition")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub providers: ProviderArgs,

    #[command(flatten)]
    pub admin: AdminArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProviderArgs {
    #[arg(long, env = "GOOGLE_VISION_API_KEY")]
    pub vision_api_key: Option<String>,

    #[arg(
        long,
        env = "GOOGLE_VISION_BASE_URL",
        default_value = "https://vision.googleapis.com/v1"
    )]
    pub vision_base_url: String,

    #[arg(long, env = "FATSECRET_CONSUMER_KEY")]
    pub fatsecret_consumer_key: Option<String>,

    #[arg(long, env = "FATSECRET_CONSUMER_SECRET")]
    pub fatsecret_consumer_secret: Option<String>,

    #[arg(
        long,
        env = "FATSECRET_BASE_URL",
        default_value = "https://platform.fatsecret.com/rest/server.api"
    )]
    pub fatsecret_base_url: String,

    #[arg(long, env = "USDA_API_KEY")]
    pub usda_api_key: Option<String>,

    #[arg(long, env = "USDA_BASE_URL", default_value = "https://api.nal.usda.gov/fdc/v1")]
    pub usda_base_url: String,

    #[arg(long, env = "NUTRITIONIX_APP_ID")]
    pub nutritionix_app_id: Option<String>,

    #[arg(long, env = "NUTRITIONIX_APP_KEY")]
    pub nutritionix_app_key: Option<String>,

    #[arg(
        long,
        env = "NUTRITIONIX_BASE_URL",
        default_value = "https://trackapi.nutritionix.com/v2"
    )]
    pub nutritionix_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AdminArgs {
    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// HS256 signing secret, at least 16 characters.
    #[arg(long, env = "ADMIN_JWT_SECRET", hide_env_values = true)]
    pub admin_jwt_secret: String,

    #[arg(long, env = "ADMIN_TOKEN_TTL_MINUTES", default_value_t = 60)]
    pub admin_token_ttl_minutes: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for FitpulseConfig {
    fn from(args: Args) -> Self {
        let providers = args.providers;
        FitpulseConfig {
            providers: ProvidersConfig {
                vision: VisionConfig {
                    api_key: non_blank(providers.vision_api_key),
                    base_url: providers.vision_base_url,
                },
                fatsecret: FatSecretConfig {
                    consumer_key: non_blank(providers.fatsecret_consumer_key),
                    consumer_secret: non_blank(providers.fatsecret_consumer_secret),
                    base_url: providers.fatsecret_base_url,
                },
                usda: UsdaConfig {
                    api_key: non_blank(providers.usda_api_key),
                    base_url: providers.usda_base_url,
                },
                nutritionix: NutritionixConfig {
                    app_id: non_blank(providers.nutritionix_app_id),
                    app_key: non_blank(providers.nutritionix_app_key),
                    base_url: providers.nutritionix_base_url,
                },
            },
            admin: AdminConfig {
                username: args.admin.admin_username,
                password: args.admin.admin_password,
                jwt_secret: args.admin.admin_jwt_secret,
                token_ttl_minutes: args.admin.admin_token_ttl_minutes,
            },
        }
    }
}
