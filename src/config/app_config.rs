use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_expiration: i64,
    pub bcrypt_cost: u32,
    /// JSON fixture replacing the built-in seed data
    pub seed_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let jwt_secret = cfg.get_string("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(config::ConfigError::Message("JWT_SECRET cannot be empty".to_string()));
        }

        let seed_file = cfg.get_string("SEED_FILE").ok();

        Ok(Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: cfg.get_int("PORT").unwrap_or(3000) as u16,
            environment: cfg.get_string("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            app_name: cfg.get_string("APP_NAME").unwrap_or_else(|_| "homeservices-backend".to_string()),
            app_version: cfg.get_string("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            jwt_secret,
            jwt_expiration: cfg.get_int("JWT_EXPIRATION").unwrap_or(86400),
            bcrypt_cost: cfg.get_int("BCRYPT_COST").unwrap_or(bcrypt::DEFAULT_COST as i64) as u32,
            seed_file: if seed_file.as_ref().map_or(false, |f| !f.is_empty()) { seed_file } else { None },
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl AppConfig {
    /// Fast settings for unit tests: minimum bcrypt cost, built-in seed
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            app_name: "homeservices-backend".to_string(),
            app_version: "0.1.0".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            bcrypt_cost: 4,
            seed_file: None,
        }
    }
}
