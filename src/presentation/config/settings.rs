use super::environment::Environment;

/// Runtime settings, sourced from the environment with local defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("Invalid SERVER_PORT: {}", raw))?,
            Err(_) => 8000,
        };

        let environment = match std::env::var("APP_ENV") {
            Ok(raw) => Environment::try_from(raw)?,
            Err(_) => Environment::Local,
        };

        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Ok(Self {
            server: ServerSettings { host, port },
            logging: LoggingSettings { json_format },
            environment,
        })
    }
}
