use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use nairavest_application::ThrottleRule;
use nairavest_core::AppError;
use tracing_subscriber::EnvFilter;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub seed_only: bool,
    pub database_url: String,
    pub redis_url: Option<String>,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub cookie_secure: bool,
    pub login_throttle: ThrottleRule,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let command = env::args().nth(1);
        let migrate_only = command.as_deref() == Some("migrate");
        let seed_only = command.as_deref() == Some("seed");

        let database_url = required_env("DATABASE_URL")?;
        let redis_url = env::var("REDIS_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        let defaults = ThrottleRule::default();
        let max_attempts = optional_parsed_env("LOGIN_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts);
        let window_seconds =
            optional_parsed_env("LOGIN_WINDOW_SECONDS")?.unwrap_or(defaults.window_seconds);

        if max_attempts <= 0 || window_seconds <= 0 {
            return Err(AppError::Validation(
                "LOGIN_MAX_ATTEMPTS and LOGIN_WINDOW_SECONDS must be positive".to_owned(),
            ));
        }

        Ok(Self {
            migrate_only,
            seed_only,
            database_url,
            redis_url,
            frontend_url,
            api_host,
            api_port,
            cookie_secure,
            login_throttle: ThrottleRule::new(max_attempts, window_seconds),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn optional_parsed_env<T: FromStr>(name: &str) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|error| AppError::Validation(format!("invalid {name}: {error}")))
        })
        .transpose()
}
