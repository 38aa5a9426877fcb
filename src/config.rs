use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Origin allowed to send credentialed (session cookie) requests.
    pub frontend_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let frontend_origin = env::var("FRONTEND_ORIGIN").ok().filter(|s| !s.is_empty());
        Ok(Self {
            port,
            database_url,
            host,
            frontend_origin,
        })
    }
}
