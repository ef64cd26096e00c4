use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Selects the production backend endpoint when true.
    pub is_production: bool,
    pub api_endpoint_production: String,
    pub api_endpoint_dev: String,
    pub site_url: String,
    pub logo_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// There is exactly one precedence rule: an explicitly set variable wins,
    /// otherwise the documented default applies.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(3001);

        let is_production = lookup("IS_PRODUCTION")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            host,
            port,
            is_production,
            api_endpoint_production: lookup("API_ENDPOINT_PRODUCTION")
                .unwrap_or_else(|| "http://lalalycheee.vn/api/v1".to_string()),
            api_endpoint_dev: lookup("API_ENDPOINT_DEV")
                .unwrap_or_else(|| "http://localhost:8081/api/v1".to_string()),
            site_url: lookup("SITE_URL").unwrap_or_else(|| "http://localhost:3001".to_string()),
            logo_url: lookup("LOGO_URL")
                .unwrap_or_else(|| "https://placehold.co/200x80".to_string()),
        }
    }

    /// The backend base URL every gateway call is made against.
    pub fn api_base(&self) -> &str {
        if self.is_production {
            &self.api_endpoint_production
        } else {
            &self.api_endpoint_dev
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
