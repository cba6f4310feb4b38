use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub silhouette_base: String,
    pub persona_file: String,
    pub dry_run: bool,
    pub metrics_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(9090),
            silhouette_base: env::var("SIL_BASE")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            persona_file: env::var("PERSONA_FILE").unwrap_or_else(|_| "persona.json".to_string()),
            dry_run: env::var("DRY_RUN").map(|v| v == "1").unwrap_or(true),
            metrics_path: env::var("METRICS_PATH").unwrap_or_else(|_| "metrics.json".to_string()),
        }
    }
}
