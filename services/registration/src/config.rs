/// Registration service configuration loaded from environment variables.
///
/// The service refuses to start without a store URL; there is no
/// unconfigured-but-running state.
#[derive(Debug)]
pub struct RegistrationConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3200). Env var: `REGISTRATION_PORT`.
    pub registration_port: u16,
}

impl RegistrationConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            registration_port: std::env::var("REGISTRATION_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3200),
        }
    }
}
