use std::{env, net::SocketAddr};

use tracing::info;

use crate::error::AppError;
use crate::gateway::SupabaseConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://msf_finder.db";
pub const DEFAULT_REGION: &str = "NC";

/// Where course data is read from.
#[derive(Clone, Debug)]
pub enum Backend {
    Supabase(SupabaseConfig),
    Sqlite { database_url: String },
}

/// Settings the rendered page depends on.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// State abbreviation shown in the title and after a college's city.
    pub region: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { region: DEFAULT_REGION.to_string() }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend: Backend,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var_or = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let bind_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("Invalid BIND_ADDR: {}", e)))?;

        let sqlite_backend = || Backend::Sqlite {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
        };

        let backend = match lookup("COURSE_BACKEND").as_deref() {
            Some("supabase") => Backend::Supabase(SupabaseConfig::from_lookup(&lookup)?),
            Some("sqlite") => sqlite_backend(),
            Some(other) => {
                return Err(AppError::Config(format!(
                    "COURSE_BACKEND must be \"supabase\" or \"sqlite\", got {:?}",
                    other
                )));
            }
            None if lookup("SUPABASE_URL").is_some() => {
                Backend::Supabase(SupabaseConfig::from_lookup(&lookup)?)
            }
            None => sqlite_backend(),
        };

        let site = SiteConfig {
            region: var_or("SITE_REGION", DEFAULT_REGION),
        };

        Ok(Self { bind_addr, backend, site })
    }
}
