use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown MEMBERS_STORE kind {0:?}, expected \"memory\" or \"sqlite\"")]
    UnknownStoreKind(String),

    #[error("MEMBERS_STORE=sqlite requires DATABASE_URL")]
    MissingDatabaseUrl,

    #[error("invalid MEMBERS_BIND address {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub store: StoreKind,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("MEMBERS_STORE").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("MEMBERS_BIND").ok(),
        )
    }

    fn from_values(
        store: Option<String>,
        database_url: Option<String>,
        bind: Option<String>,
    ) -> Result<Self, ConfigError> {
        let store = match store.as_deref().unwrap_or("memory") {
            "memory" => StoreKind::Memory,
            "sqlite" => StoreKind::Sqlite {
                url: database_url.ok_or(ConfigError::MissingDatabaseUrl)?,
            },
            other => return Err(ConfigError::UnknownStoreKind(other.to_string())),
        };
        let bind = bind.as_deref().unwrap_or(DEFAULT_BIND);
        let bind = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.to_string()))?;
        Ok(Self { bind, store })
    }
}
