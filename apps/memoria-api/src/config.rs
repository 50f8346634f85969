//! Configuration for Memoria API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Collection name used when `COLLECTION` is not set.
pub const DEFAULT_COLLECTION: &str = "historia";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let collection = env_or_default("COLLECTION", DEFAULT_COLLECTION);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            collection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_defaults_to_historia() {
        temp_env::with_vars(
            [
                ("COLLECTION", None::<&str>),
                ("HOST", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.collection, "historia");
                assert_eq!(config.server.address(), "0.0.0.0:8080");
            },
        );
    }

    #[test]
    fn collection_is_overridable() {
        temp_env::with_var("COLLECTION", Some("memoria_teste"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.collection, "memoria_teste");
        });
    }
}
