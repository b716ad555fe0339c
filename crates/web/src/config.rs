use std::env::VarError;

use anyhow::{Context, Result, anyhow};
use storage::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DatabaseSettings};

pub const DBHOST: &str = "DBHOST";
pub const DBPORT: &str = "DBPORT";
pub const DBUSER: &str = "DBUSER";
pub const DBPASS: &str = "DBPASS";
pub const DBNAME: &str = "DBNAME";
pub const DBMAXCONN: &str = "DBMAXCONN";
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub database: DatabaseSettings,
}

impl Config {
    pub fn from_env(default_listen_addr: &str) -> Result<Self> {
        Self::from_lookup(default_listen_addr, |key| std::env::var(key))
    }

    /// Every `DB*` connection variable is required; nothing is defaulted.
    pub fn from_lookup<F>(default_listen_addr: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let optional = |key: &str| match lookup(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                Err(anyhow!("{key} environment variable is set but is not valid unicode"))
            }
        };
        let required = |key: &str| {
            optional(key)?
                .with_context(|| format!("{key} environment variable required but not set"))
        };

        let host = required(DBHOST)?;
        let port = required(DBPORT)?;
        let user = required(DBUSER)?;
        let password = required(DBPASS)?;
        let name = required(DBNAME)?;

        let port = port
            .trim()
            .parse::<u16>()
            .with_context(|| format!("{DBPORT} must be a port number, got {port:?}"))?;

        let max_connections = match optional(DBMAXCONN)? {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("{DBMAXCONN} must be a positive integer, got {value:?}")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            listen_addr: optional(LISTEN_ADDR)?.unwrap_or_else(|| default_listen_addr.to_string()),
            database: DatabaseSettings {
                host,
                port,
                user,
                password,
                name,
                max_connections,
                acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (DBHOST, "localhost".to_string()),
            (DBPORT, "5432".to_string()),
            (DBUSER, "postgres".to_string()),
            (DBPASS, "secret".to_string()),
            (DBNAME, "microsite".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config> {
        Config::from_lookup("127.0.0.1:8000", |key| {
            env.get(key).cloned().ok_or(VarError::NotPresent)
        })
    }

    #[test]
    fn loads_all_required_variables() {
        let config = load(&full_env()).unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8000");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "microsite");
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn each_missing_variable_is_named_in_the_error() {
        for key in [DBHOST, DBPORT, DBUSER, DBPASS, DBNAME] {
            let mut env = full_env();
            env.remove(key);

            let err = load(&env).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("{key} environment variable required but not set")
            );
        }
    }

    #[test]
    fn empty_value_counts_as_set() {
        let mut env = full_env();
        env.insert(DBPASS, String::new());

        assert_eq!(load(&env).unwrap().database.password, "");
    }

    #[test]
    fn rejects_malformed_port() {
        let mut env = full_env();
        env.insert(DBPORT, "postgres".to_string());

        let err = load(&env).unwrap_err();
        assert!(err.to_string().contains(DBPORT));
    }

    #[test]
    fn optional_overrides_are_applied() {
        let mut env = full_env();
        env.insert(LISTEN_ADDR, "0.0.0.0:9000".to_string());
        env.insert(DBMAXCONN, "3".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.database.max_connections, 3);
    }

    #[test]
    fn rejects_zero_pool_size() {
        let mut env = full_env();
        env.insert(DBMAXCONN, "0".to_string());

        assert!(load(&env).unwrap_err().to_string().contains(DBMAXCONN));
    }

    #[test]
    fn non_unicode_value_is_not_reported_as_missing() {
        let env = full_env();

        let err = Config::from_lookup("127.0.0.1:8000", |key| {
            if key == DBPASS {
                Err(VarError::NotUnicode(std::ffi::OsString::from("secret")))
            } else {
                env.get(key).cloned().ok_or(VarError::NotPresent)
            }
        })
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "DBPASS environment variable is set but is not valid unicode"
        );
    }
}
