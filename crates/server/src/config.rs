use std::{env, fs, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("failed to read password file {path:?}: {source}")]
    PasswordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
    /// Connection assembled from the `FORTUNE_DB_*` variables.
    Postgres {
        host: String,
        port: u16,
        name: String,
        user: String,
        password: String,
    },
    /// Full connection URL from `FORTUNE_DATABASE_URL`.
    Url(String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database: Database,
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_source<F>(var: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match var("FORTUNE_DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Database::Url(url),
            None => {
                let host = required(&var, "FORTUNE_DB_HOST")?;
                let port = parse("FORTUNE_DB_PORT", required(&var, "FORTUNE_DB_PORT")?)?;
                let name = required(&var, "FORTUNE_DB_NAME")?;
                let user = required(&var, "FORTUNE_DB_USER")?;

                let password_file = PathBuf::from(required(&var, "FORTUNE_DB_PASSWORD_FILE")?);
                let password = match fs::read_to_string(&password_file) {
                    Ok(contents) => contents.trim().to_string(),
                    Err(source) => {
                        return Err(SettingsError::PasswordFile {
                            path: password_file,
                            source,
                        })
                    }
                };

                Database::Postgres {
                    host,
                    port,
                    name,
                    user,
                    password,
                }
            }
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: match var("PORT") {
                Some(port) => parse("PORT", port)?,
                None => 8080,
            },
            database,
            max_connections: match var("FORTUNE_DB_MAX_CONNECTIONS") {
                Some(max) => parse("FORTUNE_DB_MAX_CONNECTIONS", max)?,
                None => 5,
            },
        })
    }

    pub fn database_url(&self) -> String {
        match &self.database {
            Database::Url(url) => url.clone(),
            Database::Postgres {
                host,
                port,
                name,
                user,
                password,
            } => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                urlencoding::encode(user),
                urlencoding::encode(password),
                host,
                port,
                name
            ),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required<F>(var: &F, key: &'static str) -> Result<String, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .filter(|value| !value.is_empty())
        .ok_or(SettingsError::Missing(key))
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::Invalid { key, value })
}
