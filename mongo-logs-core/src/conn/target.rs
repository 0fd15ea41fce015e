use crate::conf::ConfigError;
use mongodb::options::ConnectionString;

const DEFAULT_HOST: &str = "localhost:27017";

/// A resolved connection target: full URL plus the database to profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub database: String,
}

impl Target {
    /// Accepts what the mongo shell accepts: `accounts`, `host/accounts`,
    /// `host:port/accounts` or a full `mongodb://` URL.
    pub fn parse(arg: &str) -> Result<Self, ConfigError> {
        let url = normalize_url(arg);

        let conn = ConnectionString::parse(&url).map_err(|source| ConfigError::InvalidTarget {
            target: arg.trim().to_string(),
            source,
        })?;

        let database = conn
            .default_database
            .filter(|db| !db.is_empty())
            .ok_or_else(|| ConfigError::MissingDatabase {
                target: arg.trim().to_string(),
            })?;

        Ok(Self { url, database })
    }
}

pub fn normalize_url(arg: &str) -> String {
    let arg = arg.trim();
    if arg.starts_with("mongodb://") || arg.starts_with("mongodb+srv://") {
        return arg.to_string();
    }

    match (arg.contains(':'), arg.contains('/')) {
        (false, false) => format!("mongodb://{DEFAULT_HOST}/{arg}"),
        (_, true) => format!("mongodb://{arg}"),
        // host:port with no database; left alone so parsing reports it
        (true, false) => arg.to_string(),
    }
}
