use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub request_timeout_secs: u64,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = parse_bool("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = optional_var("DB_MAX_CONN", 5u32)?;
        let request_timeout_secs = optional_var("REQUEST_TIMEOUT_SECS", 5u64)?;
        let token_ttl_hours = optional_var("TOKEN_TTL_HOURS", 24i64)?;

        if token_ttl_hours <= 0 {
            return Err(anyhow!("TOKEN_TTL_HOURS must be positive"));
        }

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_max_conn,
            request_timeout_secs,
            token_ttl_hours,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn optional_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{name} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_is_strict() {
        assert!(parse_bool("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_bool("RUN_MIGRATIONS", "false").unwrap());
        assert!(parse_bool("RUN_MIGRATIONS", "maybe").is_err());
        assert!(parse_bool("RUN_MIGRATIONS", "TRUE").is_err());
    }

    #[test]
    fn optional_var_falls_back_when_unset() {
        let value: u32 = optional_var("STOREFRONT_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }
}
