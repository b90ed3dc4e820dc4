use anyhow::{Context, Result, anyhow};

/// Backing store selected by `STORAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Postgres {
        database_url: String,
        run_migrations: bool,
    },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: Storage,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let storage = match lookup("STORAGE").as_deref() {
            None | Some("postgres") => {
                let database_url = required("DATABASE_URL")?;
                let run_migrations_str = required("RUN_MIGRATIONS")?;

                let run_migrations = match run_migrations_str.as_str() {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(anyhow!(
                            "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                            other
                        ));
                    }
                };

                Storage::Postgres {
                    database_url,
                    run_migrations,
                }
            }
            Some("memory") => Storage::Memory,
            Some(other) => {
                return Err(anyhow!(
                    "STORAGE must be 'postgres' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let port_str = required("PORT")?;
        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_conn = match lookup("DB_MIN_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MIN_CONN must be a valid u32 integer")?,
            None => 1,
        };

        let db_max_conn = match lookup("DB_MAX_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => 5,
        };

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        Ok(Self {
            storage,
            port,
            db_min_conn,
            db_max_conn,
        })
    }
}
