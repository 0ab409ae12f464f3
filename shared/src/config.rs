use anyhow::Result;

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                port: env_or("PORT", 8080)?,
            },
            database: DatabaseConfig {
                host: env_or("DATABASE_HOST", "localhost".into())?,
                port: env_or("DATABASE_PORT", 5432)?,
                username: env_or("DATABASE_USERNAME", "app".into())?,
                password: env_or("DATABASE_PASSWORD", "passwd".into())?,
                database: env_or("DATABASE_NAME", "app".into())?,
            },
            redis: RedisConfig {
                host: env_or("REDIS_HOST", "localhost".into())?,
                port: env_or("REDIS_PORT", 6379)?,
            },
            auth: AuthConfig {
                // access tokens stay valid for 7 days unless revoked
                ttl: env_or("AUTH_TOKEN_TTL", 604800)?,
            },
            mail: MailConfig {
                gateway_url: std::env::var("MAIL_GATEWAY_URL").ok(),
                sender: env_or("MAIL_SENDER", "noreply@campus.example".into())?,
            },
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => Ok(v.parse::<T>()?),
    }
}

pub struct ServerConfig {
    pub port: u16,
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}

pub struct MailConfig {
    pub gateway_url: Option<String>,
    pub sender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() {
        let config = AppConfig::new().unwrap();
        assert_eq!(config.auth.ttl, 604800);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.mail.sender, "noreply@campus.example");
    }
}
