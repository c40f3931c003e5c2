/// 환경 변수 기반 애플리케이션 설정
// region:    --- Imports
use std::env;
use std::time::Duration;
use thiserror::Error;
// endregion: --- Imports

// region:    --- Config Error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} 환경 변수가 설정되지 않았습니다")]
    Missing(&'static str),

    #[error("{name} 값 `{value}` 을(를) 해석할 수 없습니다")]
    Invalid { name: &'static str, value: String },
}
// endregion: --- Config Error

// region:    --- App Config
/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub db_statement_timeout: Duration,
    pub request_timeout: Duration,
    pub seed_items: usize,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 조회 함수로부터 설정 로드 (테스트에서 환경 변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            database_url,
            db_max_connections: parse_at_least_one(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                5,
            )?),
            db_statement_timeout: Duration::from_millis(parse_or(
                &lookup,
                "DB_STATEMENT_TIMEOUT_MS",
                5000,
            )?),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 10)?),
            seed_items: parse_or(&lookup, "SEED_ITEMS", 0)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

/// 0 이면 풀이 커넥션을 얻지 못하므로 1 이상만 허용
fn parse_at_least_one<F>(lookup: &F, name: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, name, default)?;
    if value < 1 {
        return Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}
// endregion: --- App Config

// endregion: --- Tests
