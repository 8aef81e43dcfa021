//! 실행 환경, 서버, 데이터베이스 관련 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 잘못된 경우 기본값을 사용합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다 (기본값: Production).
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// bcrypt 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-15 범위이면 그대로, 아니면 환경별 기본값
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 속도 제한 설정 (`actix-governor`)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본값 100), `RATE_LIMIT_BURST_SIZE` (기본값 200)
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 해석할 수 없거나 0인 값은 기본값으로 대체됩니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_PER_SECOND 미설정 또는 잘못된 값, 기본값 100 사용");
                100
            });

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_BURST_SIZE 미설정 또는 잘못된 값, 기본값 200 사용");
                200
            });

        Self { per_second, burst_size }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_management_dev".to_string())
    }
}

/// 에러 응답 노출 정책
pub struct ErrorReportingConfig;

impl ErrorReportingConfig {
    /// 500 응답에 내부 원인을 포함할지 여부 (개발 환경에서만 true)
    pub fn expose_internal_details() -> bool {
        Self::expose_internal_details_for_env(&Environment::current())
    }

    pub fn expose_internal_details_for_env(env: &Environment) -> bool {
        matches!(env, Environment::Development)
    }
}
