//! # Data & Server Configuration
//!
//! 실행 환경, 비밀번호 해싱, 서버 바인딩, 프로필 이미지 저장소,
//! 응답 상태 정책 등 인증 외 설정을 환경 변수에서 읽어옵니다.

use std::env;
use std::path::PathBuf;
use once_cell::sync::Lazy;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 환경을 판별합니다. 설정이 없으면 운영 환경으로 간주합니다.
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

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4~15 범위의 값이면 그대로 사용하고,
    /// 아니면 환경별 기본값을 사용합니다.
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
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 프로필 이미지 저장소 설정
///
/// ```bash
/// export PROFILE_IMAGE_DIR="./uploads/profile"
/// export PROFILE_IMAGE_BASE_URL="http://localhost:8080/static/profile"
/// export PROFILE_IMAGE_MAX_BYTES="5242880"
/// ```
pub struct StorageConfig;

impl StorageConfig {
    pub fn profile_image_dir() -> PathBuf {
        env::var("PROFILE_IMAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./uploads/profile"))
    }

    pub fn profile_image_base_url() -> String {
        env::var("PROFILE_IMAGE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/static/profile".to_string())
    }

    /// 업로드 허용 최대 크기 (기본 5MB)
    pub fn profile_image_max_bytes() -> usize {
        env::var("PROFILE_IMAGE_MAX_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5 * 1024 * 1024)
    }
}

/// 실패 응답의 HTTP 상태 정책
///
/// 기존 클라이언트는 모든 응답을 HTTP 200으로 받고 봉투 안의 `code`로
/// 결과를 판단합니다. `http` 모드에서는 상태 범주에 맞는 HTTP 상태를 함께 내려줍니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    /// 항상 HTTP 200 (기본값)
    Envelope,
    /// 상태 범주에 따라 400/401/404/409/500
    Http,
}

impl StatusMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "http" | "strict" => StatusMode::Http,
            _ => StatusMode::Envelope,
        }
    }
}

static STATUS_MODE: Lazy<StatusMode> = Lazy::new(|| {
    StatusMode::from_str(&env::var("RESPONSE_STATUS_MODE").unwrap_or_default())
});

pub struct ResponseConfig;

impl ResponseConfig {
    /// `RESPONSE_STATUS_MODE` 값을 최초 접근 시 한 번만 읽어 캐시합니다.
    pub fn status_mode() -> StatusMode {
        *STATUS_MODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_status_mode_parsing() {
        assert_eq!(StatusMode::from_str("http"), StatusMode::Http);
        assert_eq!(StatusMode::from_str("STRICT"), StatusMode::Http);
        assert_eq!(StatusMode::from_str(""), StatusMode::Envelope);
        assert_eq!(StatusMode::from_str("envelope"), StatusMode::Envelope);
    }
}
