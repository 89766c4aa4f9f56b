//! 서버·CORS·실행 환경 설정 모듈
//!
//! 모든 설정값은 환경 변수에서 읽으며, 값이 없으면 로컬 개발에 맞는
//! 기본값을 사용합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 둘 다 없으면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&raw)
    }

    /// 환경 이름 문자열(대소문자 무관)을 Environment로 변환합니다.
    /// 알 수 없는 값은 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩할 포트를 반환합니다.
    ///
    /// `PORT` 환경 변수, 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 바인딩할 호스트 주소를 반환합니다.
    ///
    /// `HOST` 환경 변수, 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// CORS 정책 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 프론트엔드 Origin을 반환합니다.
    ///
    /// 단일 Origin만 허용하는 정책입니다.
    ///
    /// `FRONTEND_URL` 환경 변수, 기본값: "http://localhost:3000"
    pub fn frontend_origin() -> String {
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(
            Environment::from_str("Development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("testing"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
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
    fn test_cors_config_default() {
        if env::var("FRONTEND_URL").is_err() {
            assert_eq!(CorsConfig::frontend_origin(), "http://localhost:3000");
        }
    }
}
