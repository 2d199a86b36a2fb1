//! 실행 환경 및 서버 바인딩 설정 모듈
//!
//! 실행 환경 감지와 HTTP 바인딩 주소를 관리합니다.

use std::env;
use std::fmt;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그, `.env.dev` 사용
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_development() {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }

    /// `RUST_LOG`가 없을 때 사용할 env_logger 필터
    ///
    /// | 환경 | 필터 |
    /// |------|------|
    /// | Development / Test | `debug` |
    /// | Staging / Production | `info` |
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() { "debug" } else { "info" }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// `PORT` 환경 변수가 없거나 숫자가 아니면 8080을 사용합니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `HttpServer::bind`에 넘길 (호스트, 포트) 쌍
    pub fn bind_address() -> (String, u16) {
        (Self::host(), Self::port())
    }
}
