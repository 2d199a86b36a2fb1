//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 사용자 스키마 검증 실패, 프로필 이미지 수집 실패, 설정 오류를
//! 각각 독립된 타입으로 표현하고, 최종적으로 [`AppError`]로 모아
//! HTTP 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! | 타입 | 용도 | 복구 가능 여부 |
//! |------|------|----------------|
//! | [`ValidationFailure`] | 필드별 검증 실패 목록 | 항상 복구 가능 (클라이언트에 반환) |
//! | [`ImageIngestError`] | 이미지 업로드 파이프라인 실패 | 요청 단위로 복구 가능 |
//! | [`ConfigError`] | 시작 시점의 환경 변수 오류 | 프로세스 시작 실패 |
//! | [`AppError`] | 위 에러들의 통합 타입 | HTTP 응답으로 변환 |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `ImageIngestError::UnsupportedFormat` / `FileTooLarge` / `DecodeFailed` | 400 Bad Request |
//! | `ImageIngestError::StorageUnavailable` | 503 Service Unavailable |
//! | 나머지 | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ValidationFailure};
//!
//! fn check(nickname: &str) -> AppResult<()> {
//!     let mut failure = ValidationFailure::new();
//!     if nickname.len() < 3 {
//!         failure.push("nickname", "닉네임은 3-50자 사이여야 합니다");
//!     }
//!     failure.into_result(())?;
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 단일 필드 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 실패한 필드 이름 (구조체 수준 에러는 `__all__`)
    pub field: String,
    /// 사람이 읽을 수 있는 실패 사유
    pub message: String,
}

/// 필드별 검증 실패 목록
///
/// 검증은 첫 번째 실패에서 멈추지 않고 모든 필드를 검사하므로,
/// 클라이언트는 한 번의 응답으로 모든 문제를 표시할 수 있습니다.
/// 목록은 필드 이름 순으로 정렬됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("Validation error: {}", summarize(.errors))]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

/// 구조체 수준 검증 에러가 기록되는 의사 필드 이름
pub const ROOT_FIELD: &str = "__all__";

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단일 필드 에러로 구성된 실패를 생성합니다.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut failure = Self::new();
        failure.push(field, message);
        failure
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// 다른 실패 목록을 합치고 필드 이름 순으로 다시 정렬합니다.
    pub fn merge(&mut self, other: ValidationFailure) {
        self.errors.extend(other.errors);
        self.sort();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 해당 필드에 대한 에러가 있는지 확인합니다.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// 해당 필드의 에러 메시지 목록
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// 실패가 비어 있으면 `Ok(value)`, 아니면 `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    fn sort(&mut self) {
        // stable sort: 같은 필드의 메시지 순서는 유지
        self.errors.sort_by(|a, b| a.field.cmp(&b.field));
    }

    fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldError>) {
        for (field, kind) in errors.errors() {
            let name = match prefix {
                Some(p) => format!("{}{}", p, field),
                None => field.to_string(),
            };

            match kind {
                ValidationErrorsKind::Field(list) => {
                    for err in list {
                        let message = err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string());
                        out.push(FieldError {
                            field: name.clone(),
                            message,
                        });
                    }
                }
                // serde(flatten)으로 합쳐진 하위 스키마는 같은 네임스페이스를 공유
                ValidationErrorsKind::Struct(nested) => Self::collect(nested, prefix, out),
                ValidationErrorsKind::List(items) => {
                    for (index, nested) in items {
                        let item_prefix = format!("{}[{}].", name, index);
                        Self::collect(nested, Some(&item_prefix), out);
                    }
                }
            }
        }
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Vec::new();
        Self::collect(&errors, None, &mut out);
        let mut failure = Self { errors: out };
        failure.sort();
        failure
    }
}

/// 프로필 이미지 수집 파이프라인의 에러
///
/// 각 변형은 성공(URL 반환)과 명확히 구분되며,
/// 어떤 경로로 종료되더라도 임시 파일은 정리됩니다.
#[derive(Error, Debug)]
pub enum ImageIngestError {
    /// 허용되지 않은 확장자 (png, jpg, jpeg 외)
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// 업로드 크기 제한 초과
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: usize, limit: usize },

    /// 이미지 디코딩/리사이즈/인코딩 실패
    #[error("Image decode failed: {0}")]
    DecodeFailed(String),

    /// 오브젝트 스토리지 연결 실패, 버킷 없음, 타임아웃 등
    #[error("Object storage unavailable: {0}")]
    StorageUnavailable(String),

    /// 임시 파일 생성/쓰기 실패
    #[error("Temporary file error: {0}")]
    TempFile(#[from] std::io::Error),
}

/// 환경 변수 기반 설정 로드 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 전역 에러 타입
///
/// 도메인별 에러를 감싸며 `actix_web::ResponseError`를 구현하여
/// HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error(transparent)]
    ValidationError(#[from] ValidationFailure),

    /// 프로필 이미지 처리 에러 (400 / 503 / 500)
    #[error(transparent)]
    ImageIngestError(#[from] ImageIngestError),

    /// 설정 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigError),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ImageIngestError(e) => match e {
                ImageIngestError::UnsupportedFormat(_)
                | ImageIngestError::FileTooLarge { .. }
                | ImageIngestError::DecodeFailed(_) => StatusCode::BAD_REQUEST,
                ImageIngestError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                ImageIngestError::TempFile(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드별 상세 목록을 `details`로 함께 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(failure) => serde_json::json!({
                "error": "Validation error",
                "details": failure.errors,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
