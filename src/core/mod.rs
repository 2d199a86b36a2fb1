//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ValidationFailure**: 필드별 검증 실패 목록 (fail-fast 아님)
//! - **ImageIngestError**: 프로필 이미지 처리 단계별 에러 종류
//! - **ConfigError**: 시작 시점 환경 변수 오류
//! - **AppError**: 위 에러를 감싸는 전역 에러 + Actix-Web `ResponseError` 구현
//!
//! ## 에러 처리 흐름
//!
//! ```text
//! ValidationErrors (validator) ──┐
//! serde_json::Error ─────────────┼──▶ ValidationFailure ──┐
//!                                │                        ├──▶ AppError ──▶ HttpResponse
//! StorageError / io::Error ──────┴──▶ ImageIngestError ───┘
//! ```

pub mod errors;

pub use errors::*;
