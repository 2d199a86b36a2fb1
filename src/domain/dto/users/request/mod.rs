//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 요청 스키마들입니다.
//!
//! | 스키마 | 용도 | 비밀번호 복잡성 |
//! |--------|------|-----------------|
//! | [`UserCreate`] | 회원가입 | 검사함 |
//! | [`UserUpdate`] | 부분 수정 | 필드 없음 |
//! | [`LoginRequest`] | 로그인 | 검사하지 않음 |
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 길이, 패턴 등 (`validator`)
//!
//! 두 단계의 실패는 모두 [`ValidationFailure`](crate::core::errors::ValidationFailure)로
//! 모여 필드별로 보고됩니다. 진입점은 [`parse`](super::schema::parse)입니다.

pub mod login_request;
pub mod user_create;
pub mod user_update;

pub use login_request::LoginRequest;
pub use user_create::UserCreate;
pub use user_update::UserUpdate;
