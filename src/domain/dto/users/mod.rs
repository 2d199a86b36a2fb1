//! # User Data Transfer Objects Module
//!
//! 사용자 레코드의 형태와 검증 규칙을 정의하는 모듈입니다.
//! 하나의 사용자 엔티티를 용도별 변형(variant)으로 나누어 표현합니다.
//!
//! | 변형 | 타입 | 필수 필드 |
//! |------|------|-----------|
//! | 기본 | [`UserBase`] | `nickname`, `email` |
//! | 생성 | [`UserCreate`] | 기본 + `password` |
//! | 수정 | [`UserUpdate`] | 없음 (부분 수정) |
//! | 로그인 | [`LoginRequest`] | `email`, `password` (그 외 필드 불가) |
//! | 응답 | [`UserResponse`] | 기본 + `id` |
//! | 목록 응답 | [`UserListResponse`] | `items`, `total`, `page`, `size` |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── user_base.rs        # 공통 기본 필드
//! ├── validators.rs       # 필드 단위 검증 함수 (닉네임, 비밀번호, URL)
//! ├── schema.rs           # 원시 JSON → 검증된 레코드 변환 진입점
//! ├── request/            # 클라이언트 → 서버
//! │   ├── user_create.rs
//! │   ├── user_update.rs
//! │   └── login_request.rs
//! └── response/           # 서버 → 클라이언트
//!     ├── user_response.rs
//!     └── link.rs
//! ```
//!
//! ## 불변 조건
//!
//! - 닉네임 길이/문자 규칙은 닉네임을 가진 모든 변형에서 동일
//! - 비밀번호 복잡성은 생성 시에만 검사
//! - URL 필드는 값이 있을 때 검사에 실패하면 레코드 전체가 거부됨
//! - `role` 생략 시 항상 `AUTHENTICATED`

pub mod request;
pub mod response;
pub mod schema;
pub mod user_base;
pub mod validators;

pub use request::*;
pub use response::*;
pub use schema::{UserSchema, parse};
pub use user_base::UserBase;
