//! # Domain Layer Module
//!
//! 사용자 데이터 모델을 담당하는 도메인 계층입니다.
//! 순수한 검증 로직만 포함하며 부수 효과가 없습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 공유 값 타입 (UserRole)
//! └── dto       - 요청/응답 스키마와 검증 규칙
//! ```
//!
//! 사용자 레코드의 생성, 수정, 삭제 생명주기는 외부 영속 계층이 소유하므로
//! 이 모듈에는 저장 관련 코드가 없습니다.

pub mod dto;
pub mod entities;

pub use dto::users::*;
pub use entities::users::UserRole;
