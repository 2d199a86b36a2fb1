//! Users Entity Module
//!
//! 사용자 도메인의 핵심 값 타입을 정의하는 모듈입니다.
//! 사용자 레코드의 영속화는 외부 저장소가 담당하므로,
//! 이 모듈은 모든 스키마 변형이 공유하는 역할 열거형만 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::UserRole;
//!
//! let role: UserRole = "ADMIN".parse()?;
//! assert_eq!(role.as_str(), "ADMIN");
//! ```

pub mod user_role;

pub use user_role::UserRole;
