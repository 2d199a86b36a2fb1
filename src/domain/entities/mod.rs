//! # Domain Entities Module
//!
//! 여러 스키마 변형이 공유하는 도메인 값 타입을 정의합니다.

pub mod users;

pub use users::*;
