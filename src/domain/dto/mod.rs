//! # Data Transfer Objects Module
//!
//! API 경계에서 데이터를 주고받기 위한 객체들입니다.
//!
//! ## 설계 원칙
//!
//! - **API 계약**: 외부와의 명확한 인터페이스 정의
//! - **유효성 검증**: `validator` derive로 형식과 제약 조건 선언
//! - **필드별 보고**: 검증 실패는 첫 에러에서 멈추지 않고 모두 수집
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Valid @RequestBody` | `parse::<UserCreate>(json)` | 요청 역직렬화 + 검증 |
//! | `@Pattern` | `#[validate(custom)]` + `Regex` | 정규표현식 검증 |
//! | `@Email` | `#[validate(email)]` | 이메일 형식 검증 |
//! | `@Size` | `#[validate(length)]` | 길이 제한 |
//! | `BindingResult` | `ValidationFailure` | 필드별 에러 목록 |

pub mod users;

pub use users::*;
