//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 데이터 구조를 정의합니다.
//! 기본 필드는 [`UserBase`]를 그대로 펼쳐서 공유하고,
//! 비밀번호 복잡성 검증은 이 변형에서만 수행합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::users::user_base::UserBase;
use crate::domain::dto::users::validators::validate_password_strength;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// ```json
/// {
///   "nickname": "john_doe_123",
///   "email": "john.doe@example.com",
///   "password": "SecurePassword123!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: UserBase,

    /// 계정 비밀번호 (8-128자, 대문자/소문자/숫자/특수문자 각 1개 이상)
    #[validate(length(
        min = 8,
        max = 128,
        message = "비밀번호는 8-128자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}
