//! 사용자 수정 요청 DTO
//!
//! 부분 수정(patch) 의미를 가지므로 모든 필드가 선택사항입니다.
//! 값이 주어진 필드만 생성 시와 동일한 규칙으로 검증하며,
//! 비밀번호 복잡성은 여기서 검사하지 않습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::dto::users::validators::{
    validate_nickname_charset, validate_profile_picture_url, validate_web_url,
};
use crate::domain::entities::users::UserRole;
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 부분 수정 요청 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UserUpdate {
    #[validate(length(
        min = 3,
        max = 50,
        message = "닉네임은 3-50자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_nickname_charset"))]
    pub nickname: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,

    /// 생략 시 기존 역할 유지 (기본값으로 채우지 않음)
    pub role: Option<UserRole>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,

    #[validate(custom(function = "validate_profile_picture_url"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub linkedin_profile_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub github_profile_url: Option<String>,
}

impl UserUpdate {
    /// 변경할 필드가 하나라도 있는지 확인합니다.
    pub fn has_changes(&self) -> bool {
        self.nickname.is_some()
            || self.email.is_some()
            || self.first_name.is_some()
            || self.last_name.is_some()
            || self.role.is_some()
            || self.bio.is_some()
            || self.profile_picture_url.is_some()
            || self.linkedin_profile_url.is_some()
            || self.github_profile_url.is_some()
    }
}

fn validate_has_changes(update: &UserUpdate) -> Result<(), ValidationError> {
    if !update.has_changes() {
        return Err(ValidationError::new("empty_update")
            .with_message("수정할 필드를 최소 1개 이상 입력해주세요".into()));
    }
    Ok(())
}
