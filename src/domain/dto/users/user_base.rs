//! 사용자 기본 스키마
//!
//! 생성, 응답 스키마가 `#[serde(flatten)]`으로 공유하는 공통 필드입니다.
//! 단독 스키마로도 검증할 수 있습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validators::{
    validate_nickname_charset, validate_profile_picture_url, validate_web_url,
};
use crate::domain::entities::users::UserRole;
use crate::utils::string_utils::deserialize_optional_string;

/// 모든 사용자 스키마 변형이 공유하는 기본 필드
///
/// # JSON 예제
///
/// ```json
/// {
///   "nickname": "john_doe_123",
///   "email": "john.doe@example.com",
///   "first_name": "John",
///   "last_name": "Doe",
///   "role": "AUTHENTICATED",
///   "bio": "I am a software engineer.",
///   "profile_picture_url": "https://example.com/profile_pictures/john_doe.jpg",
///   "linkedin_profile_url": "https://linkedin.com/in/johndoe",
///   "github_profile_url": "https://github.com/johndoe"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserBase {
    /// 닉네임 (3-50자, 영문/숫자/`_`/`-`)
    #[validate(length(
        min = 3,
        max = 50,
        message = "닉네임은 3-50자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_nickname_charset"))]
    pub nickname: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,

    /// 생략 시 `AUTHENTICATED`
    #[serde(default)]
    pub role: UserRole,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,

    /// jpg/jpeg/png 이미지를 가리키는 http(s) URL
    #[validate(custom(function = "validate_profile_picture_url"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub linkedin_profile_url: Option<String>,

    #[validate(custom(function = "validate_web_url"))]
    pub github_profile_url: Option<String>,
}

impl UserBase {
    /// 필수 필드만으로 기본 레코드를 생성합니다.
    pub fn new(nickname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            role: UserRole::default(),
            bio: None,
            profile_picture_url: None,
            linkedin_profile_url: None,
            github_profile_url: None,
        }
    }

    /// 이름과 성을 합친 표시용 이름 (둘 다 없으면 닉네임)
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.nickname.clone(),
        }
    }
}
