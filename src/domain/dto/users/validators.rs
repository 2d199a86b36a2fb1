//! # 사용자 필드 검증 함수
//!
//! `validator` 크레이트의 `custom` 검증에 연결되는 필드 단위 규칙입니다.
//! 모든 스키마 변형(생성, 수정, 응답)이 같은 함수를 공유하므로
//! 닉네임과 URL 규칙은 어느 변형에서도 동일하게 적용됩니다.
//!
//! | 규칙 | 적용 필드 |
//! |------|-----------|
//! | [`validate_nickname_charset`] + 길이 3-50 | `nickname` |
//! | [`validate_password_strength`] + 길이 8-128 | `password` (생성 시에만) |
//! | [`validate_profile_picture_url`] | `profile_picture_url` |
//! | [`validate_web_url`] | `linkedin_profile_url`, `github_profile_url` |

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use validator::ValidationError;

/// 닉네임 허용 문자: 영문 대소문자, 숫자, 언더스코어, 하이픈
pub static NICKNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Failed to compile nickname regex"));

/// 비밀번호에 최소 1개 이상 포함되어야 하는 특수문자 집합
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// 프로필 사진 URL이 가리킬 수 있는 이미지 확장자
pub const PROFILE_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 닉네임 문자 집합 검증 (영문, 숫자, 언더스코어, 하이픈만 허용)
///
/// 길이 제한은 `length` 검증에서 별도로 처리합니다.
pub fn validate_nickname_charset(nickname: &str) -> Result<(), ValidationError> {
    if !NICKNAME_REGEX.is_match(nickname) {
        return Err(ValidationError::new("invalid_nickname").with_message(
            "닉네임은 영문, 숫자, 언더스코어(_), 하이픈(-)만 사용할 수 있습니다".into(),
        ));
    }
    Ok(())
}

/// 비밀번호 복잡성 검증 (대문자, 소문자, 숫자, 특수문자 각 1개 이상)
///
/// 길이 제한은 `length` 검증에서 별도로 처리합니다.
///
/// ```rust,ignore
/// assert!(validate_password_strength("SecurePassword123!").is_ok());
/// assert!(validate_password_strength("SecurePassword123").is_err()); // 특수문자 없음
/// ```
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if !(has_uppercase && has_lowercase && has_digit && has_special) {
        return Err(ValidationError::new("weak_password").with_message(
            "비밀번호는 대문자, 소문자, 숫자, 특수문자를 각각 1개 이상 포함해야 합니다".into(),
        ));
    }

    Ok(())
}

/// 절대 http/https URL 검증
pub fn validate_web_url(value: &str) -> Result<(), ValidationError> {
    parse_web_url(value).map(|_| ())
}

/// 프로필 사진 URL 검증
///
/// http/https 절대 URL이면서, 쿼리 문자열을 제외한 경로가
/// `.jpg`, `.jpeg`, `.png` 중 하나로 끝나야 합니다.
pub fn validate_profile_picture_url(value: &str) -> Result<(), ValidationError> {
    let url = parse_web_url(value)?;

    let has_image_extension = url
        .path()
        .rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            PROFILE_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    if !has_image_extension {
        return Err(ValidationError::new("invalid_image_url").with_message(
            "유효한 이미지 파일(jpg, jpeg, png)을 가리켜야 합니다".into(),
        ));
    }

    Ok(())
}

fn parse_web_url(value: &str) -> Result<Url, ValidationError> {
    let invalid = || {
        ValidationError::new("invalid_url")
            .with_message("http 또는 https로 시작하는 유효한 URL이어야 합니다".into())
    };

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    Ok(url)
}
