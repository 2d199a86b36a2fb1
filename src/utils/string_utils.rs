//! # 문자열 유틸리티
//!
//! 스키마 역직렬화와 업로드 파일명 처리에 쓰이는 공통 문자열 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// 필드가 생략될 수 있으므로 `#[serde(default)]`와 함께 사용해야 합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     bio: Option<String>,
/// }
///
/// // JSON: {"bio": "  Hi  "} → Some("Hi")
/// // JSON: {"bio": ""} → None
/// // JSON: {} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 파일명의 확장자를 소문자로 반환합니다.
///
/// 점이 없거나 점으로 끝나는 경우 None을 반환합니다.
/// 숨김 파일처럼 점으로 시작하는 이름(`.png`)도 확장자가 없는 것으로 봅니다.
///
/// ```rust,ignore
/// assert_eq!(file_extension("photo.PNG"), Some("png".to_string()));
/// assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
/// assert_eq!(file_extension("README"), None);
/// ```
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  value  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("value".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_with_korean() {
        #[derive(Deserialize)]
        struct KoreanTestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            korean_field: Option<String>,
        }

        let result: KoreanTestStruct = serde_json::from_str(r#"{"korean_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.korean_field, Some("안녕하세요".to_string()));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photo.png"), Some("png".to_string()));
        assert_eq!(file_extension("photo.JPEG"), Some("jpeg".to_string()));
        assert_eq!(file_extension("my.photo.Jpg"), Some("jpg".to_string()));
        assert_eq!(file_extension("photo"), None);
        assert_eq!(file_extension("photo."), None);
        assert_eq!(file_extension(".png"), None);
    }
}
