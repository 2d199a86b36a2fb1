//! # 사용자 스키마 파싱
//!
//! 필드 이름 → 원시 값 매핑(JSON 객체)을 받아 검증된 강타입 레코드를 만들거나,
//! 위반된 모든 필드와 사유를 담은 [`ValidationFailure`]를 반환합니다.
//!
//! ## 처리 단계
//!
//! 1. 입력이 JSON 객체인지 확인
//! 2. 원시 맵 사전 검사: `serde`는 첫 구조 에러에서 멈추고 필드를 특정하지 못하는
//!    경우가 있으므로, 스키마의 필드 목록([`UserSchema::FIELDS`])을 기준으로
//!    누락, 타입 불일치, 잘못된 역할, 허용되지 않은 필드를 모두 먼저 기록
//! 3. 문제가 된 필수 필드는 대체값으로 채우고 선택 필드는 제거한 뒤 `serde` 디코딩
//! 4. `validator` 필드 검증 (모든 필드를 독립적으로 검사, 대체된 필드는 제외)
//!
//! ```rust,ignore
//! use serde_json::json;
//! use crate::domain::dto::users::{parse, UserCreate};
//!
//! let user: UserCreate = parse(json!({
//!     "nickname": "john_doe_123",
//!     "email": "john.doe@example.com",
//!     "password": "SecurePassword123!"
//! }))?;
//! ```

use chrono::{DateTime, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

use super::request::{LoginRequest, UserCreate, UserUpdate};
use super::response::UserResponse;
use super::user_base::UserBase;
use crate::core::errors::{ROOT_FIELD, ValidationFailure};
use crate::domain::entities::users::UserRole;

/// 원시 맵에서 미리 검사하는 필드 값의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 문자열
    Text,
    /// [`UserRole`] 이름 문자열
    Role,
    /// UUID 문자열
    Uuid,
    /// RFC 3339 타임스탬프 문자열
    Timestamp,
    /// 링크 배열
    Links,
}

impl FieldKind {
    /// 값의 형태를 검사하고 실패 사유를 반환합니다.
    fn check(self, value: &Value) -> Result<(), String> {
        match (self, value) {
            (FieldKind::Text, Value::String(_)) => Ok(()),
            (FieldKind::Text, _) => Err("문자열이어야 합니다".to_string()),
            (FieldKind::Role, Value::String(s)) => s.parse::<UserRole>().map(|_| ()),
            (FieldKind::Role, _) => Err("역할은 문자열이어야 합니다".to_string()),
            (FieldKind::Uuid, Value::String(s)) if Uuid::parse_str(s).is_ok() => Ok(()),
            (FieldKind::Uuid, _) => Err("유효한 UUID여야 합니다".to_string()),
            (FieldKind::Timestamp, Value::String(s)) if s.parse::<DateTime<Utc>>().is_ok() => Ok(()),
            (FieldKind::Timestamp, _) => Err("RFC 3339 형식의 날짜/시간이어야 합니다".to_string()),
            (FieldKind::Links, Value::Array(_)) => Ok(()),
            (FieldKind::Links, _) => Err("배열이어야 합니다".to_string()),
        }
    }

    /// 필수 필드가 잘못되었을 때 디코딩을 계속하기 위해 채워 넣는 값
    fn placeholder(self) -> Value {
        match self {
            FieldKind::Uuid => Value::String(Uuid::nil().to_string()),
            FieldKind::Links => Value::Array(Vec::new()),
            _ => Value::String("placeholder".to_string()),
        }
    }
}

/// 스키마가 받는 필드 하나의 이름, 종류, 필수 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind, required: true }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind, required: false }
}

/// 원시 필드 맵에서 파싱할 수 있는 사용자 스키마
pub trait UserSchema: DeserializeOwned + Validate {
    /// 스키마가 받는 모든 필드
    const FIELDS: &'static [FieldSpec];

    /// 목록에 없는 필드를 거부할지 여부
    const DENY_UNKNOWN_FIELDS: bool = false;

    /// [`parse`]의 메서드 형태
    fn from_value(raw: Value) -> Result<Self, ValidationFailure> {
        parse(raw)
    }
}

impl UserSchema for UserBase {
    const FIELDS: &'static [FieldSpec] = &[
        required("nickname", FieldKind::Text),
        required("email", FieldKind::Text),
        optional("first_name", FieldKind::Text),
        optional("last_name", FieldKind::Text),
        optional("role", FieldKind::Role),
        optional("bio", FieldKind::Text),
        optional("profile_picture_url", FieldKind::Text),
        optional("linkedin_profile_url", FieldKind::Text),
        optional("github_profile_url", FieldKind::Text),
    ];
}

impl UserSchema for UserCreate {
    const FIELDS: &'static [FieldSpec] = &[
        required("nickname", FieldKind::Text),
        required("email", FieldKind::Text),
        required("password", FieldKind::Text),
        optional("first_name", FieldKind::Text),
        optional("last_name", FieldKind::Text),
        optional("role", FieldKind::Role),
        optional("bio", FieldKind::Text),
        optional("profile_picture_url", FieldKind::Text),
        optional("linkedin_profile_url", FieldKind::Text),
        optional("github_profile_url", FieldKind::Text),
    ];
}

impl UserSchema for UserUpdate {
    const FIELDS: &'static [FieldSpec] = &[
        optional("nickname", FieldKind::Text),
        optional("email", FieldKind::Text),
        optional("first_name", FieldKind::Text),
        optional("last_name", FieldKind::Text),
        optional("role", FieldKind::Role),
        optional("bio", FieldKind::Text),
        optional("profile_picture_url", FieldKind::Text),
        optional("linkedin_profile_url", FieldKind::Text),
        optional("github_profile_url", FieldKind::Text),
    ];
}

impl UserSchema for LoginRequest {
    const FIELDS: &'static [FieldSpec] = &[
        required("email", FieldKind::Text),
        required("password", FieldKind::Text),
    ];
    const DENY_UNKNOWN_FIELDS: bool = true;
}

impl UserSchema for UserResponse {
    const FIELDS: &'static [FieldSpec] = &[
        required("id", FieldKind::Uuid),
        required("nickname", FieldKind::Text),
        required("email", FieldKind::Text),
        optional("first_name", FieldKind::Text),
        optional("last_name", FieldKind::Text),
        optional("role", FieldKind::Role),
        optional("bio", FieldKind::Text),
        optional("profile_picture_url", FieldKind::Text),
        optional("linkedin_profile_url", FieldKind::Text),
        optional("github_profile_url", FieldKind::Text),
        optional("last_login_at", FieldKind::Timestamp),
        optional("created_at", FieldKind::Timestamp),
        optional("updated_at", FieldKind::Timestamp),
        optional("links", FieldKind::Links),
    ];
}

/// 원시 JSON 값을 검증된 사용자 스키마로 변환합니다.
///
/// # Errors
///
/// 위반된 모든 (필드, 메시지) 쌍을 필드 이름 순으로 담은 [`ValidationFailure`].
/// 구조 오류 중 필드를 특정할 수 없는 것은 `__all__`로 보고됩니다.
pub fn parse<T: UserSchema>(raw: Value) -> Result<T, ValidationFailure> {
    let Value::Object(mut fields) = raw else {
        return Err(ValidationFailure::single(ROOT_FIELD, "JSON 객체여야 합니다"));
    };

    let (mut failure, substituted) = precheck_fields::<T>(&mut fields);

    match serde_json::from_value::<T>(Value::Object(fields)) {
        Ok(record) => {
            let mut field_errors = match record.validate() {
                Ok(()) => ValidationFailure::new(),
                Err(errors) => ValidationFailure::from(errors),
            };
            // 대체값에서 나온 에러는 이미 보고된 구조 에러와 중복
            field_errors
                .errors
                .retain(|e| !substituted.iter().any(|name| *name == e.field));
            failure.merge(field_errors);

            if !failure.is_empty() {
                debug!("사용자 스키마 검증 실패: {}", failure);
            }
            failure.into_result(record)
        }
        Err(e) => {
            failure.merge(decode_failure(&e));
            debug!("사용자 스키마 디코딩 실패: {}", failure);
            Err(failure)
        }
    }
}

/// 원시 맵에서 필드별 구조 검사를 수행합니다.
///
/// 누락되었거나 형태가 잘못된 필드를 모두 기록한 뒤, 디코딩이 계속될 수 있도록
/// 필수 필드는 대체값으로 바꾸고 선택 필드는 제거합니다. 선택 필드의 `null`은
/// 생략과 같게 취급하여 제거합니다. 대체된 필드 이름 목록을 함께 반환합니다.
fn precheck_fields<T: UserSchema>(
    fields: &mut Map<String, Value>,
) -> (ValidationFailure, Vec<&'static str>) {
    let mut failure = ValidationFailure::new();
    let mut substituted = Vec::new();

    if T::DENY_UNKNOWN_FIELDS {
        let unknown: Vec<String> = fields
            .keys()
            .filter(|key| !T::FIELDS.iter().any(|spec| spec.name == key.as_str()))
            .cloned()
            .collect();
        for key in unknown {
            fields.remove(&key);
            failure.push(key, "허용되지 않은 필드입니다");
        }
    }

    for spec in T::FIELDS {
        let problem = match fields.get(spec.name) {
            None | Some(Value::Null) if spec.required => Some("필수 항목입니다".to_string()),
            None | Some(Value::Null) => None,
            Some(value) => spec.kind.check(value).err(),
        };

        if fields.get(spec.name).is_some_and(Value::is_null) {
            fields.remove(spec.name);
        }

        if let Some(message) = problem {
            failure.push(spec.name, message);
            if spec.required {
                fields.insert(spec.name.to_string(), spec.kind.placeholder());
                substituted.push(spec.name);
            } else {
                fields.remove(spec.name);
            }
        }
    }

    (failure, substituted)
}

/// `serde_json` 디코딩 에러를 필드 에러로 변환합니다.
fn decode_failure(error: &serde_json::Error) -> ValidationFailure {
    let text = error.to_string();

    if let Some(field) = backticked_after(&text, "missing field ") {
        return ValidationFailure::single(field, "필수 항목입니다");
    }
    if let Some(field) = backticked_after(&text, "unknown field ") {
        return ValidationFailure::single(field, "허용되지 않은 필드입니다");
    }
    if let Some(field) = backticked_after(&text, "duplicate field ") {
        return ValidationFailure::single(field, "중복된 필드입니다");
    }

    ValidationFailure::single(ROOT_FIELD, text)
}

/// `"missing field `email`"` 형태의 메시지에서 필드 이름을 추출합니다.
fn backticked_after<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(prefix)?.strip_prefix('`')?;
    rest.split_once('`').map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_base_data() -> Value {
        json!({
            "nickname": "john_doe_123",
            "email": "john.doe@example.com",
            "first_name": "John",
            "last_name": "Doe",
            "role": "AUTHENTICATED",
            "bio": "I am a software engineer with over 5 years of experience.",
            "profile_picture_url": "https://example.com/profile_pictures/john_doe.jpg",
            "linkedin_profile_url": "https://linkedin.com/in/johndoe",
            "github_profile_url": "https://github.com/johndoe"
        })
    }

    fn user_create_data() -> Value {
        let mut data = user_base_data();
        data["password"] = json!("SecurePassword123!");
        data
    }

    fn with(mut data: Value, key: &str, value: Value) -> Value {
        data[key] = value;
        data
    }

    fn without(mut data: Value, key: &str) -> Value {
        data.as_object_mut().unwrap().remove(key);
        data
    }

    #[test]
    fn test_user_base_valid() {
        let user: UserBase = parse(user_base_data()).unwrap();
        assert_eq!(user.nickname, "john_doe_123");
        assert_eq!(user.email, "john.doe@example.com");
        assert_eq!(user.display_name(), "John Doe");
    }

    #[test]
    fn test_minimal_creation_defaults_role() {
        let user: UserCreate = parse(json!({
            "nickname": "john_doe_123",
            "email": "john.doe@example.com",
            "password": "SecurePassword123!"
        }))
        .unwrap();

        assert_eq!(user.base.role, UserRole::Authenticated);
        assert_eq!(user.password, "SecurePassword123!");
        assert_eq!(user.base.profile_picture_url, None);
    }

    #[test]
    fn test_explicit_admin_role() {
        let user: UserCreate = parse(with(user_create_data(), "role", json!("ADMIN"))).unwrap();
        assert_eq!(user.base.role, UserRole::Admin);
    }

    #[test]
    fn test_null_role_is_default() {
        let user: UserCreate = parse(with(user_create_data(), "role", Value::Null)).unwrap();
        assert_eq!(user.base.role, UserRole::Authenticated);
    }

    #[test]
    fn test_unknown_role_reported_with_other_fields() {
        let data = with(user_create_data(), "role", json!("SUPERUSER"));
        let data = with(data, "nickname", json!("us"));

        let failure = parse::<UserCreate>(data).unwrap_err();
        assert!(failure.has_field("role"));
        assert!(failure.has_field("nickname"));
    }

    #[test]
    fn test_valid_nicknames() {
        for nickname in ["test_user", "test-user", "testuser123", "123test"] {
            let user: UserBase = parse(with(user_base_data(), "nickname", json!(nickname))).unwrap();
            assert_eq!(user.nickname, nickname);
        }
        let long = "a".repeat(50);
        assert!(parse::<UserBase>(with(user_base_data(), "nickname", json!(long))).is_ok());
    }

    #[test]
    fn test_invalid_nicknames() {
        let too_long = "a".repeat(51);
        for nickname in ["test user", "test?user", "", "us", too_long.as_str()] {
            let failure = parse::<UserBase>(with(user_base_data(), "nickname", json!(nickname))).unwrap_err();
            assert!(failure.has_field("nickname"), "{}", nickname);
        }
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "john@", "@example.com", "john doe@example.com"] {
            let failure = parse::<UserBase>(with(user_base_data(), "email", json!(email))).unwrap_err();
            assert!(failure.has_field("email"), "{}", email);
        }
    }

    #[test]
    fn test_url_fields() {
        for url in [json!("http://valid.com/profile.jpg"), json!("https://valid.com/profile.png"), Value::Null] {
            let user: UserBase = parse(with(user_base_data(), "profile_picture_url", url.clone())).unwrap();
            assert_eq!(user.profile_picture_url.as_deref(), url.as_str());
        }

        for url in ["ftp://invalid.com/profile.jpg", "http//invalid", "https//invalid"] {
            let failure =
                parse::<UserBase>(with(user_base_data(), "profile_picture_url", json!(url))).unwrap_err();
            assert!(failure.has_field("profile_picture_url"), "{}", url);
        }

        let failure =
            parse::<UserBase>(with(user_base_data(), "github_profile_url", json!("github.com/johndoe"))).unwrap_err();
        assert!(failure.has_field("github_profile_url"));
    }

    #[test]
    fn test_gif_profile_picture_rejects_whole_record() {
        let data = with(user_create_data(), "profile_picture_url", json!("https://x.com/p.gif"));

        let failure = parse::<UserCreate>(data).unwrap_err();
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].field, "profile_picture_url");
    }

    #[test]
    fn test_valid_passwords_for_creation() {
        for password in [
            "SecurePassword123@",
            "SecurePassword123@SecurePassword123@SecurePassword123@",
        ] {
            let user: UserCreate = parse(with(user_create_data(), "password", json!(password))).unwrap();
            assert_eq!(user.password, password);
        }
        let max = format!("Aa1!{}", "x".repeat(124));
        assert!(parse::<UserCreate>(with(user_create_data(), "password", json!(max))).is_ok());
    }

    #[test]
    fn test_invalid_passwords_for_creation() {
        let too_long = format!("Aa1!{}", "x".repeat(125));
        for password in [
            "Secure Password",
            "",
            "SecurePassword123",
            "securepassword123@",
            "securepassword1234",
            "12345678",
            "securepassword",
            "!@#$%^&*()",
            "SECUREPASSWORD",
            "SecurePassword",
            "SECURE1234@",
            "Sp1!",
            too_long.as_str(),
        ] {
            let failure = parse::<UserCreate>(with(user_create_data(), "password", json!(password))).unwrap_err();
            assert!(failure.has_field("password"), "{}", password);
        }
    }

    #[test]
    fn test_missing_password_is_reported() {
        let failure = parse::<UserCreate>(without(user_create_data(), "password")).unwrap_err();
        assert_eq!(failure.messages_for("password"), vec!["필수 항목입니다"]);
    }

    #[test]
    fn test_missing_fields_reported_with_other_field_errors() {
        let failure = parse::<UserCreate>(json!({
            "nickname": "a b",
            "email": "not-an-email",
            "profile_picture_url": "https://x.com/p.gif"
        }))
        .unwrap_err();

        for field in ["email", "nickname", "password", "profile_picture_url"] {
            assert!(failure.has_field(field), "{}", field);
        }
        assert_eq!(failure.messages_for("password"), vec!["필수 항목입니다"]);
        assert!(!failure.has_field(ROOT_FIELD));
    }

    #[test]
    fn test_every_missing_required_field_is_reported() {
        let failure = parse::<UserCreate>(json!({ "password": "SecurePassword123!" })).unwrap_err();

        assert_eq!(failure.messages_for("email"), vec!["필수 항목입니다"]);
        assert_eq!(failure.messages_for("nickname"), vec!["필수 항목입니다"]);
        assert_eq!(failure.errors.len(), 2);
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let failure = parse::<UserBase>(with(user_base_data(), "email", Value::Null)).unwrap_err();
        assert_eq!(failure.messages_for("email"), vec!["필수 항목입니다"]);
    }

    #[test]
    fn test_wrong_type_is_attributed_to_its_field() {
        let failure = parse::<UserCreate>(json!({
            "nickname": 123,
            "email": "bad",
            "password": "SecurePassword123!",
            "bio": ["not", "text"]
        }))
        .unwrap_err();

        assert_eq!(failure.messages_for("nickname"), vec!["문자열이어야 합니다"]);
        assert_eq!(failure.messages_for("bio"), vec!["문자열이어야 합니다"]);
        assert!(failure.has_field("email"));
        assert!(!failure.has_field(ROOT_FIELD));
    }

    #[test]
    fn test_login_reports_missing_and_extra_fields_together() {
        let failure = parse::<LoginRequest>(json!({ "nickname": "john", "role": "ADMIN" })).unwrap_err();

        let fields: Vec<&str> = failure.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "nickname", "password", "role"]);
    }

    #[test]
    fn test_user_response_applies_base_rules() {
        let failure = parse::<UserResponse>(json!({
            "id": "not-a-uuid",
            "nickname": "x y",
            "email": "john.doe@example.com",
            "profile_picture_url": "https://x.com/p.gif",
            "created_at": "yesterday"
        }))
        .unwrap_err();

        let fields: Vec<&str> = failure.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["created_at", "id", "nickname", "profile_picture_url"]);
    }

    #[test]
    fn test_all_field_errors_reported_at_once() {
        let data = json!({
            "nickname": "a b",
            "email": "invalid",
            "password": "weak",
            "profile_picture_url": "https://x.com/p.gif"
        });

        let failure = parse::<UserCreate>(data).unwrap_err();
        let fields: Vec<&str> = failure.errors.iter().map(|e| e.field.as_str()).collect();
        for field in ["email", "nickname", "password", "profile_picture_url"] {
            assert!(fields.contains(&field), "{}", field);
        }
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
    }

    #[test]
    fn test_user_update_partial() {
        let update: UserUpdate = parse(json!({
            "email": "john.doe.new@example.com",
            "nickname": "j_doe",
            "first_name": "John",
            "last_name": "Doe",
            "bio": "I specialize in backend development with Python and Node.js.",
            "profile_picture_url": "https://example.com/profile_pictures/john_doe_updated.jpg"
        }))
        .unwrap();

        assert_eq!(update.email.as_deref(), Some("john.doe.new@example.com"));
        assert_eq!(update.first_name.as_deref(), Some("John"));
        assert_eq!(update.role, None);
    }

    #[test]
    fn test_user_update_checks_present_fields_only() {
        let update: UserUpdate = parse(json!({ "bio": "hello" })).unwrap();
        assert_eq!(update.nickname, None);

        let failure = parse::<UserUpdate>(json!({ "nickname": "x y" })).unwrap_err();
        assert!(failure.has_field("nickname"));

        // 비밀번호 필드는 수정 스키마에 없으므로 복잡성 검사도 하지 않음
        let update: UserUpdate = parse(json!({ "role": "MANAGER" })).unwrap();
        assert_eq!(update.role, Some(UserRole::Manager));
    }

    #[test]
    fn test_empty_update_rejected() {
        let failure = parse::<UserUpdate>(json!({})).unwrap_err();
        assert!(failure.has_field(ROOT_FIELD));
    }

    #[test]
    fn test_login_request() {
        let login: LoginRequest = parse(json!({
            "email": "john_doe_123@emai.com",
            "password": "SecurePassword123!"
        }))
        .unwrap();
        assert_eq!(login.email, "john_doe_123@emai.com");

        // 로그인에서는 비밀번호 복잡성을 검사하지 않음
        assert!(parse::<LoginRequest>(json!({ "email": "a@example.com", "password": "simple" })).is_ok());
    }

    #[test]
    fn test_login_rejects_extra_fields() {
        let failure = parse::<LoginRequest>(json!({
            "email": "a@example.com",
            "password": "secret",
            "role": "ADMIN"
        }))
        .unwrap_err();
        assert!(failure.has_field("role"));
    }

    #[test]
    fn test_user_response_valid() {
        let id = uuid::Uuid::new_v4();
        let response: UserResponse = parse(json!({
            "id": id,
            "nickname": "john_doe_123",
            "first_name": "John",
            "last_name": "Doe",
            "role": "AUTHENTICATED",
            "email": "john.doe@example.com",
            "links": []
        }))
        .unwrap();

        assert_eq!(response.id, id);
        assert_eq!(response.last_login_at, None);
        assert!(response.links.is_empty());
    }

    #[test]
    fn test_non_object_input() {
        let failure = parse::<UserBase>(json!(["nickname"])).unwrap_err();
        assert!(failure.has_field(ROOT_FIELD));
    }

    #[test]
    fn test_from_value_method() {
        let user = UserCreate::from_value(user_create_data()).unwrap();
        assert_eq!(user.base.nickname, "john_doe_123");
    }

    #[test]
    fn test_blank_optional_text_becomes_none() {
        let user: UserBase = parse(with(user_base_data(), "bio", json!("   "))).unwrap();
        assert_eq!(user.bio, None);
    }
}
