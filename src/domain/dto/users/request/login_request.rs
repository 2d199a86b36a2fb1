//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로컬 로그인 요청 구조체
///
/// 이메일과 비밀번호 외의 필드는 허용하지 않습니다.
/// 비밀번호 복잡성은 생성 시에만 검사하므로 여기서는 빈 값만 거부합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
