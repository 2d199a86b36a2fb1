//! User Role
//!
//! 사용자 권한 역할 열거형입니다.
//! 생략 시 항상 `AUTHENTICATED`로 결정됩니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 사용자 역할
///
/// JSON에서는 대문자 이름(`"ADMIN"` 등)으로 직렬화됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// 익명 사용자
    Anonymous,
    /// 로그인한 일반 사용자 (기본값)
    #[default]
    Authenticated,
    /// 매니저
    Manager,
    /// 관리자
    Admin,
}

impl UserRole {
    /// 허용되는 모든 역할
    pub const ALL: [UserRole; 4] = [
        UserRole::Anonymous,
        UserRole::Authenticated,
        UserRole::Manager,
        UserRole::Admin,
    ];

    /// 역할의 직렬화 이름을 반환합니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(UserRole::Admin.as_str(), "ADMIN");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Anonymous => "ANONYMOUS",
            UserRole::Authenticated => "AUTHENTICATED",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    /// 대소문자를 구분하여 역할 이름을 파싱합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = UserRole::ALL.iter().map(UserRole::as_str).collect();
                format!("역할은 {} 중 하나여야 합니다: {}", allowed.join(", "), s)
            })
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
