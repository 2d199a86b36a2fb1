//! 응답 내비게이션 링크

use serde::{Deserialize, Serialize};

/// 응답에 포함되는 내비게이션 참조 (HATEOAS 링크)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// 링크 관계 (`self`, `update`, `next` 등)
    pub rel: String,
    pub href: String,
    /// HTTP 메서드
    pub action: String,
    /// 미디어 타입
    #[serde(rename = "type", default = "default_media_type")]
    pub media_type: String,
}

fn default_media_type() -> String {
    "application/json".to_string()
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            action: action.into(),
            media_type: default_media_type(),
        }
    }
}
