use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::link::Link;
use crate::domain::dto::users::user_base::UserBase;

/// 사용자 응답 DTO
///
/// 서버가 부여한 `id`, 타임스탬프, 내비게이션 링크를 기본 필드에 더합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserResponse {
    pub id: Uuid,

    #[serde(flatten)]
    #[validate(nested)]
    pub base: UserBase,

    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    /// 순서가 있는 내비게이션 링크 (비어 있을 수 있음)
    #[serde(default)]
    pub links: Vec<Link>,
}

impl UserResponse {
    /// 새 응답 생성 (타임스탬프와 링크는 비어 있음)
    pub fn new(id: Uuid, base: UserBase) -> Self {
        Self {
            id,
            base,
            last_login_at: None,
            created_at: None,
            updated_at: None,
            links: Vec::new(),
        }
    }

    /// `self`, `update`, `delete` 링크를 추가합니다.
    ///
    /// ```rust,ignore
    /// let response = UserResponse::new(id, base).with_navigation_links("http://localhost:8080/api/v1");
    /// assert_eq!(response.links[0].href, format!("http://localhost:8080/api/v1/users/{}", id));
    /// ```
    pub fn with_navigation_links(mut self, api_base: &str) -> Self {
        let href = format!("{}/users/{}", api_base.trim_end_matches('/'), self.id);

        self.links.push(Link::new("self", href.clone(), "GET"));
        self.links.push(Link::new("update", href.clone(), "PUT"));
        self.links.push(Link::new("delete", href, "DELETE"));
        self
    }
}

/// 사용자 목록 응답 DTO (페이지네이션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<UserResponse>,
    pub total: u64,
    /// 1부터 시작하는 페이지 번호
    pub page: u32,
    pub size: u32,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl UserListResponse {
    pub fn new(items: Vec<UserResponse>, total: u64, page: u32, size: u32) -> Self {
        Self {
            items,
            total,
            page: page.max(1),
            size,
            links: Vec::new(),
        }
    }

    /// 마지막 페이지 번호 (항목이 없어도 최소 1)
    pub fn last_page(&self) -> u32 {
        if self.size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.size as u64).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// `self`, `first`, `last`, 그리고 가능하면 `prev`/`next` 링크를 추가합니다.
    pub fn with_pagination_links(mut self, api_base: &str) -> Self {
        let base = api_base.trim_end_matches('/');
        let size = self.size;
        let page_href = |page: u32| format!("{}/users?page={}&size={}", base, page, size);

        let last = self.last_page();
        let mut links = vec![
            Link::new("self", page_href(self.page), "GET"),
            Link::new("first", page_href(1), "GET"),
            Link::new("last", page_href(last), "GET"),
        ];
        if self.page > 1 {
            links.push(Link::new("prev", page_href(self.page - 1), "GET"));
        }
        if self.page < last {
            links.push(Link::new("next", page_href(self.page + 1), "GET"));
        }

        self.links.extend(links);
        self
    }
}
