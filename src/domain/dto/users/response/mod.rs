//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 일관된 형태로 전달하는 응답 스키마들입니다.
//!
//! - `UserResponse` - 서버 부여 `id`, 타임스탬프, 내비게이션 링크를 포함한 사용자 정보
//! - `UserListResponse` - 페이지네이션된 사용자 목록
//! - `Link` - HATEOAS 스타일 내비게이션 참조
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "0b3e5c1e-8a52-4c55-9a39-4b8f8a3a6e0d",
//!   "nickname": "john_doe_123",
//!   "email": "john.doe@example.com",
//!   "role": "AUTHENTICATED",
//!   "last_login_at": null,
//!   "created_at": "2024-06-01T10:00:00Z",
//!   "updated_at": "2024-06-07T12:00:00Z",
//!   "links": [
//!     { "rel": "self", "href": "http://localhost:8080/api/v1/users/0b3e...", "action": "GET", "type": "application/json" }
//!   ]
//! }
//! ```
//!
//! 비밀번호는 어떤 응답에도 포함되지 않습니다.

pub mod link;
pub mod user_response;

pub use link::Link;
pub use user_response::{UserListResponse, UserResponse};
