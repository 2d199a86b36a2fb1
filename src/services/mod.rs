//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `Arc`로 공유되며,
//! 외부 의존성(오브젝트 스토리지)은 trait 객체로 주입받습니다.
//!
//! # Features
//!
//! - 프로필 이미지 검증, 리사이즈, 업로드
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::images::ProfileImageService;
//!
//! let service = ProfileImageService::from_config(storage, &storage_config);
//! let url = service.ingest(&bytes, "avatar.png", user_id).await?;
//! ```

pub mod images;
