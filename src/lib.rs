//! 사용자 프로필 백엔드
//!
//! 사용자 계정 데이터의 스키마 검증과 프로필 이미지 수집 파이프라인을 제공합니다.
//!
//! # Features
//!
//! - **스키마 검증**: 생성/수정/로그인/응답 스키마의 필드별 검증 결과 수집
//! - **역할 모델**: `ANONYMOUS`, `AUTHENTICATED`, `MANAGER`, `ADMIN`
//! - **HATEOAS 링크**: 단건/목록 응답의 탐색 링크 생성
//! - **프로필 이미지**: 검증, 200×200 리사이즈, S3 호환 스토리지(MinIO) 업로드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Services     │ ──► │     Domain      │ ← 스키마, 검증 규칙
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Storage     │ ← ObjectStorage (aws-sdk-s3)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_profile_backend::domain::{parse, UserCreate};
//!
//! let user: UserCreate = parse(serde_json::json!({
//!     "nickname": "john_doe",
//!     "email": "john@example.com",
//!     "password": "Str0ng!Pass",
//! }))?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;
