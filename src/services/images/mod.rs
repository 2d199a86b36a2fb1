//! 프로필 이미지 서비스 모듈
//!
//! 업로드된 사진을 검증, 리사이즈하여 오브젝트 스토리지에 저장합니다.

pub mod profile_image_service;

pub use profile_image_service::{ProfileImageService, ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES, PROFILE_IMAGE_SIZE};
