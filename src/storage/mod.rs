//! # Object Storage Module
//!
//! 프로필 이미지를 보관하는 S3 호환 오브젝트 스토리지 추상화입니다.
//!
//! ```text
//! ProfileImageService
//!        │ Arc<dyn ObjectStorage>
//!        ▼
//! ┌──────────────────┐      ┌──────────────────────┐
//! │  ObjectStorage   │◄─────│  S3ObjectStorage     │  aws-sdk-s3 (MinIO)
//! │  (trait)         │◄─────│  MemoryObjectStorage │  테스트 전용
//! └──────────────────┘      └──────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `interface FileStorage` | `trait ObjectStorage` |
//! | `@Component class S3FileStorage` | `S3ObjectStorage` |
//! | `@MockBean` | `MemoryObjectStorage` |

pub mod s3;

#[cfg(test)]
pub mod memory;

pub use s3::S3ObjectStorage;

#[cfg(test)]
pub use memory::MemoryObjectStorage;

use async_trait::async_trait;
use thiserror::Error;

/// 오브젝트 스토리지 호출 실패
#[derive(Debug, Error)]
pub enum StorageError {
    /// 업로드 실패 (버킷 없음, 권한 오류, 네트워크 장애 등)
    #[error("Failed to put object {bucket}/{key}: {message}")]
    PutFailed {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to delete object {bucket}/{key}: {message}")]
    DeleteFailed {
        bucket: String,
        key: String,
        message: String,
    },
}

/// 버킷 + 키로 주소가 지정되는 바이너리 저장소
///
/// 구현체는 여러 요청에서 동시에 공유되므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// `bucket/key`에 바이트를 저장합니다. 같은 키가 있으면 덮어씁니다.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// `bucket/key`를 삭제합니다. 키가 없어도 성공으로 취급합니다.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError>;
}
