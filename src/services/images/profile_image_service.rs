//! # 프로필 이미지 수집 서비스
//!
//! 업로드된 이미지를 검증하고 200×200으로 리사이즈한 뒤 오브젝트 스토리지에
//! 저장하여 공개 URL을 돌려줍니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! bytes + file_name + user_id
//!        │
//!        ├─ 확장자 검사 (png/jpg/jpeg) ──────────► UnsupportedFormat
//!        ├─ 크기 검사 (10 MiB) ──────────────────► FileTooLarge
//!        │
//!        ▼
//! <temp_root>/upload-<request_id>-XXXX/   (TempDir, drop 시 삭제)
//!        │
//!        ├─ 원본 기록 ────────────────────────────► TempFile
//!        ├─ 디코드 + resize_exact (spawn_blocking) ► DecodeFailed
//!        ├─ <user_id>.<ext> 인코딩
//!        │
//!        ▼
//! ObjectStorage::put_object (timeout) ────────────► StorageUnavailable
//!        │
//!        ├─ 다른 확장자의 이전 이미지 삭제 (실패 시 경고 로그만)
//!        ▼
//! <public_base>/<bucket>/<user_id>.<ext>
//! ```
//!
//! 임시 디렉토리는 요청 ID로 이름이 정해지므로 같은 사용자의 동시 업로드도
//! 서로의 파일을 덮어쓰지 않습니다. 성공, 실패, 호출자 취소 모든 경로에서
//! `TempDir`가 drop되며 디렉토리가 삭제됩니다.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::core::errors::ImageIngestError;
use crate::storage::ObjectStorage;
use crate::utils::string_utils::file_extension;

/// 허용되는 업로드 확장자 (소문자)
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 업로드 최대 크기 (10 MiB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// 저장되는 프로필 이미지의 한 변 길이 (픽셀)
pub const PROFILE_IMAGE_SIZE: u32 = 200;

/// 프로필 이미지 수집 서비스
///
/// 상태를 공유하지 않으므로 하나의 인스턴스를 `Arc`로 감싸 모든 요청에서 사용합니다.
///
/// ```rust,ignore
/// let storage = Arc::new(S3ObjectStorage::connect(&config).await);
/// let service = ProfileImageService::from_config(storage, &config);
///
/// let url = service.ingest(&bytes, "avatar.png", user_id).await?;
/// ```
pub struct ProfileImageService {
    storage: Arc<dyn ObjectStorage>,
    bucket: String,
    public_base_url: String,
    temp_root: PathBuf,
    storage_timeout: Duration,
}

impl ProfileImageService {
    pub fn new(
        storage: Arc<dyn ObjectStorage>,
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
        temp_root: impl Into<PathBuf>,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            storage,
            bucket: bucket.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            temp_root: temp_root.into(),
            storage_timeout,
        }
    }

    pub fn from_config(storage: Arc<dyn ObjectStorage>, config: &StorageConfig) -> Self {
        Self::new(
            storage,
            config.bucket.clone(),
            config.public_base_url(),
            config.temp_dir.clone(),
            config.timeout,
        )
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// 파일명의 확장자가 허용 목록에 있는지 확인합니다. 대소문자는 구분하지 않습니다.
    pub fn is_allowed_file(file_name: &str) -> bool {
        file_extension(file_name)
            .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// 업로드된 이미지를 처리하고 저장된 이미지의 공개 URL을 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `bytes` - 업로드된 파일 내용
    /// * `file_name` - 클라이언트가 보낸 원본 파일명 (확장자 판별용)
    /// * `user_id` - 이미지 소유자. 오브젝트 키는 `<user_id>.<ext>`
    ///
    /// # Errors
    ///
    /// | 상황 | 에러 |
    /// |------|------|
    /// | 허용되지 않은 확장자 | `UnsupportedFormat` |
    /// | 10 MiB 초과 | `FileTooLarge` |
    /// | 임시 디렉토리 I/O 실패 | `TempFile` |
    /// | 디코드/인코드 실패 | `DecodeFailed` |
    /// | 업로드 실패 또는 타임아웃 | `StorageUnavailable` |
    pub async fn ingest(
        &self,
        bytes: &[u8],
        file_name: &str,
        user_id: Uuid,
    ) -> Result<String, ImageIngestError> {
        let started = Instant::now();

        let extension = file_extension(file_name)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| ImageIngestError::UnsupportedFormat(file_name.to_string()))?;

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ImageIngestError::FileTooLarge {
                size: bytes.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let request_id = Uuid::new_v4();
        tokio::fs::create_dir_all(&self.temp_root).await?;
        let workdir = tempfile::Builder::new()
            .prefix(&format!("upload-{}-", request_id))
            .tempdir_in(&self.temp_root)?;

        log::debug!(
            "Ingesting profile image for user {} (request {}, {} bytes)",
            user_id,
            request_id,
            bytes.len()
        );

        let source_path = workdir.path().join(format!("source.{}", extension));
        tokio::fs::write(&source_path, bytes).await?;

        let key = format!("{}.{}", user_id, extension);
        let output_path = workdir.path().join(&key);
        let format = output_format(&extension);

        {
            let source_path = source_path.clone();
            let output_path = output_path.clone();
            tokio::task::spawn_blocking(move || resize_to_profile(&source_path, &output_path, format))
                .await
                .map_err(|e| ImageIngestError::DecodeFailed(e.to_string()))??;
        }

        let body = tokio::fs::read(&output_path).await?;
        self.upload(&key, body, content_type(format)).await?;
        self.remove_stale_variants(user_id, &extension).await;

        let url = self.public_url(&key);
        log::info!("🖼️ Profile image stored for user {}: {} ({:?})", user_id, url, started.elapsed());

        Ok(url)
    }

    async fn upload(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), ImageIngestError> {
        let put = self.storage.put_object(&self.bucket, key, body, content_type);

        match tokio::time::timeout(self.storage_timeout, put).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                log::error!("❌ Profile image upload failed: {}", e);
                Err(ImageIngestError::StorageUnavailable(e.to_string()))
            }
            Err(_) => {
                log::error!(
                    "❌ Profile image upload to {}/{} timed out after {:?}",
                    self.bucket,
                    key,
                    self.storage_timeout
                );
                Err(ImageIngestError::StorageUnavailable(format!(
                    "upload timed out after {:?}",
                    self.storage_timeout
                )))
            }
        }
    }

    /// 사용자당 하나의 이미지만 남도록 다른 확장자로 저장된 이전 이미지를 삭제합니다.
    async fn remove_stale_variants(&self, user_id: Uuid, kept_extension: &str) {
        for extension in ALLOWED_EXTENSIONS.iter().filter(|ext| **ext != kept_extension) {
            let key = format!("{}.{}", user_id, extension);
            if let Err(e) = self.storage.delete_object(&self.bucket, &key).await {
                log::warn!("⚠️ Failed to remove stale profile image {}: {}", key, e);
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, key)
    }
}

fn output_format(extension: &str) -> ImageFormat {
    match extension {
        "png" => ImageFormat::Png,
        _ => ImageFormat::Jpeg,
    }
}

fn content_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        _ => "image/jpeg",
    }
}

/// 원본을 디코드하여 정확히 200×200으로 리사이즈한 뒤 저장합니다.
///
/// 종횡비는 유지하지 않습니다. 블로킹 스레드 풀에서 실행됩니다.
fn resize_to_profile(source: &Path, output: &Path, format: ImageFormat) -> Result<(), ImageIngestError> {
    let raw = std::fs::read(source)?;
    let decoded = image::load_from_memory(&raw).map_err(|e| ImageIngestError::DecodeFailed(e.to_string()))?;

    let resized = decoded.resize_exact(PROFILE_IMAGE_SIZE, PROFILE_IMAGE_SIZE, FilterType::Lanczos3);

    // JPEG 인코더는 알파 채널을 지원하지 않음
    let resized = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
        _ => resized,
    };

    resized
        .save_with_format(output, format)
        .map_err(|e| ImageIngestError::DecodeFailed(e.to_string()))
}
