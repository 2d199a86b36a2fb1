//! aws-sdk-s3 기반 [`ObjectStorage`] 구현
//!
//! MinIO 같은 S3 호환 서버를 대상으로 하므로 정적 자격 증명, 사용자 지정
//! 엔드포인트, path-style 주소 지정을 사용합니다.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::StorageConfig;

use super::{ObjectStorage, StorageError};

/// S3 호환 오브젝트 스토리지 클라이언트
///
/// 프로세스 시작 시 한 번 생성하여 `Arc`로 공유합니다.
/// 내부 `Client`는 커넥션 풀을 가지고 있어 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
}

impl S3ObjectStorage {
    /// 이미 구성된 SDK 클라이언트로 생성합니다.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 스토리지 설정으로 클라이언트를 구성합니다.
    ///
    /// 네트워크 연결은 첫 요청 시점에 이루어지므로 이 함수는 실패하지 않습니다.
    pub async fn connect(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "static-env",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(config.endpoint_url())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        log::info!("🪣 Object storage client configured for {}", config.endpoint_url());

        Self::new(Client::from_conf(s3_config))
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        log::debug!("Uploading {} bytes to {}/{}", body.len(), bucket, key);

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::PutFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}
