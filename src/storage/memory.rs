//! 테스트용 인메모리 [`ObjectStorage`]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{ObjectStorage, StorageError};

/// 저장된 오브젝트 (본문 + content type)
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// `HashMap`에 오브젝트를 보관하는 가짜 스토리지
///
/// `failing()`으로 만들면 모든 업로드가 실패하고,
/// `with_delay()`로 만들면 업로드 전에 지정 시간만큼 대기합니다.
#[derive(Default)]
pub struct MemoryObjectStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_puts: bool,
    delay: Option<Duration>,
    puts_started: AtomicUsize,
}

impl MemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    fn path(bucket: &str, key: &str) -> String {
        format!("{}/{}", bucket, key)
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&Self::path(bucket, key))
            .cloned()
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.get(bucket, key).is_some()
    }

    /// 시작된 업로드 호출 수 (완료 여부와 무관)
    pub fn puts_started(&self) -> usize {
        self.puts_started.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// 업로드 경로를 거치지 않고 오브젝트를 직접 넣습니다.
    pub fn insert(&self, bucket: &str, key: &str, body: Vec<u8>) {
        self.objects.lock().unwrap().insert(
            Self::path(bucket, key),
            StoredObject {
                body,
                content_type: "application/octet-stream".to_string(),
            },
        );
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.puts_started.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_puts {
            return Err(StorageError::PutFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "NoSuchBucket".to_string(),
            });
        }

        self.objects.lock().unwrap().insert(
            Self::path(bucket, key),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().remove(&Self::path(bucket, key));
        Ok(())
    }
}
