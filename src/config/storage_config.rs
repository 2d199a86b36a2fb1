//! 오브젝트 스토리지 및 업로드 설정
//!
//! MinIO 접속 정보는 프로세스 시작 시 반드시 존재해야 합니다.
//! 누락된 값은 첫 업로드가 아니라 시작 단계에서 [`ConfigError`]로 보고됩니다.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::errors::ConfigError;

/// 스토리지 호출 기본 타임아웃 (초)
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 10;

/// 기본 리전. MinIO는 리전을 검사하지 않지만 SDK 서명에 필요합니다.
pub const DEFAULT_REGION: &str = "us-east-1";

/// MinIO / S3 호환 스토리지 설정
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// `host:port` 형태의 엔드포인트 (예: `localhost:9000`)
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    /// `true`이면 https 사용
    pub secure: bool,
    pub region: String,
    /// 반환 URL의 베이스. 미설정 시 엔드포인트에서 유도
    pub public_url: Option<String>,
    pub timeout: Duration,
    /// 요청별 임시 디렉토리가 생성될 위치
    pub temp_dir: PathBuf,
}

impl StorageConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - 필수: `MINIO_ENDPOINT`, `MINIO_ACCESS_KEY`, `MINIO_SECRET_KEY`, `MINIO_BUCKET_NAME`
    /// - 선택: `MINIO_SECURE`, `MINIO_REGION`, `MINIO_PUBLIC_URL`,
    ///   `STORAGE_TIMEOUT_SECS`, `UPLOAD_TEMP_DIR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로 설정을 구성합니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않도록 `HashMap`을 넘깁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let endpoint = required("MINIO_ENDPOINT")?;
        let access_key = required("MINIO_ACCESS_KEY")?;
        let secret_key = required("MINIO_SECRET_KEY")?;
        let bucket = required("MINIO_BUCKET_NAME")?;

        let secure = match optional("MINIO_SECURE") {
            None => false,
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                key: "MINIO_SECURE",
                value,
            })?,
        };

        let timeout_secs = match optional("STORAGE_TIMEOUT_SECS") {
            None => DEFAULT_STORAGE_TIMEOUT_SECS,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "STORAGE_TIMEOUT_SECS",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key,
            secret_key,
            bucket,
            secure,
            region: optional("MINIO_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            public_url: optional("MINIO_PUBLIC_URL").map(|u| u.trim_end_matches('/').to_string()),
            timeout: Duration::from_secs(timeout_secs),
            temp_dir: optional("UPLOAD_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        })
    }

    /// 테스트 및 로컬 개발용 설정을 맵으로부터 만듭니다.
    pub fn from_map(map: &HashMap<&str, &str>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    /// SDK가 접속할 엔드포인트 URL
    ///
    /// 엔드포인트에 이미 스킴이 있으면 그대로 사용합니다.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            self.endpoint.clone()
        } else {
            let scheme = if self.secure { "https" } else { "http" };
            format!("{}://{}", scheme, self.endpoint)
        }
    }

    /// 클라이언트에 반환할 이미지 URL의 베이스
    pub fn public_base_url(&self) -> String {
        self.public_url.clone().unwrap_or_else(|| self.endpoint_url())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
