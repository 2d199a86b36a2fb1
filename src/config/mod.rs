//! # Configuration Module
//!
//! 환경 변수 기반 설정을 중앙집중식으로 관리합니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩 설정
//! - [`storage_config`] - MinIO 오브젝트 스토리지, 업로드 임시 디렉토리 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export MINIO_ENDPOINT="localhost:9000"
//! export MINIO_ACCESS_KEY="minioadmin"
//! export MINIO_SECRET_KEY="minioadmin"
//! export MINIO_BUCKET_NAME="profile-pictures"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MINIO_SECURE="false"
//! export MINIO_REGION="us-east-1"
//! export MINIO_PUBLIC_URL="https://cdn.example.com"
//! export STORAGE_TIMEOUT_SECS="10"
//! export UPLOAD_TEMP_DIR="/var/tmp/uploads"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `@ConfigurationProperties` | `StorageConfig::from_env()` |

pub mod data_config;
pub mod storage_config;

pub use data_config::*;
pub use storage_config::*;
