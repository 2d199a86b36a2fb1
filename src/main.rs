//! 사용자 프로필 백엔드 메인 애플리케이션
//!
//! 환경 설정을 로드하고 오브젝트 스토리지 클라이언트를 한 번 구성한 뒤,
//! 헬스체크 엔드포인트를 제공하는 Actix-web 서버를 구동합니다.

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use user_profile_backend::config::{Environment, ServerConfig, StorageConfig};
use user_profile_backend::core::errors::{AppResult, ErrorContext};
use user_profile_backend::routes::configure_all_routes;
use user_profile_backend::services::images::ProfileImageService;
use user_profile_backend::storage::{ObjectStorage, S3ObjectStorage};

#[actix_web::main]
async fn main() -> AppResult<()> {
    // 환경 설정 및 로깅 초기화
    let env_file_status = load_env_file();
    init_logging();
    info!("{}", env_file_status);

    let environment = Environment::current();
    info!("🚀 사용자 프로필 서비스 시작중... (environment: {})", environment);

    // 필수 스토리지 설정이 없으면 첫 업로드가 아니라 여기서 실패
    let storage_config = StorageConfig::from_env()?;
    info!(
        "🪣 Bucket: {}, timeout: {:?}, temp dir: {}",
        storage_config.bucket,
        storage_config.timeout,
        storage_config.temp_dir.display()
    );

    let image_service = initialize_image_service(&storage_config).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(image_service).await
}

/// 스토리지 클라이언트를 만들고 이미지 서비스에 주입합니다
async fn initialize_image_service(config: &StorageConfig) -> Arc<ProfileImageService> {
    let storage: Arc<dyn ObjectStorage> = Arc::new(S3ObjectStorage::connect(config).await);
    Arc::new(ProfileImageService::from_config(storage, config))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// 포트 바인딩 실패 또는 서버 실행 오류 시 `AppError::InternalError`
async fn start_http_server(image_service: Arc<ProfileImageService>) -> AppResult<()> {
    let (host, port) = ServerConfig::bind_address();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    let image_data = web::Data::from(image_service);

    HttpServer::new(move || {
        App::new()
            .app_data(image_data.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("{}:{} 바인딩 실패", host, port))?
    .run()
    .await
    .context("HTTP 서버 실행 오류")
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 아직 초기화되지 않았으므로 결과 메시지를 반환하여 호출자가 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => format!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => format!("Current profile: {} (환경 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경에 따라 기본 필터를 정합니다.
///
/// ```bash
/// RUST_LOG=user_profile_backend::services=debug cargo run
/// ```
fn init_logging() {
    let default_filter = format!(
        "{},actix_web=info,aws_config=warn,aws_smithy_runtime=warn",
        Environment::current().default_log_filter()
    );
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}
