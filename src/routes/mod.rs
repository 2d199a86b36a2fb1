//! HTTP 라우트 설정 모듈
//!
//! 프로세스 감독(로드밸런서, 오케스트레이터)을 위한 헬스체크 엔드포인트를 제공합니다.
//! 사용자 스키마와 이미지 수집은 라이브러리 API로 노출되며 별도의 REST 엔드포인트는 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(image_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::services::images::ProfileImageService;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_profile_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "storage": { "bucket": "profile-pictures" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(images: web::Data<ProfileImageService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": {
            "bucket": images.bucket(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryObjectStorage;
    use actix_web::{test, App};
    use std::sync::Arc;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_health_check_reports_bucket() {
        let service = Arc::new(ProfileImageService::new(
            Arc::new(MemoryObjectStorage::new()),
            "profile-pictures",
            "http://localhost:9000",
            std::env::temp_dir(),
            Duration::from_secs(1),
        ));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"]["bucket"], "profile-pictures");
    }
}
