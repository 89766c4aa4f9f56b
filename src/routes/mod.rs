//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 CRUD 라우트와 헬스체크 엔드포인트를 포함하며,
//! 매칭되지 않는 경로는 엔벨로프 형태의 404 응답으로 처리됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::domain::dto::api_response::ApiResponse;
use crate::handlers;
use actix_web::{web, HttpResponse};
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);

    // 매칭되지 않는 모든 경로는 404 엔벨로프로 응답
    cfg.default_service(web::route().to(not_found));
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 CRUD API 엔드포인트를 등록합니다.
///
/// # Routes
///
/// - `GET /api/users` - 전체 사용자 조회
/// - `GET /api/users/{id}` - 사용자 조회
/// - `POST /api/users` - 사용자 생성
/// - `PUT /api/users/{id}` - 사용자 부분 수정
/// - `PATCH /api/users/{id}` - 사용자 부분 수정
/// - `DELETE /api/users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jo","email":"jo@x.com","phone":"1234567890","company":"Acme","address":{"city":"NYC","zipcode":"10001","geo":{"lat":1,"lng":2}}}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 매칭되는 라우트가 없을 때의 기본 핸들러
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<serde_json::Value>::failure("Resource not found"))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
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
///   "service": "user_directory_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_directory_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
