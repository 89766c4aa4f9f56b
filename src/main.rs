//! 사용자 디렉터리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 서비스 의존성을 초기화합니다.
//! MongoDB 연결을 설정하고 사용자 CRUD REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_directory_backend::config::{CorsConfig, Environment, ServerConfig};
use user_directory_backend::db::Database;
use user_directory_backend::domain::dto::api_response::ApiResponse;
use user_directory_backend::repositories::users::user_repo::UserRepository;
use user_directory_backend::routes::configure_all_routes;
use user_directory_backend::services::users::user_service::UserService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 읽어옵니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패한 값은 기본값으로 대체됩니다.
    fn from_env() -> Self {
        let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self {
            per_second,
            burst_size,
        };

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 디렉터리 서비스 시작중...");
    info!("실행 환경: {:?}", Environment::current());

    // 데이터베이스 연결 및 의존성 구성
    let database = initialize_database().await;

    let user_repo = Arc::new(UserRepository::new(database));

    // 이메일 유일성 불변 조건을 저장소 수준에서 보장
    user_repo
        .create_indexes()
        .await
        .expect("이메일 유니크 인덱스 생성 실패");

    let user_service = web::Data::new(UserService::new(user_repo));

    info!("✅ 모든 의존성이 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화, Rate Limiting 미들웨어를 적용하고,
/// 사용자 서비스 핸들과 JSON 본문 에러 핸들러를 모든 워커에 주입합니다.
///
/// # Arguments
///
/// * `user_service` - 핸들러에 주입될 사용자 서비스 핸들
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 의존성 주입 및 본문 파싱 설정
            .app_data(user_service.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수 값에 따라 `.env.dev`(기본값) 또는 `.env.prod`를
/// 로드하고, 그 외의 값이면 기본 `.env` 파일을 사용합니다.
/// `.env` 파일이 `RUST_LOG`를 정의할 수 있으므로 로깅 초기화보다
/// 먼저 실행되어야 합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 환경변수를 기반으로 로깅 레벨을 설정합니다.
/// 기본 필터는 info 레벨이며, actix_web은 debug 레벨입니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// 연결에 성공하면 Arc로 래핑된 핸들을 반환하고,
/// 실패하면 애플리케이션이 즉시 종료됩니다.
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    )
}

/// CORS 설정을 구성합니다
///
/// 설정된 단일 프론트엔드 Origin만 허용하는 정책입니다.
///
/// # Allowed Origin
///
/// * `FRONTEND_URL` 환경변수 값 (기본값: `http://localhost:3000`)
///
/// # Allowed Methods
///
/// * GET / POST / PUT / PATCH / DELETE
fn configure_cors() -> Cors {
    let frontend_origin = CorsConfig::frontend_origin();

    Cors::default()
        // 허용할 Origin 설정 (단일 Origin)
        .allowed_origin(&frontend_origin)

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// JSON 본문 파싱 실패를 엔벨로프 응답으로 변환합니다
///
/// 핸들러에 도달하기 전에 발생하는 역직렬화 오류도
/// `{success, message}` 형태를 유지하도록 합니다.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(
        ApiResponse::<serde_json::Value>::failure(format!("Invalid JSON payload: {}", err)),
    );

    actix_web::error::InternalError::from_response(err, response).into()
}
