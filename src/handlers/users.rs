//! # User Management HTTP Handlers
//!
//! 사용자 자원의 CRUD HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 핸들러는 단일 요청/응답 패턴을 따릅니다:
//! 경로/본문 입력 검증 → 서비스 호출 → 엔벨로프 응답 변환.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 전체 사용자 조회 | 200 OK |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK |
//! | `POST` | `/api/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/api/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `PATCH` | `/api/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `ResponseError` 구현을 통해 자동으로 엔벨로프 응답으로
//! 변환됩니다. 핸들러 밖으로 빠져나가는 에러는 없습니다.
//!
//! | 에러 | HTTP 상태 코드 |
//! |------|----------------|
//! | 잘못된 ID 형식 | 400 Bad Request |
//! | 페이로드 검증 실패 | 400 Bad Request (위반 목록 포함) |
//! | 사용자 없음 | 404 Not Found |
//! | 이메일 중복 | 409 Conflict |
//! | 데이터베이스 오류 | 500 Internal Server Error |

use actix_web::{delete, get, post, route, web, HttpResponse};
use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 전체 사용자 조회 핸들러
///
/// 저장된 모든 사용자를 저장 순서 그대로 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/users`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "message": "Users fetched successfully",
///   "data": [ { "id": "...", "name": "...", "email": "...", ... } ]
/// }
/// ```
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Users fetched successfully", users)))
}

/// 사용자 조회 핸들러
///
/// 지정된 ID의 사용자 정보를 조회합니다.
///
/// # 엔드포인트
///
/// `GET /api/users/{user_id}`
///
/// # 경로 파라미터
///
/// - `user_id`: 조회할 사용자의 고유 ID (MongoDB ObjectId)
///
/// # 실패 사례
///
/// - 잘못된 ID 형식 (400): `{"success": false, "message": "Invalid ID format"}`
/// - 사용자 없음 (404): `{"success": false, "message": "User not found"}`
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("User fetched successfully", user)))
}

/// 사용자 생성 핸들러
///
/// 생성 규칙 검증을 통과한 페이로드로 새 사용자를 생성합니다.
/// 검증은 모든 필드를 끝까지 검사하므로 실패 응답의 `data`에
/// 전체 위반 목록이 담깁니다.
///
/// # 엔드포인트
///
/// `POST /api/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Jo",
///   "email": "JO@X.COM",
///   "phone": "1234567890",
///   "company": "Acme",
///   "address": {
///     "city": "NYC",
///     "zipcode": "10001",
///     "geo": { "lat": 1, "lng": 2 }
///   }
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
///
/// 이메일은 소문자로, trim 대상 필드는 정리된 값으로 저장됩니다.
///
/// ## 실패 사례
///
/// ### 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "success": false,
///   "message": "Validation failed",
///   "data": ["name is required", "email must be a valid email address"]
/// }
/// ```
///
/// ### 중복 이메일 (409 Conflict)
/// ```json
/// {
///   "success": false,
///   "message": "Email is already in use"
/// }
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 및 정규화
    let fields = payload.into_inner().validate()?;

    let user = service.create_user(fields).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("User created successfully", user)))
}

/// 사용자 수정 핸들러
///
/// 부분 수정 규칙을 통과한 필드만 변경합니다. `PUT`과 `PATCH` 모두
/// 동일한 부분 수정 의미론을 가집니다. 빈 페이로드 또는 인식되지 않는
/// 키만 있는 페이로드는 400으로 거부됩니다.
///
/// # 엔드포인트
///
/// `PUT /api/users/{user_id}` / `PATCH /api/users/{user_id}`
///
/// # 요청 본문
///
/// 생성 필드 집합의 부분 집합. 중첩 주소 필드도 개별적으로 수정 가능:
///
/// ```json
/// { "company": "Acme", "address": { "city": "Busan" } }
/// ```
#[route("/{user_id}", method = "PUT", method = "PATCH")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 및 정규화
    let patch = payload.into_inner().validate()?;

    let user = service.update_user(&user_id, patch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("User updated successfully", user)))
}

/// 사용자 삭제 핸들러
///
/// 지정된 ID의 사용자를 영구적으로 삭제합니다. 성공 시 `data`는
/// 명시적 `null`입니다.
///
/// # 엔드포인트
///
/// `DELETE /api/users/{user_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "success": true, "message": "User deleted successfully", "data": null }
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_null("User deleted successfully")))
}
