//! 애플리케이션 전역 에러 타입과 HTTP 변환 규칙
//!
//! `thiserror` 기반의 [`AppError`]가 요청 처리 중 발생하는 모든 실패를
//! 표현하고, `actix_web::ResponseError` 구현이 각 변형을 상태 코드가
//! 지정된 `{success, message, data}` 엔벨로프 응답으로 변환합니다.
//! 핸들러는 `?`로 에러를 전파하기만 하면 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn get_user(id: &str) -> Result<User, AppError> {
//!     let user = user_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
//!
//!     Ok(user)
//! }
//! ```

use thiserror::Error;
use crate::domain::dto::api_response::ApiResponse;

/// 요청 처리 실패의 전체 분류
///
/// 변형별 HTTP 상태 코드 매핑은 `ResponseError` 구현에 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 드라이버가 보고한 메시지를 가공 없이 그대로 노출합니다.
    #[error("{0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 - 단일 메시지 (400 Bad Request)
    ///
    /// 잘못된 ObjectId 형식 등 필드 단위 검증 이전에 걸러지는 오류입니다.
    #[error("{0}")]
    ValidationError(String),

    /// 페이로드 검증 실패 - 위반 사항 목록 (400 Bad Request)
    ///
    /// 모든 필드를 빠짐없이 검사한 뒤 수집된 위반 메시지들을
    /// 응답 엔벨로프의 `data` 필드로 전달합니다.
    #[error("Validation failed")]
    ValidationFailed(Vec<String>),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 엔벨로프 형태의
    /// JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match self {
            AppError::ValidationFailed(violations) => actix_web::HttpResponse::build(status)
                .json(ApiResponse::failure_with(self.to_string(), violations.clone())),
            _ => actix_web::HttpResponse::build(status)
                .json(ApiResponse::<serde_json::Value>::failure(self.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Invalid ID format".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_failed_response() {
        let error = AppError::ValidationFailed(vec![
            "name is required".to_string(),
            "email must be a valid email address".to_string(),
        ]);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email is already in use".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::ValidationError("Invalid ID format".to_string()).to_string(),
            "Invalid ID format"
        );
        assert_eq!(
            AppError::NotFound("User not found".to_string()).to_string(),
            "User not found"
        );
        assert_eq!(
            AppError::ValidationFailed(vec!["x".to_string()]).to_string(),
            "Validation failed"
        );
        // 드라이버 메시지가 접두사 없이 그대로 전달되는지 확인
        assert_eq!(
            AppError::DatabaseError("boom".to_string()).to_string(),
            "boom"
        );
    }

}
