//! 공통 응답 엔벨로프 DTO
//!
//! 모든 HTTP 응답을 `{success, message, data}` 형태로 감싸는
//! 순수 포맷팅 구조체입니다. 상태 코드는 핸들러/에러 계층에서 결정되고,
//! 이 타입은 본문 형태만 책임집니다.

use serde::{Deserialize, Serialize};

/// 통일된 JSON 응답 엔벨로프
///
/// 성공 응답은 `data`에 결과를 담고, 실패 응답은 `data`를 생략하거나
/// 검증 위반 목록을 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 요청 처리 성공 여부
    pub success: bool,
    /// 사람이 읽을 수 있는 결과 메시지
    pub message: String,
    /// 응답 데이터 (없으면 필드 자체가 생략됨)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 성공 응답 생성
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 실패 응답 생성 (데이터 없음)
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// 데이터를 포함한 실패 응답 생성
    ///
    /// 검증 위반 메시지 목록 전달에 사용됩니다.
    pub fn failure_with(message: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// 명시적 `null` 데이터를 갖는 성공 응답 생성
    ///
    /// 삭제 성공처럼 반환할 데이터가 없는 경우에 사용됩니다.
    pub fn ok_null(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(serde_json::Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serializes_data() {
        let response = ApiResponse::ok("Users fetched successfully", vec!["a", "b"]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Users fetched successfully");
        assert_eq!(value["data"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_failure_omits_data_field() {
        let response = ApiResponse::<serde_json::Value>::failure("User not found");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "User not found");
        assert!(value.as_object().unwrap().get("data").is_none());
    }

    #[test]
    fn test_failure_with_carries_violations() {
        let violations = vec!["name is required".to_string()];
        let response = ApiResponse::failure_with("Validation failed", violations);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["data"], serde_json::json!(["name is required"]));
    }

    #[test]
    fn test_ok_null_keeps_explicit_null() {
        let response = ApiResponse::ok_null("User deleted successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert!(value.as_object().unwrap().contains_key("data"));
        assert!(value["data"].is_null());
    }
}
