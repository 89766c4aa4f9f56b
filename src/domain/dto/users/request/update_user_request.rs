//! 사용자 수정 요청 DTO
//!
//! 부분 수정(partial update)을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 생성 요청과 동일한 필드 집합을 다루되 모든 필드(중첩 필드 포함)가
//! 선택 사항이며, 인식되는 필드가 하나도 없는 페이로드는 거부됩니다.
//! 존재하는 필드는 생성 규칙과 동일한 제약을 다시 적용받습니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::create_user_request::AddressPayload;
use crate::domain::dto::users::request::field_rules::{
    check_email, check_name, check_phone, check_required_text, check_zipcode,
};
use crate::errors::errors::AppError;

/// 부분 수정 요청 DTO
///
/// 인식되지 않는 최상위 키는 버려지고(거부 아님), 존재하는 필드만 검증됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<AddressPayload>,
}

/// 수정 검증을 통과한 정규화된 부분 필드 집합
///
/// 주소 하위 필드는 평탄화되어 저장 계층에서 점 표기(`address.city`)
/// 경로로 변환됩니다. 수정되지 않는 주소 필드를 보존하기 위함입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl UpdateUserRequest {
    /// 인식되는 최상위 필드가 하나라도 존재하는지 확인
    fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.company.is_some()
            || self.address.is_some()
    }

    /// 수정 규칙 검증 및 정규화
    ///
    /// 존재하는 필드에만 생성 규칙과 동일한 필드 제약을 적용하고,
    /// 위반 사항을 전부 수집하여 반환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(UserPatch)` - 정규화된 부분 필드 집합
    /// * `Err(AppError::ValidationFailed)` - 빈 페이로드 또는 필드 위반 목록
    pub fn validate(self) -> Result<UserPatch, AppError> {
        if !self.has_updates() {
            return Err(AppError::ValidationFailed(vec![
                "at least one updatable field must be provided".to_string(),
            ]));
        }

        let mut violations = Vec::new();
        let mut patch = UserPatch::default();

        if self.name.is_some() {
            patch.name = check_name(self.name, &mut violations);
        }
        if self.email.is_some() {
            patch.email = check_email(self.email, &mut violations);
        }
        if self.phone.is_some() {
            patch.phone = check_phone(self.phone, &mut violations);
        }
        if self.company.is_some() {
            patch.company = check_required_text("company", self.company, &mut violations);
        }

        if let Some(address) = self.address {
            if address.city.is_some() {
                patch.city = check_required_text("address.city", address.city, &mut violations);
            }
            if address.zipcode.is_some() {
                patch.zipcode = check_zipcode(address.zipcode, &mut violations);
            }
            if let Some(geo) = address.geo {
                patch.lat = geo.lat;
                patch.lng = geo.lng;
            }
        }

        if violations.is_empty() {
            Ok(patch)
        } else {
            Err(AppError::ValidationFailed(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_violations(error: AppError, expected: Vec<&str>) {
        match error {
            AppError::ValidationFailed(violations) => {
                assert_eq!(violations, expected.into_iter().map(String::from).collect::<Vec<_>>());
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        let error = request.validate().unwrap_err();

        assert_violations(error, vec!["at least one updatable field must be provided"]);
    }

    #[test]
    fn test_unknown_keys_only_payload_is_rejected() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"role": "admin", "nickname": "jo"}"#).unwrap();
        let error = request.validate().unwrap_err();

        assert_violations(error, vec!["at least one updatable field must be provided"]);
    }

    #[test]
    fn test_single_field_patch() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"company": " Acme "}"#).unwrap();
        let patch = request.validate().unwrap();

        assert_eq!(patch.company, Some("Acme".to_string()));
        assert_eq!(
            patch,
            UserPatch {
                company: Some("Acme".to_string()),
                ..UserPatch::default()
            }
        );
    }

    #[test]
    fn test_partial_address_patch_keeps_other_fields_untouched() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"address": {"city": " Busan "}}"#).unwrap();
        let patch = request.validate().unwrap();

        assert_eq!(patch.city, Some("Busan".to_string()));
        assert!(patch.zipcode.is_none());
        assert!(patch.lat.is_none());
        assert!(patch.lng.is_none());
    }

    #[test]
    fn test_present_fields_are_revalidated() {
        let request: UpdateUserRequest = serde_json::from_str(
            r#"{"name": " ", "email": "nope", "phone": "123"}"#,
        )
        .unwrap();
        let error = request.validate().unwrap_err();

        assert_violations(
            error,
            vec![
                "name is required",
                "email must be a valid email address",
                "phone must be at least 10 characters long",
            ],
        );
    }

    #[test]
    fn test_email_patch_is_normalized() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"email": " NEW@X.COM "}"#).unwrap();
        let patch = request.validate().unwrap();

        assert_eq!(patch.email, Some("new@x.com".to_string()));
    }

    #[test]
    fn test_geo_patch_flattens_coordinates() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"address": {"geo": {"lat": 3.5}}}"#).unwrap();
        let patch = request.validate().unwrap();

        assert_eq!(patch.lat, Some(3.5));
        assert!(patch.lng.is_none());
    }
}
