//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 모든 필드를 `Option`으로 역직렬화한 뒤 명시적 검증 단계에서
//! 누락/위반 사항을 전부 수집하므로, 클라이언트는 한 번의 요청으로
//! 전체 위반 목록을 전달받습니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::field_rules::{
    check_email, check_name, check_number, check_phone, check_required_text, check_zipcode,
};
use crate::domain::entities::users::user::{Address, GeoPoint};
use crate::errors::errors::AppError;

/// 좌표 페이로드 (lat/lng 모두 필수)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPayload {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// 주소 페이로드 (모든 하위 필드 필수)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressPayload {
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<GeoPayload>,
}

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// JSON 역직렬화 시 인식되지 않는 키는 버려지며,
/// 필드 누락은 검증 단계에서 위반 메시지로 보고됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// 사용자 이름 (trim 적용, 최소 2자)
    pub name: Option<String>,

    /// 이메일 주소 (이메일 문법, 소문자로 정규화)
    pub email: Option<String>,

    /// 전화번호 (최소 10자)
    pub phone: Option<String>,

    /// 소속 회사명 (trim 적용)
    pub company: Option<String>,

    /// 주소 (city/zipcode/geo 모두 필수)
    pub address: Option<AddressPayload>,
}

/// 생성 검증을 통과한 정규화된 필드 집합
///
/// 이 타입의 값은 항상 영속 계층에 바로 넘길 수 있는 상태입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Address,
}

impl CreateUserRequest {
    /// 생성 규칙 검증 및 정규화
    ///
    /// 모든 필드를 끝까지 검사하여 위반 사항을 수집합니다.
    /// 첫 위반에서 중단하지 않으므로 응답에는 전체 위반 목록이 담깁니다.
    ///
    /// # Returns
    ///
    /// * `Ok(NewUserFields)` - trim/소문자 정규화가 적용된 필드 집합
    /// * `Err(AppError::ValidationFailed)` - 필드 순서대로 정렬된 위반 메시지 목록
    pub fn validate(self) -> Result<NewUserFields, AppError> {
        let mut violations = Vec::new();

        let name = check_name(self.name, &mut violations);
        let email = check_email(self.email, &mut violations);
        let phone = check_phone(self.phone, &mut violations);
        let company = check_required_text("company", self.company, &mut violations);

        let address = match self.address {
            Some(payload) => validate_address(payload, &mut violations),
            None => {
                violations.push("address is required".to_string());
                None
            }
        };

        match (name, email, phone, company, address) {
            (Some(name), Some(email), Some(phone), Some(company), Some(address))
                if violations.is_empty() =>
            {
                Ok(NewUserFields {
                    name,
                    email,
                    phone,
                    company,
                    address,
                })
            }
            _ => Err(AppError::ValidationFailed(violations)),
        }
    }
}

/// 주소 페이로드 검증 (모든 하위 필드 필수)
fn validate_address(payload: AddressPayload, violations: &mut Vec<String>) -> Option<Address> {
    let city = check_required_text("address.city", payload.city, violations);
    let zipcode = check_zipcode(payload.zipcode, violations);

    let geo = match payload.geo {
        Some(geo) => validate_geo(geo, violations),
        None => {
            violations.push("address.geo is required".to_string());
            None
        }
    };

    match (city, zipcode, geo) {
        (Some(city), Some(zipcode), Some(geo)) => Some(Address { city, zipcode, geo }),
        _ => None,
    }
}

/// 좌표 페이로드 검증 (lat/lng 모두 필수)
fn validate_geo(payload: GeoPayload, violations: &mut Vec<String>) -> Option<GeoPoint> {
    let lat = check_number("address.geo.lat", payload.lat, violations);
    let lng = check_number("address.geo.lng", payload.lng, violations);

    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    }
}
