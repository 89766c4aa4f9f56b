//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 주소와 좌표를 내장 문서로 포함하는 MongoDB 도큐먼트 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 위경도 좌표 값 객체
///
/// 주소에 내장되는 지리 좌표입니다. 별도의 `_id` 없이 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 위도
    pub lat: f64,
    /// 경도
    pub lng: f64,
}

/// 주소 값 객체
///
/// 사용자 도큐먼트에 내장되는 주소 정보입니다.
/// 저장된 사용자는 항상 완전한 주소와 좌표를 갖습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// 도시명
    pub city: String,
    /// 우편번호
    pub zipcode: String,
    /// 지리 좌표
    pub geo: GeoPoint,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `users` 컬렉션에 저장되며, 이메일은 컬렉션 전체에서 유일합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (trim 적용)
    pub name: String,
    /// 사용자 이메일 (unique, 소문자 저장)
    pub email: String,
    /// 전화번호 (최소 10자)
    pub phone: String,
    /// 소속 회사명 (trim 적용)
    pub company: String,
    /// 주소 (내장 도큐먼트)
    pub address: Address,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티 생성
    ///
    /// 검증과 정규화를 통과한 필드 값들로 사용자를 생성합니다.
    /// ID는 저장 시점에 MongoDB가 할당하며, 타임스탬프는 생성 시각으로 초기화됩니다.
    pub fn new(name: String, email: String, phone: String, company: String, address: Address) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            phone,
            company,
            address,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address {
            city: "Seoul".to_string(),
            zipcode: "04524".to_string(),
            geo: GeoPoint { lat: 37.5665, lng: 126.978 },
        }
    }

    #[test]
    fn test_new_user_has_no_id_and_equal_timestamps() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "0212345678".to_string(),
            "Acme".to_string(),
            sample_address(),
        );

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string_roundtrip() {
        let mut user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "0212345678".to_string(),
            "Acme".to_string(),
            sample_address(),
        );

        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_serialize_omits_missing_id() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "0212345678".to_string(),
            "Acme".to_string(),
            sample_address(),
        );

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("email").unwrap(), "alice@example.com");
        assert!(doc.get_document("address").unwrap().contains_key("geo"));
    }
}
