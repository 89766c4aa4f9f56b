use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{Address, User};

/// 사용자 응답 DTO
///
/// ObjectId와 BSON 타임스탬프를 클라이언트 친화적인 문자열로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 24자리 16진수 문자열 ID
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Address,
    /// RFC 3339 형식 생성 시각
    pub created_at: String,
    /// RFC 3339 형식 수정 시각
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            phone,
            company,
            address,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            phone,
            company,
            address,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
