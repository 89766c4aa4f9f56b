//! # 사용자 관리 서비스 구현
//!
//! 사용자 자원의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 핸들러에서 검증을 통과한 정규화 필드만 전달받아 엔티티로 변환하고,
//! 리포지토리 결과를 응답 DTO로 변환합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! Handlers (검증된 입력)
//!    │
//!    ▼
//! UserService
//!    ├── 엔티티 생성 및 DTO 변환
//!    └── "없음" 시그널을 NotFound 에러로 변환
//!    │
//!    ▼
//! UserRepository (MongoDB CRUD)
//! ```

use std::sync::Arc;
use log::info;
use mongodb::bson::Document;
use crate::{
    domain::{
        dto::users::{
            request::{NewUserFields, UserPatch},
            response::UserResponse,
        },
        entities::users::user::User,
    },
    errors::errors::AppError,
    repositories::users::user_repo::UserRepository,
};

/// 정규화된 부분 필드 집합을 `$set` 도큐먼트로 변환합니다.
///
/// 주소 하위 필드는 점 표기 경로(`address.city`)를 사용하므로
/// 수정되지 않는 주소 필드는 저장된 값이 그대로 유지됩니다.
pub fn build_update_document(patch: &UserPatch) -> Document {
    let mut update_doc = Document::new();

    if let Some(ref name) = patch.name {
        update_doc.insert("name", name.as_str());
    }
    if let Some(ref email) = patch.email {
        update_doc.insert("email", email.as_str());
    }
    if let Some(ref phone) = patch.phone {
        update_doc.insert("phone", phone.as_str());
    }
    if let Some(ref company) = patch.company {
        update_doc.insert("company", company.as_str());
    }
    if let Some(ref city) = patch.city {
        update_doc.insert("address.city", city.as_str());
    }
    if let Some(ref zipcode) = patch.zipcode {
        update_doc.insert("address.zipcode", zipcode.as_str());
    }
    if let Some(lat) = patch.lat {
        update_doc.insert("address.geo.lat", lat);
    }
    if let Some(lng) = patch.lng {
        update_doc.insert("address.geo.lng", lng);
    }

    update_doc
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 프로세스 시작 시점에 리포지토리를 주입받아 생성되며,
/// `actix_web::web::Data`로 핸들러에 공유됩니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 리포지토리를 주입받아 서비스를 생성합니다.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 전체 사용자 목록 조회
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # Returns
    ///
    /// * `Ok(UserResponse)` - 조회된 사용자
    /// * `Err(AppError::ValidationError)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 검증을 통과한 정규화 필드로 엔티티를 구성해 저장합니다.
    /// 타임스탬프는 엔티티 생성자가, ID는 저장 시 MongoDB가 할당합니다.
    pub async fn create_user(&self, fields: NewUserFields) -> Result<UserResponse, AppError> {
        let NewUserFields {
            name,
            email,
            phone,
            company,
            address,
        } = fields;

        let user = User::new(name, email, phone, company, address);
        let created = self.user_repo.create(user).await?;

        info!("사용자 생성 완료: {}", created.id_string().unwrap_or_default());

        Ok(UserResponse::from(created))
    }

    /// 사용자 부분 수정
    ///
    /// 변경 필드만 `$set`으로 반영하고 수정 후 도큐먼트를 반환합니다.
    /// 이메일 유일성은 원자적 업데이트 중 유니크 인덱스가 강제하므로,
    /// 충돌은 해당 ID의 사용자가 실제로 존재할 때만 발생합니다.
    /// 존재하지 않는 ID는 이메일 값과 무관하게 NotFound입니다.
    ///
    /// # Returns
    ///
    /// * `Ok(UserResponse)` - 수정된 사용자
    /// * `Err(AppError::ValidationError)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::ConflictError)` - 이메일이 다른 사용자와 충돌
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<UserResponse, AppError> {
        let update_doc = build_update_document(&patch);

        let updated = self
            .user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 삭제 완료
    /// * `Err(AppError::ValidationError)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.user_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        info!("사용자 삭제 완료: {}", id);

        Ok(())
    }
}
