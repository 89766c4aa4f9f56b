//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션에 대한 CRUD 연산을 제공합니다.
//!
//! ## 특징
//!
//! - **명시적 의존성 주입**: 생성자에서 데이터베이스 핸들을 전달받음
//! - **식별자 선검증**: 저장소 접근 전에 ObjectId 형식을 확인
//! - **데이터 무결성**: 이메일 유니크 제약 조건 및 인덱스 관리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};

/// 컬렉션명
const COLLECTION_NAME: &str = "users";

/// 문자열 식별자를 ObjectId로 파싱합니다.
///
/// 모든 식별자 기반 연산은 저장소에 접근하기 전에 이 검사를 통과해야 합니다.
///
/// # Returns
///
/// * `Ok(ObjectId)` - 24자리 16진수 형식의 유효한 식별자
/// * `Err(AppError::ValidationError)` - 형식이 잘못된 식별자 (400 응답)
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::ValidationError("Invalid ID format".to_string()))
}

/// MongoDB 드라이버 쓰기 에러를 애플리케이션 에러로 변환합니다.
///
/// 유니크 인덱스 위반(코드 11000)은 충돌 에러로, 그 외는 데이터베이스
/// 에러로 분류됩니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    use mongodb::error::{ErrorKind, WriteFailure};

    let duplicate = match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    };

    if duplicate {
        AppError::ConflictError("Email is already in use".to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
/// 프로세스 시작 시 한 번 생성되어 서비스 계층에 주입됩니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 데이터베이스 핸들을 주입받아 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `users` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION_NAME)
    }

    /// 전체 사용자 조회
    ///
    /// 저장 순서(natural order) 그대로 모든 사용자를 반환합니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 소문자로 저장되므로 호출 측에서 정규화된 값을 전달해야 합니다.
    /// 이메일 유니크 검사에 사용됩니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복 여부를 사전에 검증한 뒤 저장합니다.
    /// 동시 삽입 경합은 유니크 인덱스가 최종적으로 차단하며,
    /// 해당 드라이버 에러도 충돌 에러로 변환됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("Email is already in use".to_string()));
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// `$set` 연산자로 전달된 필드만 변경하고 `updated_at`을 갱신합니다.
    /// `find_one_and_update`의 원자적 연산으로 조회와 업데이트를 동시에
    /// 수행하며, 업데이트 이후의 최신 도큐먼트를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 사용자의 ID (ObjectId 문자열)
    /// * `patch` - 변경할 필드들 (중첩 필드는 `address.city` 점 표기 경로)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::ConflictError)` - 이메일 유니크 인덱스 위반
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn update(&self, id: &str, patch: Document) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut update_doc = patch;
        update_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(map_write_error)
    }

    /// 사용자 삭제
    ///
    /// 물리적 삭제이며 복구할 수 없습니다. 삭제된 도큐먼트를 반환하므로
    /// 존재하지 않는 사용자와의 구분이 가능합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 삭제된 사용자
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn delete(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 유니크 인덱스를 생성합니다. 애플리케이션 초기화 시점에
    /// 한 번 실행되어 이메일 유일성 불변 조건을 저장소 수준에서 보장합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_valid_hex() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn test_parse_object_id_rejects_malformed_input() {
        for bad_id in ["", "123", "not-a-valid-object-id", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            match parse_object_id(bad_id) {
                Err(AppError::ValidationError(message)) => {
                    assert_eq!(message, "Invalid ID format");
                }
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }
    }
}
