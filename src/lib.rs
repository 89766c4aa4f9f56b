//! 사용자 디렉터리 백엔드
//!
//! Rust 기반의 사용자 자원 CRUD 백엔드 서비스입니다.
//! MongoDB를 저장소로 사용하며, 모든 응답을 `{success, message, data}`
//! 엔벨로프로 통일합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록/단건 조회, 생성, 부분 수정, 삭제
//! - **페이로드 검증**: 모든 필드의 위반 사항을 한 번에 수집하여 반환
//! - **정규화 저장**: 이메일 소문자화, 텍스트 필드 trim
//! - **이메일 유일성**: 사전 조회와 유니크 인덱스의 이중 보장
//! - **명시적 DI**: 전역 상태 없이 `web::Data`로 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 엔벨로프
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory_backend::db::Database;
//! use user_directory_backend::repositories::users::user_repo::UserRepository;
//! use user_directory_backend::services::users::user_service::UserService;
//!
//! let database = Arc::new(Database::new().await?);
//! let user_repo = Arc::new(UserRepository::new(database));
//! let user_service = UserService::new(user_repo);
//!
//! let users = user_service.list_users().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
