//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let users = user_service.list_users().await?;
//! ```

pub mod user_service;
