//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 리포지토리는 프로세스 시작 시점에
//! 명시적으로 생성되어 서비스 계층에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(database);
//! let users = user_repo.find_all().await?;
//! ```

pub mod users;
