//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 프로세스 시작 시점에 명시적으로 생성되어
//! `actix_web::web::Data`를 통해 핸들러에 주입됩니다.

pub mod users;
