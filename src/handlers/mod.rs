//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services                                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories                                 ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   MongoDB                                      ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 비동기이며, 요청 단위로 자기 완결적입니다.
//! 프로세스 내 공유 가변 상태는 없고, 의존성은 `web::Data`로 주입됩니다.

pub mod users;
