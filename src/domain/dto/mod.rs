//! 데이터 전송 객체(DTO) 모듈
//!
//! API 계약을 구성하는 요청/응답 구조체들을 정의합니다.
//! 요청 DTO는 검증과 정규화를 거쳐 엔티티로 변환되고,
//! 응답 DTO는 엔티티를 클라이언트 친화적인 형태로 노출합니다.

pub mod api_response;
pub mod users;
