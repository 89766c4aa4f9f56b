//! 공통 유틸리티 모듈
//!
//! 여러 계층에서 공유하는 순수 함수 유틸리티들을 제공합니다.

pub mod string_utils;
