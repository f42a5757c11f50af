//! # 서비스 모듈
//!
//! 네트워크와 무관한 순수 로직을 모아둔 모듈입니다.
//! - `markup`: HTML 이스케이프와 테이블 행 마크업 생성

pub mod markup;

pub use markup::*;
