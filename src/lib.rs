//! # docdesk
//!
//! 문서 목록 / 생성·수정 폼 / 버전 히스토리 화면을 구동하는 클라이언트 라이브러리입니다.
//!
//! 모듈 구성:
//! - `config`: 환경변수 설정
//! - `error`: 에러 타입
//! - `models`: 백엔드가 주고받는 데이터 구조체
//! - `api`: 백엔드 REST API 호출 (`DocumentApi`, `HttpApi`)
//! - `services`: HTML 이스케이프와 행 마크업
//! - `ui`: 호스트 페이지 상태와 `DocumentListClient` 컨트롤러
//! - `cli`: 실행 파일의 서브커맨드

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

pub use api::{DocumentApi, HttpApi};
pub use config::Config;
pub use error::ClientError;
pub use ui::{DocumentListClient, HostPage};
