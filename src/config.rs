//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 클라이언트 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DOCDESK_API_URL`: 백엔드 REST API의 기본 URL (예: `http://localhost:5000`)
//! - `DOCDESK_HOST_PAGE`: 호스트 페이지 HTML 템플릿 경로 (없으면 내장 템플릿 사용)
//! - `DOCDESK_TIMEOUT_SECS`: HTTP 요청 타임아웃(초)

use crate::error::ClientError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 타임아웃 환경변수가 없거나 잘못된 값일 때 사용하는 기본값(초)
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 클라이언트 전체 설정을 담는 구조체
///
/// 실행 시 환경변수에서 한 번 읽어온 후 `HttpApi`와 `HostPage` 생성에 쓰입니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 백엔드 기본 URL. 끝의 `/`는 제거된 상태로 저장됩니다.
    pub api_url: String,
    /// 호스트 페이지 템플릿 경로. None이면 내장 `assets/index.html` 사용
    pub host_page: Option<PathBuf>,
    /// HTTP 요청 타임아웃
    pub timeout: Duration,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DOCDESK_API_URL`은 필수이며, 없거나 비어 있으면 `ClientError::Config`를 반환합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다.
    /// 테스트에서 실제 프로세스 환경변수를 건드리지 않기 위해 분리했습니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("DOCDESK_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::Config("DOCDESK_API_URL is not set".to_string()))?;

        let host_page = lookup("DOCDESK_HOST_PAGE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let timeout_secs = lookup("DOCDESK_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            host_page,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
