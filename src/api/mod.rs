//! # 백엔드 API 접근 계층
//!
//! 문서 저장소 역할을 하는 백엔드 REST API와 직접 통신하는 모듈입니다.
//! 컨트롤러(`ui`)는 `DocumentApi` 트레이트만 알고, 실제 HTTP 구현은 `HttpApi`가 담당합니다.
//!
//! 각 하위 모듈:
//! - `documents`: 문서 목록 / 단건 조회 / 생성·수정
//! - `versions`: 버전 히스토리 조회 / 버전 복원

pub mod documents;
pub mod versions;

use crate::{config::Config, error::ClientError, models::*};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

/// 컨트롤러가 사용하는 백엔드 연산 집합
///
/// 테스트에서는 호출을 기록하는 가짜 구현으로 바꿔 끼웁니다.
#[allow(async_fn_in_trait)]
pub trait DocumentApi {
    async fn list_documents(&self) -> Result<Vec<Document>, ClientError>;
    async fn get_document(&self, id: &str) -> Result<Document, ClientError>;
    /// 생성과 수정을 같은 엔드포인트로 보냅니다. 응답 본문은 무시합니다.
    async fn save_document(&self, form: &DocumentForm) -> Result<(), ClientError>;
    async fn history(&self, id: &str) -> Result<Vec<VersionRecord>, ClientError>;
    async fn restore_version(&self, request: &RestoreRequest) -> Result<(), ClientError>;
}

/// `reqwest` 기반 백엔드 클라이언트
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    /// 설정으로부터 클라이언트를 만듭니다.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        // timeout: 요청 전체(연결 + 응답 본문)에 걸리는 시간 제한
        // build() 실패(reqwest::Error)는 `?`로 ClientError::Request가 됩니다.
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Self::with_client(client, &config.api_url)
    }

    /// 이미 만들어 둔 `reqwest::Client`를 재사용합니다.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        // 기본 URL은 한 번만 파싱해 두고, 요청마다 clone해서 경로를 붙입니다.
        let base = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid API url {base_url:?}: {e}")))?;
        // `mailto:` 같은 URL은 경로 세그먼트를 붙일 수 없습니다.
        if base.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "API url {base_url:?} cannot carry a path"
            )));
        }
        Ok(Self { client, base })
    }

    /// 기본 URL 뒤에 경로 세그먼트를 붙입니다.
    /// 각 세그먼트는 퍼센트 인코딩되므로 id에 `/`가 있어도 경로가 깨지지 않습니다.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base는 생성 시 걸러냈으므로 여기서는 항상 Ok
        if let Ok(mut path) = url.path_segments_mut() {
            // pop_if_empty(): 기본 URL 끝의 `/` 때문에 생긴 빈 세그먼트를 제거
            // extend(): 세그먼트마다 퍼센트 인코딩해서 붙입니다.
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// 2xx가 아니면 상태 코드와 본문을 담은 에러로 바꿉니다.
    pub(crate) async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            // 본문은 디버깅용으로만 담습니다. 읽지 못해도 상태 코드 에러는 그대로 반환합니다.
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// 본문을 문자열로 받은 뒤 JSON으로 해석합니다.
    /// 전송 에러와 JSON 형식 에러를 구분하기 위해 `Response::json` 대신 이렇게 합니다.
    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        // 본문 수신 실패 → ClientError::Request
        let text = response.text().await?;
        // JSON 해석 실패 → ClientError::Decode (#[from] serde_json::Error)
        Ok(serde_json::from_str(&text)?)
    }
}

impl DocumentApi for HttpApi {
    async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        HttpApi::list_documents(self).await
    }

    async fn get_document(&self, id: &str) -> Result<Document, ClientError> {
        HttpApi::get_document(self, id).await
    }

    async fn save_document(&self, form: &DocumentForm) -> Result<(), ClientError> {
        HttpApi::save_document(self, form).await
    }

    async fn history(&self, id: &str) -> Result<Vec<VersionRecord>, ClientError> {
        HttpApi::history(self, id).await
    }

    async fn restore_version(&self, request: &RestoreRequest) -> Result<(), ClientError> {
        HttpApi::restore_version(self, request).await
    }
}
