//! # 문서 API 호출
//!
//! - `GET  /api/documents`      → 문서 목록
//! - `GET  /api/document/{id}`  → 단일 문서
//! - `POST /api/document`       → 생성 또는 수정 (form-encoded `Id`, `Title`, `Body`)

use super::HttpApi;
use crate::{error::ClientError, models::*};

impl HttpApi {
    /// 문서 목록을 조회합니다. 순서는 백엔드가 반환한 그대로입니다.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        let url = self.endpoint(&["api", "documents"]);
        tracing::debug!(%url, "fetching document list");
        let response = self.client.get(url).send().await?;
        let documents: Vec<Document> = Self::parse_json(response).await?;
        tracing::debug!(count = documents.len(), "document list received");
        Ok(documents)
    }

    pub async fn get_document(&self, id: &str) -> Result<Document, ClientError> {
        let url = self.endpoint(&["api", "document", id]);
        tracing::debug!(%url, "fetching document");
        let response = self.client.get(url).send().await?;
        Self::parse_json(response).await
    }

    /// 폼 필드를 그대로 보냅니다. 생성/수정 구분은 백엔드가 `Id` 값으로 합니다.
    pub async fn save_document(&self, form: &DocumentForm) -> Result<(), ClientError> {
        let url = self.endpoint(&["api", "document"]);
        tracing::debug!(%url, edit = form.is_edit(), "submitting document form");
        let response = self.client.post(url).form(&form.fields()[..]).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
