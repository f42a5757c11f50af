use super::HttpApi;
use crate::{error::ClientError, models::*};

impl HttpApi {
    pub async fn history(&self, id: &str) -> Result<Vec<VersionRecord>, ClientError> {
        let url = self.endpoint(&["api", "document", id, "history"]);
        tracing::debug!(%url, "fetching version history");
        let response = self.client.get(url).send().await?;
        Self::parse_json(response).await
    }

    /// `POST /api/document/restore` — 정확히 `Id`, `Version` 두 필드만 보냅니다.
    pub async fn restore_version(&self, request: &RestoreRequest) -> Result<(), ClientError> {
        let url = self.endpoint(&["api", "document", "restore"]);
        tracing::debug!(%url, id = %request.id, version = request.version, "restoring version");
        let response = self
            .client
            .post(url)
            .form(&request.fields()[..])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
