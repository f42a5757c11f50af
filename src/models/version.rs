use super::{opaque_id, Timestamp};
use serde::Deserialize;

/// `GET /api/document/{id}/history`의 한 항목. 서버에서 만들어진 뒤 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub version: u32,
    pub title: String,
    pub created_at: Timestamp,
}

/// `POST /api/document/restore` 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreRequest {
    pub id: String,
    pub version: u32,
}

impl RestoreRequest {
    pub fn fields(&self) -> [(&'static str, String); 2] {
        [("Id", self.id.clone()), ("Version", self.version.to_string())]
    }
}
