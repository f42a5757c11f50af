use super::{opaque_id, Timestamp};
use serde::Deserialize;

/// `GET /api/documents` 목록의 한 항목
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub version: u32,
    pub updated_at: Timestamp,
}

/// 생성/수정 폼의 필드 값
///
/// `id`가 비어 있으면 생성, 채워져 있으면 수정입니다.
/// 구분은 백엔드가 하며, 클라이언트는 필드를 모두 그대로 보냅니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentForm {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl DocumentForm {
    /// form-encoded 본문으로 보낼 (필드명, 값) 목록
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Id", self.id.as_str()),
            ("Title", self.title.as_str()),
            ("Body", self.body.as_str()),
        ]
    }

    pub fn is_edit(&self) -> bool {
        !self.id.is_empty()
    }
}
