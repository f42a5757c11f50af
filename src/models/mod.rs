//! # 데이터 모델 모듈
//!
//! 백엔드 REST API가 주고받는 데이터 구조체(struct)들을 정의합니다.
//! - `document`: 문서(Document)와 생성/수정 폼(DocumentForm)
//! - `version`: 버전 기록(VersionRecord)과 복원 요청(RestoreRequest)
//! - `timestamp`: updatedAt / createdAt 시각 값
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Document`처럼 짧게 접근합니다.

pub mod document;
pub mod timestamp;
pub mod version;

pub use document::*;
pub use timestamp::*;
pub use version::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 불투명(opaque) 식별자를 문자열로 역직렬화합니다.
///
/// 백엔드에 따라 id가 `"abc-123"` 같은 문자열이거나 `42` 같은 숫자로 올 수 있습니다.
/// 클라이언트는 id를 해석하지 않으므로 둘 다 문자열 형태로 보관합니다.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number identifier, got {other}"
        ))),
    }
}
