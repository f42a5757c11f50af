//! # 타임스탬프
//!
//! 백엔드는 시각을 오프셋이 있는 RFC 3339(`2024-05-01T10:00:00Z`)로 보내기도 하고,
//! 오프셋 없는 ISO 형식(`2024-05-01T10:00:00.1234567`)으로 보내기도 합니다.
//! 오프셋이 없으면 UTC로 간주합니다. 둘 다 아니면 받은 문자열을 그대로 표시합니다.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// 화면 표시 형식
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Parsed(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Timestamp::Parsed(naive.and_utc());
        }
        Timestamp::Raw(raw.to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Parsed(dt) => write!(f, "{}", dt.format(DISPLAY_FORMAT)),
            Timestamp::Raw(raw) => f.write_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Timestamp::parse(&raw))
    }
}
