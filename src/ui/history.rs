//! # 버전 히스토리 패널
//!
//! "현재 히스토리를 보고 있는 문서 id"는 이 패널 객체가 소유합니다.
//! `open`에서 정해지고 `close`에서 지워지며, 그 밖의 곳에서는 바뀌지 않습니다.

use super::page::VersionRow;
use crate::models::VersionRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPanel {
    subject: Option<String>,
    visible: bool,
    rows: Vec<VersionRow>,
}

impl HistoryPanel {
    /// 히스토리를 보고 있는 문서 id. 패널이 닫혀 있으면 None
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rows(&self) -> &[VersionRow] {
        &self.rows
    }

    /// 테이블 본문 전체를 새 응답으로 바꾸고 패널을 보이게 합니다.
    pub(crate) fn open(&mut self, document_id: &str, records: &[VersionRecord]) {
        self.subject = Some(document_id.to_string());
        self.rows = records.iter().map(VersionRow::from_record).collect();
        self.visible = true;
    }

    /// 행은 남겨두고 숨기기만 합니다. 다음 `open`이 전부 교체합니다.
    pub(crate) fn close(&mut self) {
        self.visible = false;
        self.subject = None;
    }

    pub fn render_table(&self) -> String {
        self.rows.iter().map(VersionRow::to_html).collect()
    }
}
