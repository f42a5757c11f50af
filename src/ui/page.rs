//! # 호스트 페이지
//!
//! 컨트롤러가 그리는 화면 요소들을 타입으로 표현합니다.
//! 페이지 템플릿(HTML)에 필수 요소 id가 모두 있어야 붙일(attach) 수 있습니다.
//!
//! 각 테이블 행은 렌더링된 셀과 함께, 그 행의 데이터에 묶인 `RowAction`을 가집니다.
//! 버튼을 누르면 마크업을 다시 해석하지 않고 이 값을 그대로 컨트롤러에 넘깁니다.

use super::{form::FormState, history::HistoryPanel};
use crate::{
    error::ClientError,
    models::{Document, VersionRecord},
    services::{render_row, Button, Cell},
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 컨트롤러가 시작할 때 반드시 있어야 하는 요소 id (검사 순서)
pub const REQUIRED_ELEMENTS: [&str; 11] = [
    "documentsTable",
    "docForm",
    "docId",
    "title",
    "content",
    "formTitle",
    "submitBtn",
    "cancelEdit",
    "historySection",
    "historyTable",
    "closeHistory",
];

/// 에러 문구를 표시하는 영역. 없어도 되지만, 없으면 에러는 로그에만 남습니다.
pub const STATUS_ELEMENT: &str = "statusMessage";

/// 내장 호스트 페이지 템플릿
pub const BUNDLED_PAGE: &str = include_str!("../../assets/index.html");

/// `tbody`가 있어야 하는 테이블 요소
pub const TABLES_WITH_BODY: [&str; 2] = ["documentsTable", "historyTable"];

// 여는 태그 안에서 공백 뒤에 오는 `id` 속성만 인정합니다 (`data-id`는 제외).
static ELEMENT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[a-zA-Z][^<>]*?\sid\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("element id pattern is valid")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

/// 행 버튼에 묶인 동작. 렌더링 시점의 엔티티 데이터를 그대로 담습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// 이스케이프되지 않은 원문 제목/본문을 담습니다.
    Edit { id: String, title: String, body: String },
    History { id: String },
    Restore { id: String, version: u32 },
}

impl RowAction {
    pub fn button(&self) -> Button {
        match self {
            RowAction::Edit { .. } => Button {
                class: "btn-edit",
                caption: "Edit",
            },
            RowAction::History { .. } => Button {
                class: "btn-history",
                caption: "History",
            },
            RowAction::Restore { .. } => Button {
                class: "btn-restore",
                caption: "Set As Current",
            },
        }
    }
}

/// 문서 목록 테이블의 한 행
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

impl DocumentRow {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            cells: vec![
                Cell::text("cell-title", &doc.title),
                Cell::text("cell-body", &doc.body),
                Cell::text("cell-version", &format!("v{}", doc.version)),
                Cell::text("cell-date", &doc.updated_at.to_string()),
            ],
            actions: vec![
                RowAction::Edit {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    body: doc.body.clone(),
                },
                RowAction::History { id: doc.id.clone() },
            ],
        }
    }

    /// 캡션으로 버튼 동작을 찾습니다 (`"Edit"`, `"History"`).
    pub fn action(&self, caption: &str) -> Option<&RowAction> {
        self.actions.iter().find(|a| a.button().caption == caption)
    }

    pub fn to_html(&self) -> String {
        render_row(&self.cells, &buttons(&self.actions))
    }
}

/// 버전 히스토리 테이블의 한 행
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRow {
    pub cells: Vec<Cell>,
    pub restore: RowAction,
}

impl VersionRow {
    pub fn from_record(record: &VersionRecord) -> Self {
        Self {
            cells: vec![
                Cell::text("cell-version", &format!("v{}", record.version)),
                Cell::text("cell-title", &record.title),
                Cell::text("cell-date", &record.created_at.to_string()),
            ],
            restore: RowAction::Restore {
                id: record.id.clone(),
                version: record.version,
            },
        }
    }

    pub fn to_html(&self) -> String {
        render_row(&self.cells, &[self.restore.button()])
    }
}

fn buttons(actions: &[RowAction]) -> Vec<Button> {
    actions.iter().map(RowAction::button).collect()
}

/// 컨트롤러가 갱신하는 화면 상태 전체
#[derive(Debug, Clone)]
pub struct HostPage {
    documents: Vec<DocumentRow>,
    pub(crate) form: FormState,
    pub(crate) history: HistoryPanel,
    focused: Option<&'static str>,
    status: Option<String>,
    has_status_area: bool,
}

impl HostPage {
    /// 템플릿의 `id` 속성을 모아 필수 요소가 모두 있는지 확인합니다.
    ///
    /// # 에러
    /// 빠진 요소가 있으면 `REQUIRED_ELEMENTS` 순서상 첫 번째 id로
    /// `ClientError::MissingElement`를 반환합니다.
    /// 두 테이블 중 `<tbody>`가 없는 것이 있으면 `"documentsTable tbody"`처럼
    /// 테이블 id 뒤에 `tbody`를 붙인 이름으로 같은 에러를 반환합니다.
    pub fn attach(html: &str) -> Result<Self, ClientError> {
        // 주석 안의 요소는 페이지에 없는 것이므로 먼저 지웁니다.
        let html = COMMENT.replace_all(html, "");

        // id → 여는 태그가 끝난 위치. 같은 id가 여러 번 나오면 첫 번째만 씁니다.
        let mut ids: HashMap<&str, usize> = HashMap::new();
        for caps in ELEMENT_ID.captures_iter(&html) {
            if let (Some(whole), Some(id)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2))) {
                ids.entry(id.as_str()).or_insert(whole.end());
            }
        }

        if let Some(missing) = REQUIRED_ELEMENTS.iter().find(|id| !ids.contains_key(*id)) {
            return Err(ClientError::MissingElement(missing.to_string()));
        }

        // 테이블 본문이 없으면 행을 넣을 곳이 없습니다.
        for table in TABLES_WITH_BODY {
            let rest = &html[ids[table]..];
            let inner = rest.find("</table").map_or(rest, |end| &rest[..end]);
            if !inner.contains("<tbody") {
                return Err(ClientError::MissingElement(format!("{table} tbody")));
            }
        }

        let has_status_area = ids.contains_key(STATUS_ELEMENT);
        Ok(Self {
            documents: Vec::new(),
            form: FormState::default(),
            history: HistoryPanel::default(),
            focused: None,
            status: None,
            has_status_area,
        })
    }

    pub fn bundled() -> Result<Self, ClientError> {
        Self::attach(BUNDLED_PAGE)
    }

    pub fn documents(&self) -> &[DocumentRow] {
        &self.documents
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn history(&self) -> &HistoryPanel {
        &self.history
    }

    /// 입력 포커스를 가진 요소 id
    pub fn focused(&self) -> Option<&'static str> {
        self.focused
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// 문서 테이블 본문(`<tbody>` 안쪽) 마크업
    pub fn render_documents_table(&self) -> String {
        self.documents.iter().map(DocumentRow::to_html).collect()
    }

    pub fn render_history_table(&self) -> String {
        self.history.render_table()
    }

    /// 테이블 본문 전체를 응답 순서 그대로 교체합니다.
    pub(crate) fn replace_documents(&mut self, documents: &[Document]) {
        self.documents = documents.iter().map(DocumentRow::from_document).collect();
    }

    pub(crate) fn focus(&mut self, element_id: &'static str) {
        self.focused = Some(element_id);
    }

    pub(crate) fn show_status(&mut self, message: String) {
        if self.has_status_area {
            self.status = Some(message);
        }
    }

    pub(crate) fn clear_status(&mut self) {
        self.status = None;
    }
}
