//! # 생성/수정 폼 상태
//!
//! 폼이 생성 모드인지 수정 모드인지는 따로 저장하지 않고,
//! 숨김 필드(`docId`)에 값이 있는지로 판단합니다.

use crate::models::DocumentForm;

pub const CREATE_HEADING: &str = "Create Document";
pub const CREATE_SUBMIT: &str = "Create";
pub const EDIT_HEADING: &str = "Edit Document";
pub const EDIT_SUBMIT: &str = "Update";

/// 사용자가 입력할 수 있는 폼 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
}

impl Field {
    /// 호스트 페이지의 요소 id
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Body => "content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: DocumentForm,
    heading: &'static str,
    submit_label: &'static str,
    cancel_visible: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: DocumentForm::default(),
            heading: CREATE_HEADING,
            submit_label: CREATE_SUBMIT,
            cancel_visible: false,
        }
    }
}

impl FormState {
    pub fn values(&self) -> &DocumentForm {
        &self.values
    }

    pub fn heading(&self) -> &'static str {
        self.heading
    }

    pub fn submit_label(&self) -> &'static str {
        self.submit_label
    }

    pub fn cancel_visible(&self) -> bool {
        self.cancel_visible
    }

    pub fn is_edit(&self) -> bool {
        self.values.is_edit()
    }

    pub(crate) fn enter_edit(&mut self, id: &str, title: &str, body: &str) {
        self.values = DocumentForm {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        };
        self.heading = EDIT_HEADING;
        self.submit_label = EDIT_SUBMIT;
        self.cancel_visible = true;
    }

    /// 모든 필드를 비우고 생성 모드 문구로 되돌립니다.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Title => self.values.title = value.to_string(),
            Field::Body => self.values.body = value.to_string(),
        }
    }
}
