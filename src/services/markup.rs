//! # 마크업 생성 서비스
//!
//! 테이블 행을 HTML로 만들 때 쓰는 유틸리티 함수들을 제공합니다.
//!
//! 이 모듈의 함수들:
//! - `escape_html()`: 텍스트를 마크업에 안전하게 넣을 수 있는 형태로 변환
//! - `render_row()`: 셀과 버튼 목록으로 `<tr>` 한 줄을 생성
//!
//! 버튼에는 CSS 클래스와 캡션만 들어갑니다. 클릭 시 동작은 행 값에 묶인
//! `RowAction`이 담당하므로, 마크업 문자열 안에 핸들러 코드를 넣지 않습니다.

/// 텍스트를 HTML 본문에 넣어도 태그로 해석되지 않도록 변환합니다.
///
/// 브라우저에서 `textContent`에 넣고 `innerHTML`로 다시 읽은 결과와 같습니다:
/// `&`, `<`, `>`와 줄바꿈 없는 공백(U+00A0)만 바뀌고, 따옴표는 그대로 둡니다.
/// 화면에 보이는 글자는 원문과 동일합니다.
///
/// # 예시
/// ```
/// use docdesk::services::escape_html;
/// assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 테이블 셀 하나. `html`은 이미 이스케이프된 내용입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub class: &'static str,
    pub html: String,
}

impl Cell {
    /// 일반 텍스트로부터 셀을 만듭니다. 내용은 여기서 이스케이프됩니다.
    pub fn text(class: &'static str, text: &str) -> Self {
        Self {
            class,
            html: escape_html(text),
        }
    }
}

/// 행 끝의 버튼 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub class: &'static str,
    pub caption: &'static str,
}

/// 셀들과 버튼들로 `<tr>` 마크업 한 줄을 만듭니다.
///
/// 버튼이 없으면 `cell-actions` 셀도 만들지 않습니다.
pub fn render_row(cells: &[Cell], buttons: &[Button]) -> String {
    let mut row = String::from("<tr>");
    for cell in cells {
        row.push_str(&format!("<td class=\"{}\">{}</td>", cell.class, cell.html));
    }
    if !buttons.is_empty() {
        row.push_str("<td class=\"cell-actions\">");
        for button in buttons {
            row.push_str(&format!(
                "<button type=\"button\" class=\"btn-small {}\">{}</button>",
                button.class, button.caption
            ));
        }
        row.push_str("</td>");
    }
    row.push_str("</tr>");
    row
}
