//! # 문서 목록 컨트롤러
//!
//! 문서 목록 테이블, 생성/수정 폼, 버전 히스토리 패널을 구동합니다.
//!
//! ## 동작
//! - `load_documents()`       → 목록을 다시 받아 테이블 본문 전체 교체
//! - `edit_document()`        → 폼을 수정 모드로 채움 (네트워크 없음)
//! - `cancel_edit()`          → 폼을 비우고 생성 모드로 (네트워크 없음)
//! - `show_history()`         → 히스토리를 받아 패널 표시
//! - `close_history()`        → 패널 숨김 (네트워크 없음)
//! - `restore_version()`      → 복원 요청 후 목록과 히스토리 모두 다시 로딩
//! - `submit_form()`          → 폼 전송 후 생성 모드로 되돌리고 목록 다시 로딩
//!
//! 화면은 항상 마지막으로 성공한 응답을 그대로 비춥니다. 캐시나 낙관적 갱신은 없습니다.
//! 네트워크 작업이 실패하면 이전 화면을 그대로 두고 상태 메시지 영역에 에러 문구를 띄웁니다.
//! 이전 문구는 다음 네트워크 작업이 시작될 때 지워집니다.

pub mod form;
pub mod history;
pub mod page;

pub use form::{Field, FormState};
pub use history::HistoryPanel;
pub use page::{DocumentRow, HostPage, RowAction, VersionRow};

use crate::{
    api::DocumentApi,
    error::ClientError,
    models::RestoreRequest,
};

pub struct DocumentListClient<A> {
    api: A,
    page: HostPage,
}

impl<A: DocumentApi> DocumentListClient<A> {
    pub fn new(api: A, page: HostPage) -> Self {
        Self { api, page }
    }

    pub fn page(&self) -> &HostPage {
        &self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 문서 목록을 받아 테이블을 다시 그립니다. 순서는 백엔드 응답 그대로입니다.
    pub async fn load_documents(&mut self) -> Result<(), ClientError> {
        // 이전 에러 문구는 새 요청을 시작할 때 지웁니다.
        self.page.clear_status();
        self.reload_documents().await
    }

    /// 폼을 주어진 값으로 채우고 수정 모드로 바꿉니다. 포커스는 제목 필드로 갑니다.
    pub fn edit_document(&mut self, id: &str, title: &str, body: &str) {
        // 폼 값과 문구(제목, 버튼)를 수정 모드로 바꿉니다.
        self.page.form.enter_edit(id, title, body);
        // 바로 제목을 고칠 수 있도록 포커스를 옮깁니다.
        self.page.focus(Field::Title.element_id());
    }

    pub fn cancel_edit(&mut self) {
        self.page.form.reset();
    }

    /// 폼 필드에 값을 입력합니다.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.page.form.set(field, value);
    }

    /// 문서의 버전 히스토리를 받아 패널에 표시합니다.
    ///
    /// 요청이 실패하면 패널과 히스토리 대상은 이전 상태 그대로 남습니다.
    pub async fn show_history(&mut self, id: &str) -> Result<(), ClientError> {
        self.page.clear_status();
        self.reload_history(id).await
    }

    pub fn close_history(&mut self) {
        self.page.history.close();
    }

    /// 복원 요청을 보낸 뒤 목록과 히스토리를 둘 다 다시 받습니다.
    ///
    /// `id`는 버전 행의 식별자로 그대로 `Id` 필드에 실립니다.
    /// 히스토리는 패널이 열려 있으면 패널이 보고 있는 문서로, 닫혀 있으면 `id`로 다시 받습니다.
    ///
    /// 복원 요청이 실패하면 다시 로딩하지 않습니다.
    /// 다시 로딩은 둘 다 시도하고, 실패가 있으면 첫 번째 에러를 반환합니다.
    pub async fn restore_version(&mut self, id: &str, version: u32) -> Result<(), ClientError> {
        self.page.clear_status();
        let request = RestoreRequest {
            id: id.to_string(),
            version,
        };
        if let Err(err) = self.api.restore_version(&request).await {
            return Err(self.report("Restoring version", err));
        }
        tracing::info!(id = %id, version, "version restored");

        // 목록 → 히스토리 순서로 다시 그립니다.
        let target = self
            .page
            .history
            .subject()
            .unwrap_or(id)
            .to_string();
        let list = self.reload_documents().await;
        let history = self.reload_history(&target).await;
        // 목록 쪽 에러가 먼저 보고되도록 `and`로 합칩니다.
        list.and(history)
    }

    /// 폼 필드를 한 번에 전송합니다. 생성/수정 구분은 백엔드가 합니다.
    ///
    /// 전송이 성공했을 때만 폼을 생성 모드로 되돌리고 목록을 다시 받습니다.
    /// 실패하면 입력한 내용이 폼에 그대로 남습니다.
    pub async fn submit_form(&mut self) -> Result<(), ClientError> {
        self.page.clear_status();
        // .clone(): 요청을 보내는 동안 self를 빌려 쓸 수 있도록 폼 값을 복제합니다.
        let form = self.page.form.values().clone();
        // 생성/수정 모두 같은 엔드포인트로 보냅니다 (`Id`가 비어 있으면 생성).
        if let Err(err) = self.api.save_document(&form).await {
            return Err(self.report("Saving document", err));
        }
        tracing::info!(edit = form.is_edit(), "document saved");

        // 성공했을 때만 폼을 비우고 목록을 다시 받습니다.
        self.cancel_edit();
        self.reload_documents().await
    }

    /// 행 버튼에 묶인 동작을 실행합니다.
    pub async fn click(&mut self, action: &RowAction) -> Result<(), ClientError> {
        match action {
            RowAction::Edit { id, title, body } => {
                self.edit_document(id, title, body);
                Ok(())
            }
            RowAction::History { id } => self.show_history(id).await,
            RowAction::Restore { id, version } => self.restore_version(id, *version).await,
        }
    }

    async fn reload_documents(&mut self) -> Result<(), ClientError> {
        match self.api.list_documents().await {
            Ok(documents) => {
                tracing::info!(count = documents.len(), "document list rendered");
                // 응답 순서 그대로 테이블 본문 전체를 교체합니다 (정렬/병합 없음).
                self.page.replace_documents(&documents);
                Ok(())
            }
            Err(err) => Err(self.report("Loading documents", err)),
        }
    }

    async fn reload_history(&mut self, id: &str) -> Result<(), ClientError> {
        match self.api.history(id).await {
            Ok(records) => {
                tracing::info!(document = %id, count = records.len(), "history rendered");
                // 히스토리 대상 id는 응답이 성공했을 때만 바뀝니다.
                self.page.history.open(id, &records);
                Ok(())
            }
            Err(err) => Err(self.report("Loading history", err)),
        }
    }

    /// 실패를 로그에 남기고 상태 메시지 영역에 표시합니다.
    fn report(&mut self, action: &str, err: ClientError) -> ClientError {
        tracing::warn!(error = %err, "{action} failed");
        // 화면에는 짧은 문구만, 자세한 내용은 위의 로그에 남깁니다.
        self.page.show_status(err.user_message(action));
        // 호출한 쪽이 `?`로 전파할 수 있도록 에러를 그대로 돌려줍니다.
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, DocumentForm, Timestamp, VersionRecord};
    use crate::ui::form::{CREATE_HEADING, CREATE_SUBMIT, EDIT_HEADING, EDIT_SUBMIT};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// 호출을 기록하고 미리 정해둔 응답을 돌려주는 가짜 백엔드
    #[derive(Default)]
    struct FakeApi {
        documents: Mutex<VecDeque<Result<Vec<Document>, ClientError>>>,
        histories: Mutex<HashMap<String, Vec<VersionRecord>>>,
        fail_writes: bool,
        calls: Mutex<Vec<String>>,
        saved: Mutex<Vec<DocumentForm>>,
        restored: Mutex<Vec<RestoreRequest>>,
    }

    impl FakeApi {
        fn push_documents(&self, docs: Vec<Document>) {
            self.documents.lock().unwrap().push_back(Ok(docs));
        }

        fn push_failure(&self) {
            self.documents.lock().unwrap().push_back(Err(ClientError::Status {
                status: 503,
                body: "down".into(),
            }));
        }

        fn set_history(&self, id: &str, records: Vec<VersionRecord>) {
            self.histories.lock().unwrap().insert(id.to_string(), records);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl DocumentApi for FakeApi {
        async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
            self.calls.lock().unwrap().push("list".into());
            self.documents
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn get_document(&self, id: &str) -> Result<Document, ClientError> {
            self.calls.lock().unwrap().push(format!("get {id}"));
            Err(ClientError::Status {
                status: 404,
                body: String::new(),
            })
        }

        async fn save_document(&self, form: &DocumentForm) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push("save".into());
            if self.fail_writes {
                return Err(ClientError::Status {
                    status: 500,
                    body: String::new(),
                });
            }
            self.saved.lock().unwrap().push(form.clone());
            Ok(())
        }

        async fn history(&self, id: &str) -> Result<Vec<VersionRecord>, ClientError> {
            self.calls.lock().unwrap().push(format!("history {id}"));
            self.histories
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or(ClientError::Status {
                    status: 404,
                    body: String::new(),
                })
        }

        async fn restore_version(&self, request: &RestoreRequest) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push("restore".into());
            if self.fail_writes {
                return Err(ClientError::Status {
                    status: 500,
                    body: String::new(),
                });
            }
            self.restored.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn doc(id: &str, title: &str, body: &str, version: u32) -> Document {
        Document {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            version,
            updated_at: Timestamp::parse("2024-03-01T09:00:00Z"),
        }
    }

    fn record(id: &str, version: u32, title: &str) -> VersionRecord {
        VersionRecord {
            id: id.into(),
            version,
            title: title.into(),
            created_at: Timestamp::parse("2024-02-01T09:00:00Z"),
        }
    }

    fn client(api: FakeApi) -> DocumentListClient<FakeApi> {
        DocumentListClient::new(api, HostPage::bundled().unwrap())
    }

    #[tokio::test]
    async fn load_renders_one_escaped_row_per_document_in_order() {
        let api = FakeApi::default();
        api.push_documents(vec![
            doc("b", "<h1>Second</h1>", "x", 1),
            doc("a", "First", "a < b", 4),
        ]);
        let mut client = client(api);

        client.load_documents().await.unwrap();

        let rows = client.page().documents();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].html, "&lt;h1&gt;Second&lt;/h1&gt;");
        assert_eq!(rows[1].cells[1].html, "a &lt; b");
        assert_eq!(rows[1].cells[2].html, "v4");
        let html = client.page().render_documents_table();
        assert!(!html.contains("<h1>"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[tokio::test]
    async fn reload_replaces_rows_entirely() {
        let api = FakeApi::default();
        api.push_documents(vec![doc("a", "A", "", 1), doc("b", "B", "", 1)]);
        api.push_documents(vec![doc("c", "C", "", 1)]);
        let mut client = client(api);

        client.load_documents().await.unwrap();
        client.load_documents().await.unwrap();

        assert_eq!(client.page().documents().len(), 1);
        assert_eq!(client.page().documents()[0].cells[0].html, "C");
    }

    #[tokio::test]
    async fn edit_control_recovers_original_title_with_quote() {
        let api = FakeApi::default();
        api.push_documents(vec![doc("d1", "Bob's plan", "it's <fine>", 1)]);
        let mut client = client(api);
        client.load_documents().await.unwrap();

        let edit = client.page().documents()[0].action("Edit").cloned().unwrap();
        client.click(&edit).await.unwrap();

        let form = client.page().form();
        assert_eq!(form.values().id, "d1");
        assert_eq!(form.values().title, "Bob's plan");
        assert_eq!(form.values().body, "it's <fine>");
        assert_eq!(form.heading(), EDIT_HEADING);
        assert_eq!(form.submit_label(), EDIT_SUBMIT);
        assert!(form.cancel_visible());
        assert_eq!(client.page().focused(), Some("title"));
        assert_eq!(client.api().calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn cancel_after_edit_returns_to_blank_create_mode() {
        let mut client = client(FakeApi::default());
        client.edit_document("d1", "T", "B");
        client.cancel_edit();

        let form = client.page().form();
        assert_eq!(form.values(), &DocumentForm::default());
        assert_eq!(form.heading(), CREATE_HEADING);
        assert_eq!(form.submit_label(), CREATE_SUBMIT);
        assert!(!form.cancel_visible());
    }

    #[tokio::test]
    async fn show_history_opens_panel_with_rows_in_order() {
        let api = FakeApi::default();
        api.set_history("d1", vec![record("d1", 3, "<new>"), record("d1", 1, "old")]);
        let mut client = client(api);

        client.show_history("d1").await.unwrap();

        let history = client.page().history();
        assert!(history.is_visible());
        assert_eq!(history.subject(), Some("d1"));
        assert_eq!(history.rows().len(), 2);
        assert_eq!(history.rows()[0].cells[0].html, "v3");
        assert_eq!(history.rows()[0].cells[1].html, "&lt;new&gt;");
        assert_eq!(
            history.rows()[1].restore,
            RowAction::Restore {
                id: "d1".into(),
                version: 1
            }
        );
        assert!(client.page().render_history_table().contains("Set As Current"));
    }

    #[tokio::test]
    async fn close_history_hides_panel_and_clears_subject() {
        let api = FakeApi::default();
        api.set_history("d1", vec![record("d1", 1, "t")]);
        let mut client = client(api);
        client.show_history("d1").await.unwrap();

        client.close_history();

        assert!(!client.page().history().is_visible());
        assert_eq!(client.page().history().subject(), None);
    }

    #[tokio::test]
    async fn restore_posts_exact_fields_then_reloads_list_and_history() {
        let api = FakeApi::default();
        api.set_history("d1", vec![record("d1", 2, "t")]);
        api.push_documents(vec![doc("d1", "t", "", 2)]);
        let mut client = client(api);

        client.restore_version("d1", 1).await.unwrap();

        let api = client.api();
        assert_eq!(
            api.restored.lock().unwrap().as_slice(),
            &[RestoreRequest {
                id: "d1".into(),
                version: 1
            }]
        );
        assert_eq!(api.calls(), vec!["restore", "list", "history d1"]);
        assert_eq!(
            api.restored.lock().unwrap()[0].fields(),
            [("Id", "d1".to_string()), ("Version", "1".to_string())]
        );
        assert!(client.page().history().is_visible());
        assert_eq!(client.page().documents().len(), 1);
    }

    #[tokio::test]
    async fn restore_from_open_panel_refreshes_that_document() {
        let api = FakeApi::default();
        api.set_history("d1", vec![record("ver-2", 2, "new"), record("ver-1", 1, "old")]);
        api.push_documents(vec![doc("d1", "old", "", 3)]);
        let mut client = client(api);
        client.show_history("d1").await.unwrap();

        let restore = client.page().history().rows()[1].restore.clone();
        client.click(&restore).await.unwrap();

        let api = client.api();
        assert_eq!(
            api.restored.lock().unwrap().as_slice(),
            &[RestoreRequest {
                id: "ver-1".into(),
                version: 1
            }]
        );
        assert_eq!(api.calls(), vec!["history d1", "restore", "list", "history d1"]);
        assert_eq!(client.page().history().subject(), Some("d1"));
        assert!(client.page().history().is_visible());
    }

    #[tokio::test]
    async fn failed_restore_does_not_reload() {
        let api = FakeApi {
            fail_writes: true,
            ..FakeApi::default()
        };
        let mut client = client(api);

        let err = client.restore_version("d1", 1).await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert_eq!(client.api().calls(), vec!["restore"]);
        assert_eq!(
            client.page().status_message(),
            Some("Restoring version failed: the server responded with status 500")
        );
    }

    #[tokio::test]
    async fn restore_attempts_history_even_when_list_reload_fails() {
        let api = FakeApi::default();
        api.push_failure();
        api.set_history("d1", vec![record("d1", 1, "t")]);
        let mut client = client(api);

        let err = client.restore_version("d1", 1).await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 503, .. }));
        assert_eq!(client.api().calls(), vec!["restore", "list", "history d1"]);
        assert!(client.page().history().is_visible());
        assert_eq!(
            client.page().status_message(),
            Some("Loading documents failed: the server responded with status 503")
        );
    }

    #[tokio::test]
    async fn submit_sends_one_post_then_resets_and_reloads() {
        let api = FakeApi::default();
        api.push_documents(vec![doc("d1", "Edited", "new body", 2)]);
        let mut client = client(api);
        client.edit_document("d1", "Original", "body");
        client.set_field(Field::Title, "Edited");
        client.set_field(Field::Body, "new body");

        client.submit_form().await.unwrap();

        let api = client.api();
        assert_eq!(api.calls(), vec!["save", "list"]);
        assert_eq!(
            api.saved.lock().unwrap().as_slice(),
            &[DocumentForm {
                id: "d1".into(),
                title: "Edited".into(),
                body: "new body".into(),
            }]
        );
        assert!(!client.page().form().is_edit());
        assert_eq!(client.page().form().heading(), CREATE_HEADING);
        assert_eq!(client.page().documents().len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_contents() {
        let api = FakeApi {
            fail_writes: true,
            ..FakeApi::default()
        };
        let mut client = client(api);
        client.set_field(Field::Title, "Draft");

        assert!(client.submit_form().await.is_err());

        assert_eq!(client.page().form().values().title, "Draft");
        assert_eq!(client.api().calls(), vec!["save"]);
        assert!(client.page().status_message().is_some());
    }

    #[tokio::test]
    async fn failed_load_leaves_prior_rows_and_shows_message() {
        let api = FakeApi::default();
        api.push_documents(vec![doc("a", "A", "", 1)]);
        api.push_failure();
        api.push_documents(vec![doc("a", "A", "", 1)]);
        let mut client = client(api);

        client.load_documents().await.unwrap();
        assert!(client.load_documents().await.is_err());
        assert_eq!(client.page().documents().len(), 1);
        assert_eq!(
            client.page().status_message(),
            Some("Loading documents failed: the server responded with status 503")
        );

        client.load_documents().await.unwrap();
        assert_eq!(client.page().status_message(), None);
    }

    #[tokio::test]
    async fn failed_history_keeps_previous_subject() {
        let api = FakeApi::default();
        api.set_history("d1", vec![record("d1", 1, "t")]);
        let mut client = client(api);
        client.show_history("d1").await.unwrap();

        assert!(client.show_history("missing").await.is_err());

        assert_eq!(client.page().history().subject(), Some("d1"));
        assert_eq!(client.page().history().rows().len(), 1);
    }
}
