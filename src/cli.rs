//! # CLI 서브커맨드
//!
//! 실행 파일은 컨트롤러 동작 하나를 실행하고, 그 결과로 바뀐 테이블 마크업을 출력합니다.

use crate::{
    api::DocumentApi,
    config::Config,
    error::ClientError,
    ui::{page::DocumentRow, DocumentListClient, Field, HostPage},
};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "docdesk", version, about = "Browse, edit and restore versioned documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 문서 목록 테이블을 출력
    List,
    /// 문서 하나를 조회해 목록 행 형태로 출력
    Show { id: String },
    /// 버전 히스토리 테이블을 출력
    History { id: String },
    /// 버전을 현재 버전으로 복원한 뒤 히스토리 테이블을 출력
    Restore { id: String, version: u32 },
    /// 문서를 생성하거나 (`--id`가 있으면) 수정한 뒤 목록 테이블을 출력
    ///
    /// 수정 시 `--body`를 생략하면 저장된 본문을 그대로 둡니다.
    Save {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
    },
}

/// 설정된 템플릿이 있으면 읽어서 붙이고, 없으면 내장 템플릿을 씁니다.
pub async fn load_host_page(config: &Config) -> Result<HostPage, ClientError> {
    match &config.host_page {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading host page template");
            let html = tokio::fs::read_to_string(path).await?;
            HostPage::attach(&html)
        }
        None => HostPage::bundled(),
    }
}

/// 명령 하나를 실행하고 출력할 마크업을 돌려줍니다.
pub async fn run<A: DocumentApi>(
    client: &mut DocumentListClient<A>,
    command: Command,
) -> Result<String, ClientError> {
    match command {
        Command::List => {
            client.load_documents().await?;
            Ok(client.page().render_documents_table())
        }
        Command::Show { id } => {
            let document = client.api().get_document(&id).await?;
            Ok(DocumentRow::from_document(&document).to_html())
        }
        Command::History { id } => {
            client.show_history(&id).await?;
            Ok(client.page().render_history_table())
        }
        Command::Restore { id, version } => {
            client.restore_version(&id, version).await?;
            Ok(client.page().render_history_table())
        }
        Command::Save { id, title, body } => {
            match id {
                Some(id) => {
                    // 본문을 주지 않았으면 서버의 현재 본문으로 폼을 채워 지워지지 않게 합니다.
                    let body = match body {
                        Some(body) => body,
                        None => client.api().get_document(&id).await?.body,
                    };
                    client.edit_document(&id, &title, &body);
                }
                None => {
                    client.set_field(Field::Title, &title);
                    client.set_field(Field::Body, body.as_deref().unwrap_or_default());
                }
            }
            client.submit_form().await?;
            Ok(client.page().render_documents_table())
        }
    }
}
