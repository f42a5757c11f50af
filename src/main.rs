//! # docdesk 실행 파일 진입점
//!
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 및 백엔드 클라이언트 생성
//! 4. 호스트 페이지 템플릿 연결
//! 5. 서브커맨드 실행 후 결과 마크업 출력

use anyhow::Result;
use clap::Parser;
use docdesk::{
    cli::{self, Cli},
    Config, DocumentListClient, HttpApi,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // 출력(stdout)은 마크업 전용이므로 로그는 stderr로 보냅니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::info!("Using document API at {}", config.api_url);

    let api = HttpApi::new(&config)?;
    let page = cli::load_host_page(&config).await?;
    let mut client = DocumentListClient::new(api, page);

    let output = cli::run(&mut client, cli.command).await?;
    println!("{output}");

    Ok(())
}
