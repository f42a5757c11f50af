//! # 에러 처리 모듈
//!
//! 클라이언트에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `ClientError` 열거형(enum): 네트워크/디코딩/페이지/설정 에러를 하나의 타입으로 통합
//! - `user_message()`: 화면의 상태 메시지 영역에 보여줄 짧은 문구

use thiserror::Error;

/// 클라이언트에서 발생할 수 있는 모든 에러 종류
///
/// 네트워크 작업은 모두 `Result<T, ClientError>`를 반환합니다.
/// 컨트롤러는 에러가 나면 이전 화면 상태를 그대로 두고,
/// `user_message()`를 상태 메시지 영역에 표시합니다.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP 요청 자체가 실패함 (연결 거부, DNS, 타임아웃 등)
    /// #[from]: reqwest::Error → ClientError::Request 자동 변환
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 백엔드가 2xx가 아닌 상태 코드를 반환함
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// 응답 본문이 기대한 JSON 형태가 아님
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 호스트 페이지에 필수 요소가 없음
    #[error("Host page is missing element #{0}")]
    MissingElement(String),

    /// 설정(환경변수) 오류
    #[error("Configuration error: {0}")]
    Config(String),

    /// 호스트 페이지 템플릿 파일을 읽지 못함
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// 상태 메시지 영역에 표시할 문구를 만듭니다.
    ///
    /// 서버 응답 본문처럼 길어질 수 있는 내부 정보는 로그에만 남기고,
    /// 화면에는 무엇이 실패했는지만 보여줍니다.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ClientError::Request(_) => format!("{action} failed: the server could not be reached"),
            ClientError::Status { status, .. } => {
                format!("{action} failed: the server responded with status {status}")
            }
            ClientError::Decode(_) => format!("{action} failed: the server sent an unreadable response"),
            other => format!("{action} failed: {other}"),
        }
    }
}
