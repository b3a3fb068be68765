pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::{Commands, OutputFormat};

pub use application::{
    ChatSession, HttpMethod, HttpReply, HttpRequest, HttpTransport, ProbeServiceUseCase,
    SendMessageUseCase,
};

pub use connector::{MockTransport, ReqwestTransport};

pub use domain::{
    compose_url, resolve_url, ChatError, ChatRequest, ChatResponse, ClientConfig, ProbeKind,
    RequestId, RequestIdStrategy, SendPhase, ServiceStatus, ViewState, CHAT_PATH,
    REQUEST_ID_HEADER,
};
