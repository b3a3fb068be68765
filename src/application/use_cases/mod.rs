mod chat_session;
mod probe_service;
mod send_message;

pub use chat_session::*;
pub use probe_service::*;
pub use send_message::*;
