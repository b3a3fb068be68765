mod chat;
mod client_config;
mod request_id;
mod service_status;
mod view_state;

pub use chat::*;
pub use client_config::*;
pub use request_id::*;
pub use service_status::*;
pub use view_state::*;
