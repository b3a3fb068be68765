pub mod chat_controller;
pub mod probe_controller;
pub mod url_controller;

pub use chat_controller::ChatController;
pub use probe_controller::ProbeController;
pub use url_controller::UrlController;
