use crate::domain::{CHAT_PATH, HEALTH_PATH, READY_PATH};

use super::super::Container;

pub struct UrlController<'a> {
    container: &'a Container,
}

impl<'a> UrlController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn show(&self) -> String {
        let config = self.container.client_config();
        let base = if config.api_base.is_empty() {
            format!("(relative, origin {})", config.origin)
        } else {
            config.api_base.clone()
        };

        let mut out = format!("API Base: {}", base);
        for path in [CHAT_PATH, HEALTH_PATH, READY_PATH] {
            let url = config.url_for(path);
            out.push_str(&format!(
                "\n  {:<10} {}  ->  {}",
                path,
                url,
                self.container.resolved_url(&url)
            ));
        }
        out
    }
}
