use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, ProbeController, UrlController};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    probe_controller: ProbeController<'a>,
    url_controller: UrlController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            probe_controller: ProbeController::new(container),
            url_controller: UrlController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Send { message, format } => self.chat_controller.send(message, format).await,
            Commands::Chat { format } => self.chat_controller.interactive(format).await,
            Commands::Health { format } => self.probe_controller.health(format).await,
            Commands::Ready { format } => self.probe_controller.ready(format).await,
            Commands::Url => Ok(self.url_controller.show()),
        }
    }
}
