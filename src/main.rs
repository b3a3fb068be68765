use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use osschat::connector::api::{Container, ContainerConfig, Router};
use osschat::{ClientConfig, Commands, RequestIdStrategy};

#[derive(Parser)]
#[command(name = "osschat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API base URL; defaults to $OSSCHAT_API_BASE_URL, empty means relative paths
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Origin that relative URLs are sent to; defaults to $OSSCHAT_ORIGIN
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Model override forwarded to the backend; defaults to $OSSCHAT_MODEL
    #[arg(long, global = true)]
    model: Option<String>,

    /// Correlation id format
    #[arg(long, global = true, value_enum, default_value = "uuid")]
    request_id: RequestIdStrategy,

    /// Transport timeout in seconds (none by default)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer locally with the mock provider instead of calling the API
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env()
            .with_request_id_strategy(self.request_id)
            .with_timeout(self.timeout_secs.map(Duration::from_secs));

        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(origin) = &self.origin {
            config = config.with_origin(origin.clone());
        }
        if self.model.is_some() {
            config = config.with_model(self.model.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let container = Container::new(ContainerConfig {
        client: cli.client_config(),
        mock: cli.mock,
    });
    let router = Router::new(&container);

    match router.route(cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
