use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message and print the reply
    Send {
        message: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Read messages from stdin, one request per line
    Chat {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check the backend liveness endpoint (/healthz)
    Health {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check the backend readiness endpoint (/readyz)
    Ready {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the configured API base and the chat endpoint it resolves to
    Url,
}
