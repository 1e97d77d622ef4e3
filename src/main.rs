mod api;
mod builder;
mod commands;
mod gateway;

use babel_core::{
    config::{self, StoreConfig},
    message::{Source, TranslationRequest},
    shellexpand,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "babel",
    version,
    about = "Babel: per-user chat translation relay"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "BABEL_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API.
    Serve,
    /// Check configuration and translator availability.
    Status,
    /// Run a single translation event and print the result as JSON.
    Translate {
        /// Who wrote the message.
        #[arg(short, long, value_enum)]
        source: SourceArg,
        /// User whose language preference applies.
        #[arg(short, long)]
        user_id: String,
        /// The message text.
        #[arg(trailing_var_arg = true, required = true)]
        message: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    User,
    Agent,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::User => Source::User,
            SourceArg::Agent => Source::Agent,
        }
    }
}

/// Install the tracing subscriber. Console output goes to stderr so that
/// command output on stdout stays machine-readable; `serve` also writes a
/// daily-rolling file under `{data_dir}/logs/`.
fn init_tracing(cfg: &config::Config, log_to_file: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.babel.log_level));

    let (file_layer, guard) = if log_to_file {
        let dir = format!("{}/logs", shellexpand(&cfg.babel.data_dir));
        let appender = tracing_appender::rolling::daily(dir, "babel.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

/// Where the config came from. `config::load` silently falls back to
/// defaults for a missing file.
fn config_origin(path: &str) -> String {
    if Path::new(path).exists() {
        path.to_string()
    } else {
        format!("{path} (not found, using defaults)")
    }
}

/// The database the store will actually open, with `~` expanded.
fn store_location(store: &StoreConfig) -> String {
    match store.backend.as_str() {
        "memory" => "in-memory".to_string(),
        _ => shellexpand(&store.db_path),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_tracing(&cfg, matches!(cli.command, Commands::Serve));
    info!("Config: {}", config_origin(&cli.config));

    match cli.command {
        Commands::Serve => {
            let store = builder::build_store(&cfg).await?;
            let translator = builder::build_translator(&cfg)?;
            if !translator.is_available().await {
                tracing::warn!(
                    "translator '{}' is not available; requests needing translation will fail",
                    translator.name()
                );
            }

            let gw = gateway::Gateway::new(store, translator, &cfg.translation);
            api::serve(&cfg.api, gw).await?;
        }
        Commands::Status => {
            println!("Babel status\n");
            println!("Config: {}", config_origin(&cli.config));
            println!("Store: {} ({})", cfg.store.backend, store_location(&cfg.store));
            println!(
                "Degrade on translator error: {}",
                cfg.translation.degrade_on_error
            );
            println!("API: {}:{}", cfg.api.host, cfg.api.port);
            println!();

            let translator = builder::build_translator(&cfg)?;
            let available = translator.is_available().await;
            println!(
                "  {}: {}",
                translator.name(),
                if available { "available" } else { "not available" }
            );
        }
        Commands::Translate {
            source,
            user_id,
            message,
        } => {
            let store = builder::build_store(&cfg).await?;
            let translator = builder::build_translator(&cfg)?;
            let gw = gateway::Gateway::new(store, translator, &cfg.translation);

            let request = TranslationRequest {
                source: source.into(),
                user_id,
                message: message.join(" "),
            };
            let result = gw.invoke(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_command() {
        let cli = Cli::try_parse_from([
            "babel", "translate", "--source", "agent", "--user-id", "u1", "Hello", "there",
        ])
        .unwrap();
        match cli.command {
            Commands::Translate {
                source,
                user_id,
                message,
            } => {
                assert_eq!(Source::from(source), Source::Agent);
                assert_eq!(user_id, "u1");
                assert_eq!(message.join(" "), "Hello there");
            }
            _ => panic!("expected translate command"),
        }
    }

    #[test]
    fn test_config_origin_flags_missing_file() {
        let missing = "/nonexistent/__babel_config__.toml";
        assert_eq!(
            config_origin(missing),
            format!("{missing} (not found, using defaults)")
        );

        let present = std::env::temp_dir().join(format!("__babel_cfg_{}__.toml", std::process::id()));
        std::fs::write(&present, "").unwrap();
        let present = present.to_string_lossy().to_string();
        assert_eq!(config_origin(&present), present);
        let _ = std::fs::remove_file(&present);
    }

    #[test]
    fn test_store_location_expands_home() {
        let Some(home) = std::env::var_os("HOME") else {
            return;
        };
        let store = StoreConfig {
            backend: "sqlite".to_string(),
            db_path: "~/.babel/data/preferences.db".to_string(),
        };
        assert_eq!(
            store_location(&store),
            format!("{}/.babel/data/preferences.db", home.to_string_lossy())
        );
    }

    #[test]
    fn test_store_location_memory_backend() {
        let store = StoreConfig {
            backend: "memory".to_string(),
            db_path: "~/ignored.db".to_string(),
        };
        assert_eq!(store_location(&store), "in-memory");
    }

    #[test]
    fn test_translate_requires_message() {
        let res = Cli::try_parse_from(["babel", "translate", "-s", "user", "-u", "u1"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_rejects_unknown_source() {
        let res = Cli::try_parse_from(["babel", "translate", "-s", "bot", "-u", "u1", "hi"]);
        assert!(res.is_err());
    }
}
