use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use navdeck_auth::ProviderRegistry;

#[derive(Parser)]
#[command(name = "navdeck", about = "Terminal dashboard with responsive navigation", version)]
struct Cli {
    /// Theme to use for this invocation (e.g., "dracula", "nord").
    #[arg(long)]
    theme: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect the authentication configuration.
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Print the assembled provider registry (credentials redacted).
    Providers,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    // Providers are assembled once at startup; a missing credential aborts
    // here rather than surfacing later at sign-in time.
    let registry = ProviderRegistry::from_env().context("auth provider configuration invalid")?;
    tracing::debug!(providers = registry.providers().len(), "provider registry assembled");

    match cli.command {
        Some(Command::Auth {
            command: AuthCommand::Providers,
        }) => {
            println!("{}", serde_json::to_string_pretty(&registry.listing())?);
            Ok(())
        }
        // No subcommand => TUI
        None => navdeck_tui::run(registry, cli.theme.as_deref()).await,
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
