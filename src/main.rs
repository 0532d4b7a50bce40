use std::io::IsTerminal;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ai_daily::{
    models::Preferences,
    prelude::{render, Dashboard, NewsClient, RenderOptions, Session},
};

/// Daily AI news, searched by a language model and rendered as cards.
#[derive(Debug, Parser)]
#[command(name = "ai-daily", version)]
struct Cli {
    /// Daily update time (HH:MM). Displayed only.
    #[arg(long, value_parser = parse_schedule, default_value = Preferences::DEFAULT_SCHEDULE)]
    schedule: NaiveTime,

    /// Email notifications toggle. Displayed only.
    #[arg(long)]
    email_notifications: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the latest updates and render the dashboard
    Fetch,
    /// Render the dashboard without fetching
    Show,
}

fn parse_schedule(raw: &str) -> Result<NaiveTime, String> {
    Preferences::parse_schedule(raw).map_err(|e| format!("expected HH:MM: {e}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let dashboard = Dashboard::new(Preferences {
        schedule: cli.schedule,
        email_notifications: cli.email_notifications,
    });
    let session = Session::new(dashboard);

    match cli.command {
        Command::Fetch => {
            let client = NewsClient::load_from_env()?;
            session.refresh(&client).await;
        }
        Command::Show => {}
    }

    let options = RenderOptions {
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };
    print!("{}", render(&session.snapshot(), options));

    Ok(())
}
