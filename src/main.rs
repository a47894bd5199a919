use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tmux_controller::demo;
use tmux_controller::tmux::TmuxController;

#[derive(Parser)]
#[command(name = "tmux-demo")]
#[command(version)]
#[command(about = "Walk through scripted control of a running tmux server")]
struct Cli {
    /// Replay a scripted command sequence instead of the basic walkthrough
    #[arg(long)]
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tmux_controller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = TmuxController::list_sessions().and_then(|sessions| {
        if cli.interactive {
            demo::run_interactive(sessions, |name| TmuxController::new(name))
        } else {
            demo::run_basic(sessions, |name| TmuxController::new(name))
        }
    });

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
