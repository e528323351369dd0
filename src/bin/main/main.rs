pub mod app;
pub mod input;

use app::{App, DEFAULT_HEIGHT, DEFAULT_MINES_AMOUNT, DEFAULT_WIDTH};
use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: u8,
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: u8,
    #[arg(short, long, default_value_t = DEFAULT_MINES_AMOUNT)]
    mines: u16,
    /// Makes the mines' layout reproducible.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Logs more (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Sends the logs to stderr so that they never get mixed with the grid.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let mut app = App::new(args.width, args.height, args.mines, args.seed)
        .wrap_err("Couldn't create the game. Bad parameters?")?;

    app.run(std::io::stdin().lock(), std::io::stdout())?;

    Ok(())
}
