//! Terminal front end: serve fractions of food to customers from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use clap::Parser;
use fraction_kitchen::{KitchenConfig, KitchenRng, OrderSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "kitchen", about = "Serve the right fraction of food to each customer")]
struct Args {
    /// RNG seed; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
commands:
  cut <item> <preset>   add a preset piece (presets: {presets})
  add <item> <N/D>      add a typed fraction, e.g. add pizza 3/8
  serve                 hand the serving to the customer
  clear                 empty the serving
  order                 show the order and the serving
  help                  show this help
  quit                  leave the kitchen";

fn init_logger(verbose: bool) {
    let default = if verbose { "fraction_kitchen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => KitchenConfig::load(path)?,
        None => KitchenConfig::default(),
    };
    let rng = args.seed.map_or_else(KitchenRng::from_entropy, KitchenRng::new);
    tracing::debug!(seed = rng.seed(), "starting kitchen");

    let presets: Vec<&str> = config.presets.iter().map(|p| p.name.as_str()).collect();
    let help = HELP.replace("{presets}", &presets.join(", "));
    let mut session = OrderSession::with_rng(config.clone(), rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.order())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            ["help"] => writeln!(out, "{help}")?,
            ["order"] => {
                writeln!(out, "{}", session.order())?;
                writeln!(out, "{}", session.serving())?;
            }
            ["clear"] => {
                session.reset_serving();
                writeln!(out, "{}", session.serving())?;
            }
            ["cut", item, preset] => match session.apply_preset(*item, preset) {
                Ok(receipt) => writeln!(out, "{receipt}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            ["add", item, rest @ ..] if !rest.is_empty() => {
                match session.record_cut_text(*item, &rest.join(" ")) {
                    Ok(receipt) => writeln!(out, "{receipt}")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            ["serve"] => {
                let result = session.evaluate();
                writeln!(out, "{result}")?;
                if result.is_success() {
                    out.flush()?;
                    thread::sleep(session.success_delay());
                    session.new_round();
                    writeln!(out, "{}", session.order())?;
                }
            }
            _ => writeln!(out, "unknown command; type 'help'")?,
        }
        out.flush()?;
    }

    Ok(())
}
