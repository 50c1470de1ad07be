// Native binary for the slide deck - terminal preview and scripted replay

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};

use slidedeck::{config::load, snapshot, tui, Deck};

fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();

    let (cfg, args) = load().context("Failed to load configuration")?;

    match args.script.as_deref() {
        Some(path) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
            if cfg.diagnostics_enabled {
                cfg.print_summary();
            }

            let mut deck = Deck::headless(&cfg, args.width, tui::PREVIEW_CARDS)?;
            let stdout = io::stdout().lock();
            let applied = if path == "-" {
                snapshot::replay(&mut deck, io::stdin().lock(), stdout)?
            } else {
                let file = File::open(path).with_context(|| format!("opening script {path}"))?;
                snapshot::replay(&mut deck, BufReader::new(file), stdout)?
            };
            log::info!("replayed {applied} action(s)");
            Ok(())
        }
        None => {
            // Keep stderr quiet while the alternate screen is up.
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init();
            tui::run(&cfg)
        }
    }
}
