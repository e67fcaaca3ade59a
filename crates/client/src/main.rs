//! Superhero arena client binary.
//!
//! Main entry point for the terminal game. This binary is the composition
//! root that assembles:
//! 1. Configuration from the environment (and an optional `.env`)
//! 2. Logging
//! 3. Hero selection
//! 4. Runtime with the stdin action provider
//! 5. Narration of every event
//!
//! # Examples
//!
//! ```bash
//! # Reproducible run without pauses
//! ARENA_SEED=7 ARENA_ROUND_DELAY_MS=0 cargo run -p arena-client
//!
//! # Machine-readable events, logs in ./logs
//! ARENA_NARRATION=json ARENA_LOG_DIR=logs cargo run -p arena-client
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use arena_client::{CliActionProvider, ClientConfig, NarrationMode, Narrator, input, logging};
use arena_core::Session;
use arena_runtime::{Runtime, RuntimeConfig, RuntimeError};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::info!(?config, "starting arena client");

    // Prompts share stdout with text narration; JSON keeps stdout clean.
    let mut reader = io::stdin().lock();
    let mut prompts: Box<dyn Write> = match config.narration {
        NarrationMode::Text => Box::new(io::stdout()),
        NarrationMode::Json => Box::new(io::stderr()),
    };

    // 3. Choose hero
    writeln!(prompts, "=== Welcome to Superhero Arena ===")?;
    let hero = match input::choose_hero(&mut reader, &mut prompts) {
        Ok(hero) => hero,
        Err(RuntimeError::InputClosed) => {
            writeln!(prompts, "\nNo input. Leaving the arena.")?;
            return Ok(());
        }
        Err(err) => return Err(err).context("hero selection failed"),
    };

    // 4. Build runtime
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            seed: config.seed,
            ..RuntimeConfig::default()
        })
        .player_provider(CliActionProvider::new(reader, prompts))
        .build();
    tracing::info!(seed = ?runtime.seed(), "runtime built");

    // 5. Play
    let mut narrator =
        Narrator::new(io::stdout(), config.narration).with_round_delay(config.round_delay);
    let mut session = Session::new(hero);

    match runtime.run_session(&mut session, &mut narrator) {
        Ok(summary) => {
            if config.narration == NarrationMode::Text {
                println!(
                    "\nFinal: level {}, {} victories ({}).",
                    summary.level, summary.victories, summary.end
                );
            }
        }
        Err(RuntimeError::InputClosed) => {
            tracing::warn!("input closed mid-session");
            eprintln!("\nInput closed. Leaving the arena.");
        }
        Err(err) => return Err(err).context("session failed"),
    }

    tracing::info!("client shutdown complete");
    Ok(())
}
