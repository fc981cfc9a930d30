//! arena: plays a few games of grid pursuit in the terminal.
//!
//! Usage: `arena [MAP_FILE] [CONFIG_JSON]`
//!
//! Without a map file the embedded two-team arena below is used.  The JSON
//! config maps onto `SimConfig`; missing fields keep their defaults.  Set
//! `RUST_LOG=debug` to see every seeker decision on stderr.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use gp_core::SimConfig;
use gp_output::{CsvWriter, ScoreOutputObserver, render_frame, status_lines};
use gp_sim::{Game, Outcome};

// ── Constants ─────────────────────────────────────────────────────────────────

const GAMES:      u64 = 3;
const OUTPUT_DIR: &str = "output/arena";

/// Two teams sharing sixteen food pellets, with both chasers in the middle.
const DEFAULT_MAP: &str = "\
########
#P1....F1#
#.#..#.#
#..GG..#
#.#..#.#
#P2....F2#
########
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let map_path = args.next().map(PathBuf::from);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    config.validate()?;

    let mut game = match &map_path {
        Some(path) => Game::load(path, config.clone())
            .with_context(|| format!("loading map {}", path.display()))?,
        None => Game::from_map_text(DEFAULT_MAP, config.clone())?,
    };
    info!(seed = config.seed, games = GAMES, "starting arena");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    loop {
        let round = game.round();
        let dir = Path::new(OUTPUT_DIR).join(format!("game_{round}"));
        let mut obs = ScoreOutputObserver::new(CsvWriter::new(&dir)?, &config);

        let started = Instant::now();
        let outcome = play(&mut game, &mut obs, &config, &mut out)?;
        if !outcome.is_terminal() {
            // Stopped at the tick cap: on_game_over never fired.
            obs.finish();
        }
        if let Some(e) = obs.take_error() {
            warn!(error = %e, "score output incomplete");
        }
        info!(
            round,
            outcome = %outcome,
            wall_secs = started.elapsed().as_secs_f64(),
            csv = %dir.display(),
            "game finished"
        );

        if round + 1 >= GAMES {
            break;
        }
        if !game.restart_if_over()? {
            game.reset()?;
        }
    }

    writeln!(out, "High scores:")?;
    for (team, best) in game.high_scores() {
        writeln!(out, "  {team:<4} {best}")?;
    }
    Ok(())
}

/// Step one game until it ends or hits `config.max_ticks`, drawing a frame
/// after every tick.
fn play<W: Write>(
    game:   &mut Game,
    obs:    &mut ScoreOutputObserver<CsvWriter>,
    config: &SimConfig,
    out:    &mut W,
) -> Result<Outcome> {
    let interval = config.tick_interval();
    draw(game, out)?;

    loop {
        if config.max_ticks.is_some_and(|cap| game.simulation().tick().0 >= cap) {
            return Ok(game.simulation().outcome());
        }
        let outcome = game.step_observed(obs);
        draw(game, out)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        std::thread::sleep(interval);
    }
}

fn draw<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    let snapshot = game.snapshot();
    // Clear screen, cursor home.
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(out, "{}", render_frame(game.simulation().grid(), &snapshot))?;
    writeln!(out)?;
    for line in status_lines(&snapshot) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
