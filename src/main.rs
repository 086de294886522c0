//! Reversi-Rust: command line front end for the rule engine.
//!
//! ## Usage
//!
//! - `reversi-rust` - Show the starting position
//! - `reversi-rust perft --depth 6` - Count move paths from the start
//! - `reversi-rust selfplay --games 10` - Play random games

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi_rust::constants::DEFAULT_BOARD_SIZE;
use reversi_rust::perft::perft;
use reversi_rust::playout::{random_playout, rewind};
use reversi_rust::position::GameState;

/// Reversi-Rust: a Reversi rule engine
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length (even, 2 to 26)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the starting position and its legal moves
    Show {
        /// Moves to play first, e.g. `c4 c3`
        moves: Vec<String>,
    },
    /// Count leaf positions at a given depth
    Perft {
        #[arg(short, long, default_value_t = 6)]
        depth: u32,
    },
    /// Play random games and report the results
    Selfplay {
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(short, long, default_value_t = 1)]
        games: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let game = GameState::new(cli.size).with_context(|| format!("cannot set up a {0}x{0} board", cli.size))?;

    match cli.command {
        Some(Commands::Show { moves }) => show(game, &moves),
        Some(Commands::Perft { depth }) => run_perft(game, depth),
        Some(Commands::Selfplay { seed, games }) => run_selfplay(game, seed, games),
        None => show(game, &[]),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn show(mut game: GameState, moves: &[String]) -> Result<()> {
    for text in moves {
        let mv = game.parse_move(text).with_context(|| format!("bad move {text:?}"))?;
        ensure!(
            game.legal_moves().contains(&mv),
            "{mv} is not legal for {}",
            game.color_to_move()
        );
        game.apply_move(mv);
    }

    print!("{game}");
    let legal: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
    println!("legal: {}", legal.join(" "));
    println!("eval: {}", game.evaluate());
    Ok(())
}

fn run_perft(mut game: GameState, depth: u32) -> Result<()> {
    for d in 1..=depth {
        let start = std::time::Instant::now();
        let leaves = perft(&mut game, d);
        info!(depth = d, leaves, elapsed = ?start.elapsed(), "perft");
        println!("perft({d}) = {leaves}");
    }
    Ok(())
}

fn run_selfplay(mut game: GameState, seed: u64, games: usize) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let (mut black_wins, mut white_wins, mut draws) = (0, 0, 0);

    for i in 0..games {
        let result = random_playout(&mut game, &mut rng);
        info!(game = i, plies = result.plies, score = result.score, "selfplay");
        println!(
            "game {i}: black {} white {} ({} plies)",
            result.count.black, result.count.white, result.plies
        );
        match result.score {
            s if s > 0 => white_wins += 1,
            s if s < 0 => black_wins += 1,
            _ => draws += 1,
        }
        rewind(&mut game);
    }

    println!("black {black_wins} / white {white_wins} / draws {draws}");
    Ok(())
}
