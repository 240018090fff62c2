use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use freecell::{generate_deck, GameType};
use freecell_cli::{load_deck, play_game, GameConfig, GameOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// One card per move
    Single,
    /// Runs of cards can be moved between cascades
    Multi,
}

impl From<Variant> for GameType {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Single => GameType::Single,
            Variant::Multi => GameType::Multi,
        }
    }
}

/// Play Freecell in the terminal.
///
/// Moves are entered as a source pile (e.g. C1, O2, F3), the index of the
/// card in that pile counted from the bottom, and the destination pile.
/// Enter q to quit.
#[derive(Parser)]
struct Args {
    /// Number of cascade piles
    #[arg(long, default_value_t = 8)]
    cascades: usize,

    /// Number of open piles (free cells)
    #[arg(long, default_value_t = 4)]
    opens: usize,

    /// Whether runs of cards may be moved at once
    #[arg(short, long, value_enum, default_value_t = Variant::Multi)]
    game_type: Variant,

    /// Shuffle the deck before dealing
    #[arg(short, long, default_value_t = false)]
    shuffle: bool,

    /// RNG seed for shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the deck to deal, instead of the standard ordered deck
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Reverse the deck before dealing
    #[arg(short, long, default_value_t = false)]
    reverse: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let mut deck = match &args.deck {
        Some(path) => load_deck(path)?,
        None => generate_deck(),
    };
    if args.reverse {
        deck.reverse();
    }

    let mut config = GameConfig {
        rng: StdRng::seed_from_u64(seed),
        game_type: args.game_type.into(),
        num_cascades: args.cascades,
        num_opens: args.opens,
        shuffle: args.shuffle,
    };

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match play_game(&mut config, &deck, stdin, &mut stdout)? {
        GameOutcome::Won => info!("Won"),
        GameOutcome::Quit => info!("Quit"),
        GameOutcome::CouldNotStart(err) => info!(%err, "Could not start"),
    }
    writeln!(stdout)?;

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
