use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use hangman::session::{GameSession, GuessSource, StdinSource, DEFAULT_ROUNDS};
use hangman::stats::StatsRecorder;
use hangman::word_bank::WordBank;
use hangman::GameError;

/// classic terminal hangman with per-round and per-session result logging
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// path to the word list (single column, no header)
    #[clap(short, long, default_value = "words.csv")]
    words: PathBuf,

    /// number of rounds to play
    #[clap(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// player name; prompted for when omitted
    #[clap(short, long)]
    player: Option<String>,

    /// directory for the round/session logs (defaults to the platform data dir)
    #[clap(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let bank = WordBank::load(&cli.words)?;

    let mut input = StdinSource;
    let player = match cli.player {
        Some(name) => name,
        None => input.read_line("Enter your name: ")?,
    };

    let recorder = match cli.log_dir {
        Some(dir) => StatsRecorder::with_dir(dir),
        None => StatsRecorder::new(),
    };

    let mut session = GameSession::new(player, cli.rounds);
    match session.run(&bank, &mut input, &recorder) {
        Ok(record) => {
            println!("Final score: {}/{}", record.final_score, cli.rounds);
            Ok(())
        }
        // validate_minimum has already printed the status line
        Err(GameError::InsufficientWords { .. }) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
