use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use chrono::Local;
use uuid::Uuid;

use crate::error::GameError;
use crate::gallows;
use crate::round::RoundState;
use crate::stats::{RoundRecord, SessionRecord, StatsRecorder};
use crate::word_bank::WordBank;

pub const DEFAULT_ROUNDS: usize = 3;

/// Blocking source of player input, one line per prompt.
///
/// The game suspends on `read_line` until an answer arrives; there is no
/// timeout. Production play reads stdin, tests script the answers.
pub trait GuessSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Production input source reading from stdin.
pub struct StdinSource;

impl GuessSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Scripted input source for tests.
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl GuessSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Orchestrates a sequence of rounds for one player and hands every outcome
/// to the stats recorder.
#[derive(Debug)]
pub struct GameSession {
    session_id: Uuid,
    player_name: String,
    rounds: usize,
    score: u32,
}

impl GameSession {
    pub fn new(player_name: impl Into<String>, rounds: usize) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            player_name: player_name.into(),
            rounds,
            score: 0,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Runs the whole session: one fresh `RoundState` per round, a round
    /// record after each, a session record at the end.
    ///
    /// Refuses to start (no records written) when the bank is under the
    /// minimum word count.
    pub fn run<S: GuessSource>(
        &mut self,
        bank: &WordBank,
        input: &mut S,
        recorder: &StatsRecorder,
    ) -> Result<SessionRecord, GameError> {
        if !bank.validate_minimum() {
            return Err(GameError::InsufficientWords {
                loaded: bank.count(),
            });
        }

        log::info!(
            "session {} started for {} ({} rounds)",
            self.session_id,
            self.player_name,
            self.rounds
        );
        let start_timestamp = Local::now();

        for round_number in 1..=self.rounds {
            let word = bank
                .pick_random()
                .ok_or(GameError::InsufficientWords { loaded: 0 })?
                .to_string();
            let mut round = RoundState::new(&word);
            self.play_round(&mut round, input)?;

            let victory = round.is_won();
            if victory {
                self.score += 1;
                println!("You won!");
            } else {
                println!("The word was: '{}'", round.word());
            }

            recorder.append_round(&RoundRecord {
                session_id: self.session_id,
                word,
                player_name: self.player_name.clone(),
                round_number,
                failed_count: round.failed_count(),
                victory,
            })?;
        }

        let record = SessionRecord {
            session_id: self.session_id,
            player_name: self.player_name.clone(),
            start_timestamp,
            end_timestamp: Local::now(),
            final_score: self.score,
        };
        recorder.append_session(&record)?;
        log::info!(
            "session {} finished: {}/{}",
            self.session_id,
            self.score,
            self.rounds
        );
        Ok(record)
    }

    /// Drives one round to a win or a loss. Invalid guesses are reported and
    /// re-prompted without touching the round state.
    fn play_round<S: GuessSource>(
        &self,
        round: &mut RoundState,
        input: &mut S,
    ) -> Result<(), GameError> {
        while !round.is_finished() {
            println!("{}", gallows::board(&round.mask(), round.failed_letters()));
            let guess = input.read_line("Guess a letter: ")?;
            if round.apply_guess(guess.trim()).is_none() {
                println!("Invalid guess. Enter one new letter.");
            }
        }
        println!("{}", gallows::board(&round.mask(), round.failed_letters()));
        Ok(())
    }
}
