// Library surface so the game core stays testable without a terminal.
// main.rs only wires the CLI to these modules.
pub mod app_dirs;
pub mod error;
pub mod gallows;
pub mod round;
pub mod session;
pub mod stats;
pub mod word_bank;

pub use error::GameError;
pub use round::{Outcome, RoundState, FAIL_LIMIT};
pub use session::{GameSession, GuessSource, ScriptedSource, StdinSource, DEFAULT_ROUNDS};
pub use stats::{RoundRecord, SessionRecord, StatsRecorder};
pub use word_bank::{WordBank, MIN_WORDS};
