/// A round is lost once this many distinct guesses have missed.
pub const FAIL_LIMIT: usize = 6;

/// Placeholder shown for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// State of a single round: one target word driven to a win or a loss.
///
/// Constructed fresh per round; nothing carries over between rounds. Mutated
/// only through `apply_guess`.
#[derive(Debug, Clone)]
pub struct RoundState {
    word: String,
    guessed: Vec<char>,
    failed: Vec<char>,
    mask: Vec<char>,
}

impl RoundState {
    pub fn new(word: &str) -> Self {
        let word = word.to_lowercase();
        let mask = vec![PLACEHOLDER; word.chars().count()];
        Self {
            word,
            guessed: Vec::new(),
            failed: Vec::new(),
            mask,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The partially revealed word: guessed letters in position, placeholders
    /// elsewhere.
    pub fn mask(&self) -> String {
        self.mask.iter().collect()
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn failed_letters(&self) -> &[char] {
        &self.failed
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// True iff `input` is exactly one alphabetic character whose lowercase
    /// form has not been attempted yet. Case-insensitive.
    pub fn is_valid_guess(&self, input: &str) -> bool {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                let c = c.to_ascii_lowercase();
                !self.guessed.contains(&c) && !self.failed.contains(&c)
            }
            _ => false,
        }
    }

    /// Applies a guess. Returns `None` without mutating anything when the
    /// guess is invalid; the caller re-prompts and no turn is consumed.
    pub fn apply_guess(&mut self, input: &str) -> Option<Outcome> {
        if !self.is_valid_guess(input) {
            return None;
        }
        // is_valid_guess guarantees exactly one char
        let letter = input.chars().next()?.to_ascii_lowercase();

        if self.word.contains(letter) {
            self.guessed.push(letter);
            self.refresh_mask();
            Some(Outcome::Hit)
        } else {
            self.failed.push(letter);
            Some(Outcome::Miss)
        }
    }

    fn refresh_mask(&mut self) {
        for (i, c) in self.word.chars().enumerate() {
            if self.guessed.contains(&c) {
                self.mask[i] = c;
            }
        }
    }

    pub fn is_won(&self) -> bool {
        !self.mask.contains(&PLACEHOLDER)
    }

    pub fn is_lost(&self) -> bool {
        self.failed.len() >= FAIL_LIMIT
    }

    pub fn is_finished(&self) -> bool {
        self.is_won() || self.is_lost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_masks_the_whole_word() {
        let round = RoundState::new("mango");
        assert_eq!(round.mask(), "_____");
        assert_eq!(round.failed_count(), 0);
        assert!(!round.is_finished());
    }

    #[test]
    fn new_round_lowercases_the_target() {
        let round = RoundState::new("MANGO");
        assert_eq!(round.word(), "mango");
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut round = RoundState::new("banana");
        assert_eq!(round.apply_guess("a"), Some(Outcome::Hit));
        assert_eq!(round.mask(), "_a_a_a");
        assert_eq!(round.failed_count(), 0);
    }

    #[test]
    fn miss_leaves_the_mask_untouched() {
        let mut round = RoundState::new("mango");
        assert_eq!(round.apply_guess("z"), Some(Outcome::Miss));
        assert_eq!(round.mask(), "_____");
        assert_eq!(round.failed_letters(), &['z']);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut round = RoundState::new("mango");
        assert_eq!(round.apply_guess("M"), Some(Outcome::Hit));
        assert_eq!(round.mask(), "m____");
        // same letter in either case is now a repeat
        assert!(!round.is_valid_guess("m"));
        assert!(!round.is_valid_guess("M"));
    }

    #[test]
    fn rejects_multi_char_and_non_alphabetic_input() {
        let round = RoundState::new("mango");
        assert!(!round.is_valid_guess(""));
        assert!(!round.is_valid_guess("ab"));
        assert!(!round.is_valid_guess("1"));
        assert!(!round.is_valid_guess("!"));
        assert!(!round.is_valid_guess(" "));
        assert!(round.is_valid_guess("a"));
    }

    #[test]
    fn rejects_repeats_from_either_set() {
        let mut round = RoundState::new("mango");
        round.apply_guess("m");
        round.apply_guess("z");
        assert!(!round.is_valid_guess("m"));
        assert!(!round.is_valid_guess("z"));
        assert!(round.is_valid_guess("a"));
    }

    #[test]
    fn invalid_guess_mutates_nothing() {
        let mut round = RoundState::new("mango");
        round.apply_guess("z");
        let mask_before = round.mask();
        assert_eq!(round.apply_guess("z"), None);
        assert_eq!(round.apply_guess("xy"), None);
        assert_eq!(round.mask(), mask_before);
        assert_eq!(round.failed_count(), 1);
    }

    #[test]
    fn won_when_every_letter_is_guessed() {
        let mut round = RoundState::new("mango");
        for letter in ["m", "a", "n", "g", "o"] {
            round.apply_guess(letter);
        }
        assert_eq!(round.mask(), "mango");
        assert!(round.is_won());
        assert!(!round.is_lost());
        assert!(round.is_finished());
        assert_eq!(round.failed_count(), 0);
    }

    #[test]
    fn lost_at_exactly_six_misses() {
        let mut round = RoundState::new("kiwi");
        for letter in ["x", "z", "q", "j", "v"] {
            round.apply_guess(letter);
            assert!(!round.is_lost());
        }
        round.apply_guess("b");
        assert_eq!(round.failed_count(), FAIL_LIMIT);
        assert!(round.is_lost());
        assert!(!round.is_won());
        assert!(round.is_finished());
    }

    #[test]
    fn repeated_letters_in_word_need_one_guess() {
        let mut round = RoundState::new("kiwi");
        round.apply_guess("k");
        round.apply_guess("i");
        round.apply_guess("w");
        assert_eq!(round.mask(), "kiwi");
        assert!(round.is_won());
    }
}
