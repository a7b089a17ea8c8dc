/// GameSession: the state machine for one round of Hangman.
///
/// Pure state + transition methods, no rendering concerns. The UI reads
/// a snapshot and calls the operations; out-of-contract calls (guessing
/// outside Playing, re-guessing a letter) are deliberately ignored
/// rather than rejected, so a presentation layer that races slightly
/// ahead of a disabled control never causes a failure.
///
/// ## Transitions
///
/// ```text
/// Menu ──start_single_player / start_two_player──▶ Playing
/// Playing ──guess (wrong, 6th)──▶ Lost
/// Playing ──guess (covers the word)──▶ Won
/// Playing ──guess (otherwise)──▶ Playing
/// {Playing, Won, Lost} ──return_to_menu──▶ Menu
/// {Won, Lost} ──start_single_player──▶ Playing   (play again)
/// ```

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::words;

/// A round is lost on the sixth wrong guess.
pub const MAX_WRONG: u8 = 6;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Menu,
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("word and category must both be non-empty")]
    InvalidSetup,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    /// Secret word, uppercase. Immutable until the next round starts.
    pub word: String,
    /// Display label for the round, uppercase.
    pub category: String,
    /// Guessed letters, uppercase A–Z. Grows monotonically per round.
    pub guessed: HashSet<char>,
    /// Wrong guesses so far, in [0, MAX_WRONG].
    pub wrong_attempts: u8,
    pub phase: Phase,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            word: String::new(),
            category: String::new(),
            guessed: HashSet::new(),
            wrong_attempts: 0,
            phase: Phase::Menu,
        }
    }

    /// Replace the whole session with a fresh Playing round.
    fn begin_round(&mut self, word: String, category: String) {
        *self = GameSession {
            word,
            category,
            guessed: HashSet::new(),
            wrong_attempts: 0,
            phase: Phase::Playing,
        };
    }

    /// Start a single-player round with a word drawn from the Word Bank.
    /// Always succeeds; the bank is non-empty by construction.
    pub fn start_single_player<R: Rng>(&mut self, rng: &mut R) {
        let (category, word) = words::pick_random_word(rng);
        self.begin_round(word.to_string(), category.to_uppercase());
    }

    /// Start a two-player round from the setup dialog's raw input.
    /// Both fields must be non-empty after trimming; on failure no state
    /// changes and the caller keeps the dialog open.
    pub fn start_two_player(&mut self, raw_word: &str, raw_category: &str) -> Result<(), SetupError> {
        let word = raw_word.trim();
        let category = raw_category.trim();
        if word.is_empty() || category.is_empty() {
            return Err(SetupError::InvalidSetup);
        }
        self.begin_round(word.to_uppercase(), category.to_uppercase());
        Ok(())
    }

    /// Register a letter guess. Canonicalizes to uppercase at entry;
    /// ignored outside Playing, for non-letters, and for repeats.
    pub fn guess(&mut self, letter: char) {
        if self.phase != Phase::Playing {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        if !self.guessed.insert(letter) {
            return;
        }

        if !self.word.contains(letter) {
            self.wrong_attempts += 1;
            if self.wrong_attempts >= MAX_WRONG {
                self.phase = Phase::Lost;
            }
        } else if self.word.chars().all(|c| self.guessed.contains(&c)) {
            self.phase = Phase::Won;
        }
    }

    /// Back to the menu from any phase. The stale word/category stay
    /// behind; they are irrelevant until the next round replaces them.
    pub fn return_to_menu(&mut self) {
        self.phase = Phase::Menu;
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// The word with unguessed characters masked as '_'.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn playing(word: &str) -> GameSession {
        let mut s = GameSession::new();
        s.start_two_player(word, "test").unwrap();
        s
    }

    // ── Round setup ──

    #[test]
    fn two_player_setup_normalizes_and_resets() {
        let mut s = GameSession::new();
        s.start_two_player("hello", "greeting").unwrap();
        assert_eq!(s.word, "HELLO");
        assert_eq!(s.category, "GREETING");
        assert!(s.guessed.is_empty());
        assert_eq!(s.wrong_attempts, 0);
        assert_eq!(s.phase, Phase::Playing);
    }

    #[test]
    fn two_player_setup_trims_surrounding_whitespace() {
        let mut s = GameSession::new();
        s.start_two_player("  cat  ", " pets ").unwrap();
        assert_eq!(s.word, "CAT");
        assert_eq!(s.category, "PETS");
    }

    #[test]
    fn blank_word_is_rejected_without_transition() {
        let mut s = GameSession::new();
        assert_eq!(s.start_two_player("", "anything"), Err(SetupError::InvalidSetup));
        assert_eq!(s.phase, Phase::Menu);
    }

    #[test]
    fn whitespace_category_is_rejected_without_transition() {
        let mut s = GameSession::new();
        assert_eq!(s.start_two_player("word", "   "), Err(SetupError::InvalidSetup));
        assert_eq!(s.phase, Phase::Menu);
    }

    #[test]
    fn single_player_draws_from_the_bank() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut s = GameSession::new();
            s.start_single_player(&mut rng);
            assert_eq!(s.phase, Phase::Playing);
            assert!(s.guessed.is_empty());
            assert_eq!(s.wrong_attempts, 0);
            let entry = words::CATEGORIES
                .iter()
                .find(|(c, _)| c.to_uppercase() == s.category)
                .expect("category not in bank");
            assert!(entry.1.contains(&s.word.as_str()));
        }
    }

    // ── Guessing ──

    #[test]
    fn win_scenario_cat() {
        let mut s = playing("CAT");
        s.guess('C');
        assert_eq!(s.phase, Phase::Playing);
        s.guess('A');
        assert_eq!(s.phase, Phase::Playing);
        s.guess('T');
        assert_eq!(s.phase, Phase::Won);
        assert_eq!(s.wrong_attempts, 0);
    }

    #[test]
    fn loss_scenario_dog() {
        let mut s = playing("DOG");
        for (i, letter) in ['X', 'Q', 'Z', 'B', 'F', 'H'].into_iter().enumerate() {
            assert_eq!(s.phase, Phase::Playing, "lost before guess {}", i + 1);
            s.guess(letter);
            assert_eq!(s.wrong_attempts, i as u8 + 1);
        }
        assert_eq!(s.phase, Phase::Lost);
        assert_eq!(s.wrong_attempts, MAX_WRONG);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut s = playing("CAT");
        s.guess('c');
        s.guess('a');
        s.guess('t');
        assert_eq!(s.phase, Phase::Won);
    }

    #[test]
    fn repeat_guess_is_a_no_op() {
        let mut s = playing("DOG");
        s.guess('X');
        let after_once = (s.wrong_attempts, s.guessed.clone(), s.phase);
        s.guess('X');
        assert_eq!((s.wrong_attempts, s.guessed.clone(), s.phase), after_once);
        // Correct letters too: no double win-check side effects.
        s.guess('D');
        s.guess('d');
        assert_eq!(s.wrong_attempts, 1);
    }

    #[test]
    fn non_letter_input_is_ignored() {
        let mut s = playing("DOG");
        s.guess('3');
        s.guess(' ');
        s.guess('!');
        assert!(s.guessed.is_empty());
        assert_eq!(s.wrong_attempts, 0);
    }

    #[test]
    fn guesses_after_loss_are_ignored() {
        let mut s = playing("DOG");
        for letter in ['X', 'Q', 'Z', 'B', 'F', 'H'] {
            s.guess(letter);
        }
        s.guess('D');
        s.guess('J');
        assert_eq!(s.phase, Phase::Lost);
        assert_eq!(s.wrong_attempts, MAX_WRONG);
        assert!(!s.guessed.contains(&'D'));
    }

    #[test]
    fn guesses_after_win_are_ignored() {
        let mut s = playing("A");
        s.guess('A');
        assert_eq!(s.phase, Phase::Won);
        s.guess('Z');
        assert_eq!(s.phase, Phase::Won);
        assert_eq!(s.wrong_attempts, 0);
    }

    #[test]
    fn wrong_guesses_before_the_last_letter_do_not_lose_a_winnable_round() {
        // Five wrong, then finish the word: win on the same turn the
        // word is covered, never Lost.
        let mut s = playing("GO");
        for letter in ['X', 'Q', 'Z', 'B', 'F'] {
            s.guess(letter);
        }
        s.guess('G');
        s.guess('O');
        assert_eq!(s.phase, Phase::Won);
        assert_eq!(s.wrong_attempts, 5);
    }

    // ── Navigation ──

    #[test]
    fn return_to_menu_works_from_any_phase() {
        let mut s = playing("CAT");
        s.return_to_menu();
        assert_eq!(s.phase, Phase::Menu);

        let mut s = playing("A");
        s.guess('A');
        s.return_to_menu();
        assert_eq!(s.phase, Phase::Menu);
    }

    #[test]
    fn play_again_replaces_a_finished_round() {
        let mut s = playing("A");
        s.guess('A');
        assert_eq!(s.phase, Phase::Won);

        let mut rng = StdRng::seed_from_u64(9);
        s.start_single_player(&mut rng);
        assert_eq!(s.phase, Phase::Playing);
        assert!(s.guessed.is_empty());
        assert_eq!(s.wrong_attempts, 0);
    }

    // ── Display helpers ──

    #[test]
    fn masked_word_reveals_only_guessed_letters() {
        let mut s = playing("HELLO");
        assert_eq!(s.masked_word(), "_____");
        s.guess('L');
        assert_eq!(s.masked_word(), "__LL_");
        s.guess('H');
        assert_eq!(s.masked_word(), "H_LL_");
    }

    #[test]
    fn is_guessed_is_case_insensitive() {
        let mut s = playing("CAT");
        s.guess('c');
        assert!(s.is_guessed('C'));
        assert!(s.is_guessed('c'));
        assert!(!s.is_guessed('a'));
    }
}
