use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::game::{GameStatus, PuzzleGame};

pub const DEFAULT_MAX_WRONG: u8 = 6;

/// Letters offered on the on-screen keyboard
pub const ALPHABET: &str = "آابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی";

/// Physics vocabulary, each word paired with its hint
pub const VOCABULARY: [(&str, &str); 12] = [
    ("چگالی", "جرم در واحد حجم"),
    ("دماسنج", "وسیله اندازه‌گیری گرما"),
    ("پتانسیل", "نوعی انرژی ذخیره شده"),
    ("جابجایی", "فاصله مستقیم مبدا تا مقصد"),
    ("دقت", "نزدیکی اندازه‌گیری به مقدار واقعی"),
    ("فشار", "نیرو بر واحد سطح"),
    ("پاسکال", "یکای فشار در SI"),
    ("ترمودینامیک", "علم مطالعه گرما و کار"),
    ("کلوین", "یکای مطلق دما"),
    ("توان", "آهنگ انجام کار"),
    ("بازده", "نسبت انرژی مفید به کل"),
    ("ارشمیدس", "دانشمندی که نیروی شناوری را کشف کرد"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HangmanState {
    pub word: String,
    pub hint: String,
    pub guessed: BTreeSet<char>,
    pub wrong_count: u8,
    pub max_wrong: u8,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanInput {
    Guess(char),
}

impl HangmanState {
    pub fn new(word: &str, hint: &str, max_wrong: u8) -> Self {
        Self {
            word: word.to_string(),
            hint: hint.to_string(),
            guessed: BTreeSet::new(),
            wrong_count: 0,
            max_wrong,
            status: GameStatus::Playing,
        }
    }

    /// The word with unguessed letters hidden; fully revealed once lost.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.status == GameStatus::Lost || self.guessed.contains(&c) { c } else { '_' }
            })
            .collect()
    }

    pub fn remaining_tries(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    fn is_word_complete(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn guess(&mut self, letter: char) -> GameStatus {
        if self.status.is_terminal() || !self.guessed.insert(letter) {
            return self.status;
        }

        if !self.word.contains(letter) {
            self.wrong_count += 1;
            if self.wrong_count >= self.max_wrong {
                self.status = GameStatus::Lost;
                info!(word = %self.word, "hangman lost");
            }
        } else if self.is_word_complete() {
            self.status = GameStatus::Won;
            info!(word = %self.word, wrong = self.wrong_count, "hangman won");
        }
        self.status
    }

    /// Keyboard letters not used yet
    pub fn available_letters(&self) -> impl Iterator<Item = char> + '_ {
        ALPHABET.chars().filter(|c| !self.guessed.contains(c))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HangmanSettings {
    pub max_wrong: u8,
}

impl Default for HangmanSettings {
    fn default() -> Self {
        Self { max_wrong: DEFAULT_MAX_WRONG }
    }
}

/// Pure game implementation - no UI concerns
#[derive(Clone)]
pub struct HangmanGame;

impl PuzzleGame for HangmanGame {
    type State = HangmanState;
    type Input = HangmanInput;
    type Settings = HangmanSettings;

    const NAME: &'static str = "Word Guess";
    const DESCRIPTION: &'static str = "Guess the hidden physics word letter by letter";

    fn new_game<R: Rng + ?Sized>(settings: &Self::Settings, rng: &mut R) -> Self::State {
        let (word, hint) = VOCABULARY.choose(rng).copied().unwrap_or(VOCABULARY[0]);
        HangmanState::new(word, hint, settings.max_wrong.max(1))
    }

    fn handle_input(state: &mut Self::State, input: Self::Input) -> GameStatus {
        match input {
            HangmanInput::Guess(letter) => state.guess(letter),
        }
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn distinct_letters(word: &str) -> Vec<char> {
        let set: BTreeSet<char> = word.chars().collect();
        set.into_iter().collect()
    }

    fn wrong_letters(word: &str) -> Vec<char> {
        ALPHABET.chars().filter(|c| !word.contains(*c)).collect()
    }

    #[test]
    fn vocabulary_uses_keyboard_letters_only() {
        for (word, _) in VOCABULARY {
            assert!(word.chars().all(|c| ALPHABET.contains(c)), "{word}");
        }
    }

    #[test]
    fn new_game_picks_from_vocabulary() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = HangmanGame::new_game(&HangmanSettings::default(), &mut rng);
        assert!(VOCABULARY.iter().any(|(w, h)| *w == state.word && *h == state.hint));
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.wrong_count, 0);
        assert!(state.guessed.is_empty());
    }

    #[test]
    fn guessing_every_letter_wins_in_any_order() {
        let word = "ترمودینامیک";
        let mut forward = HangmanState::new(word, "", DEFAULT_MAX_WRONG);
        let mut backward = HangmanState::new(word, "", DEFAULT_MAX_WRONG);
        let letters = distinct_letters(word);

        for &c in &letters {
            forward.guess(c);
        }
        for &c in letters.iter().rev() {
            backward.guess(c);
        }
        assert_eq!(forward.status, GameStatus::Won);
        assert_eq!(backward.status, GameStatus::Won);
        assert_eq!(forward.masked_word(), word);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut state = HangmanState::new("فشار", "", DEFAULT_MAX_WRONG);
        let wrong = wrong_letters("فشار");
        for (n, &c) in wrong.iter().take(6).enumerate() {
            let status = state.guess(c);
            if n < 5 {
                assert_eq!(status, GameStatus::Playing);
            }
        }
        assert_eq!(state.status, GameStatus::Lost);
        assert!(HangmanGame::is_lost(&state));
        assert_eq!(state.masked_word(), "فشار");
    }

    #[test]
    fn repeated_guess_is_ignored() {
        let mut state = HangmanState::new("دقت", "", DEFAULT_MAX_WRONG);
        let wrong = wrong_letters("دقت")[0];
        state.guess(wrong);
        state.guess(wrong);
        assert_eq!(state.wrong_count, 1);
        assert_eq!(state.remaining_tries(), 5);
    }

    #[test]
    fn terminal_state_rejects_guesses() {
        let mut state = HangmanState::new("توان", "", DEFAULT_MAX_WRONG);
        for c in distinct_letters("توان") {
            state.guess(c);
        }
        assert_eq!(state.status, GameStatus::Won);

        let before = state.guessed.clone();
        state.guess(wrong_letters("توان")[0]);
        assert_eq!(state.guessed, before);
        assert_eq!(state.wrong_count, 0);
    }

    #[test]
    fn letters_off_the_keyboard_count_as_wrong() {
        let mut state = HangmanState::new("توان", "", DEFAULT_MAX_WRONG);
        assert_eq!(state.guess('x'), GameStatus::Playing);
        assert!(state.guessed.contains(&'x'));
        assert_eq!(state.wrong_count, 1);

        state.guess('x');
        assert_eq!(state.wrong_count, 1);
    }

    #[test]
    fn masked_word_hides_unguessed() {
        let mut state = HangmanState::new("دقت", "", DEFAULT_MAX_WRONG);
        state.guess('ق');
        assert_eq!(state.masked_word(), "_ق_");
    }
}
