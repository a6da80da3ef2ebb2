use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::game::{GameStatus, PuzzleGame};

/// Lab equipment icons; each appears exactly twice in a deck
pub const ICONS: [&str; 8] = ["⚛️", "🔭", "🔋", "💡", "🧲", "🧪", "📐", "🛡️"];
pub const DECK_SIZE: usize = ICONS.len() * 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    pub id: usize,
    pub icon: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

/// A revealed pair waiting for its display delay to run out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    pub matched: bool,
    pub remaining_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryState {
    pub cards: Vec<MemoryCard>,
    /// Face-up, unresolved cards; never more than two
    pub flipped_indices: Vec<usize>,
    pub moves: u32,
    pub pending: Option<PendingResolution>,
    pub status: GameStatus,
    match_delay_ms: u64,
    mismatch_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryInput {
    Flip(usize),
}

impl MemoryState {
    pub fn new<R: Rng + ?Sized>(settings: &MemorySettings, rng: &mut R) -> Self {
        let mut icons: Vec<&str> = ICONS.iter().chain(ICONS.iter()).copied().collect();
        icons.shuffle(rng);

        let cards = icons
            .into_iter()
            .enumerate()
            .map(|(id, icon)| MemoryCard {
                id,
                icon: icon.to_string(),
                is_flipped: false,
                is_matched: false,
            })
            .collect();

        Self::from_cards(cards, settings)
    }

    /// Build a round from a fixed layout
    pub fn from_cards(cards: Vec<MemoryCard>, settings: &MemorySettings) -> Self {
        Self {
            cards,
            flipped_indices: Vec::with_capacity(2),
            moves: 0,
            pending: None,
            status: GameStatus::Playing,
            match_delay_ms: settings.match_delay_ms,
            mismatch_delay_ms: settings.mismatch_delay_ms,
        }
    }

    pub fn flip_card(&mut self, index: usize) -> GameStatus {
        if self.flipped_indices.len() == 2 {
            return self.status;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return self.status;
        };
        if card.is_flipped || card.is_matched {
            return self.status;
        }

        card.is_flipped = true;
        self.flipped_indices.push(index);

        if let [first, second] = self.flipped_indices[..] {
            self.moves += 1;
            let matched = self.cards[first].icon == self.cards[second].icon;
            let remaining_ms = if matched { self.match_delay_ms } else { self.mismatch_delay_ms };
            debug!(first, second, matched, moves = self.moves, "pair revealed");
            self.pending = Some(PendingResolution { matched, remaining_ms });
        }
        self.status
    }

    /// Count the pending delay down and resolve the pair once it expires.
    pub fn advance(&mut self, dt_ms: u64) -> GameStatus {
        if let Some(pending) = self.pending.as_mut() {
            pending.remaining_ms = pending.remaining_ms.saturating_sub(dt_ms);
            if pending.remaining_ms == 0 {
                return self.resolve_pending();
            }
        }
        self.status
    }

    /// Resolve a revealed pair right away, skipping its display delay.
    pub fn resolve_pending(&mut self) -> GameStatus {
        let Some(pending) = self.pending.take() else {
            return self.status;
        };

        for index in self.flipped_indices.drain(..) {
            let card = &mut self.cards[index];
            if pending.matched {
                card.is_matched = true;
            } else {
                card.is_flipped = false;
            }
        }

        if pending.matched && self.cards.iter().all(|c| c.is_matched) {
            self.status = GameStatus::Won;
            info!(moves = self.moves, "memory deck cleared");
        }
        self.status
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemorySettings {
    pub match_delay_ms: u64,
    pub mismatch_delay_ms: u64,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
        }
    }
}

#[derive(Clone)]
pub struct MemoryGame;

impl PuzzleGame for MemoryGame {
    type State = MemoryState;
    type Input = MemoryInput;
    type Settings = MemorySettings;

    const NAME: &'static str = "Memory Match";
    const DESCRIPTION: &'static str = "Find the eight pairs of lab equipment";

    fn new_game<R: Rng + ?Sized>(settings: &Self::Settings, rng: &mut R) -> Self::State {
        MemoryState::new(settings, rng)
    }

    fn handle_input(state: &mut Self::State, input: Self::Input) -> GameStatus {
        match input {
            MemoryInput::Flip(index) => state.flip_card(index),
        }
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }

    fn on_tick(state: &mut Self::State, dt_ms: u64) {
        state.advance(dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fresh(seed: u64) -> MemoryState {
        let mut rng = StdRng::seed_from_u64(seed);
        MemoryGame::new_game(&MemorySettings::default(), &mut rng)
    }

    fn pair_of(state: &MemoryState, icon: &str) -> (usize, usize) {
        let found: Vec<usize> = state
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.icon == icon)
            .map(|(i, _)| i)
            .collect();
        (found[0], found[1])
    }

    fn mismatched(state: &MemoryState) -> (usize, usize) {
        let other = state.cards.iter().position(|c| c.icon != state.cards[0].icon).unwrap();
        (0, other)
    }

    #[test]
    fn fresh_deck_has_every_icon_twice() {
        let state = fresh(11);
        assert_eq!(state.cards.len(), DECK_SIZE);
        for icon in ICONS {
            assert_eq!(state.cards.iter().filter(|c| c.icon == icon).count(), 2);
        }
        assert!(state.cards.iter().all(|c| !c.is_flipped && !c.is_matched));
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn different_seeds_deal_different_decks() {
        let deal = |seed| fresh(seed).cards.into_iter().map(|c| c.icon).collect::<Vec<_>>();
        let decks: std::collections::HashSet<Vec<String>> = (0..8).map(deal).collect();
        assert!(decks.len() > 1);

        let unshuffled: Vec<String> = ICONS.iter().chain(ICONS.iter()).map(|i| i.to_string()).collect();
        assert!(!decks.contains(&unshuffled));
    }

    #[test]
    fn matching_pair_resolves_after_delay() {
        let mut state = fresh(12);
        let (a, b) = pair_of(&state, ICONS[3]);

        state.flip_card(a);
        assert_eq!(state.moves, 0);
        state.flip_card(b);
        assert_eq!(state.moves, 1);
        assert!(state.pending.is_some());

        state.advance(499);
        assert!(!state.cards[a].is_matched);
        state.advance(1);
        assert!(state.cards[a].is_matched && state.cards[b].is_matched);
        assert!(state.flipped_indices.is_empty());
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn mismatch_flips_back() {
        let mut state = fresh(13);
        let (a, b) = mismatched(&state);

        state.flip_card(a);
        state.flip_card(b);
        state.advance(999);
        assert!(state.cards[a].is_flipped);
        state.advance(1);
        assert!(!state.cards[a].is_flipped && !state.cards[b].is_flipped);
        assert!(!state.cards[a].is_matched);
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn third_flip_waits_for_resolution() {
        let mut state = fresh(14);
        let (a, b) = mismatched(&state);
        let third = (0..DECK_SIZE).find(|&i| i != a && i != b).unwrap();

        state.flip_card(a);
        state.flip_card(b);
        state.flip_card(third);
        assert!(!state.cards[third].is_flipped);
        assert_eq!(state.flipped_indices.len(), 2);

        state.resolve_pending();
        state.flip_card(third);
        assert!(state.cards[third].is_flipped);
    }

    #[test]
    fn flipped_and_matched_cards_are_not_reflippable() {
        let mut state = fresh(15);
        let (a, b) = pair_of(&state, ICONS[0]);

        state.flip_card(a);
        state.flip_card(a);
        assert_eq!(state.flipped_indices, vec![a]);

        state.flip_card(b);
        state.resolve_pending();
        state.flip_card(a);
        assert!(state.flipped_indices.is_empty());
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn clearing_every_pair_wins() {
        let mut state = fresh(16);
        for icon in ICONS {
            let (a, b) = pair_of(&state, icon);
            state.flip_card(a);
            state.flip_card(b);
            state.resolve_pending();
        }
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.moves, ICONS.len() as u32);
    }
}
