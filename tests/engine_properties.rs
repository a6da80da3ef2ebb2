//! Property tests for the four puzzle engines

use std::collections::{BTreeSet, HashMap};

use lab_arcade::games::hangman::game::{HangmanState, ALPHABET, VOCABULARY};
use lab_arcade::games::liquid_sort::game::{Liquid, LiquidSortState, TUBE_CAPACITY};
use lab_arcade::games::memory::game::{MemoryState, DECK_SIZE, ICONS};
use lab_arcade::games::memory::MemorySettings;
use lab_arcade::games::sudoku::game::{SudokuPuzzle, SudokuState, CELLS};
use lab_arcade::{GameStatus, PuzzleGame};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

proptest! {
    #[test]
    fn sudoku_puzzles_are_consistent(seed in any::<u64>(), attempts in 0usize..120) {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = SudokuPuzzle::generate_with_blanks(&mut rng, attempts);

        prop_assert!(SudokuPuzzle::is_valid_solution(&puzzle.solved));
        for i in 0..CELLS {
            prop_assert!(puzzle.puzzle[i] == 0 || puzzle.puzzle[i] == puzzle.solved[i]);
        }
        let blanks = puzzle.puzzle.iter().filter(|&&v| v == 0).count();
        prop_assert!(blanks <= attempts);
    }

    #[test]
    fn sudoku_grids_vary_with_the_seed(seed in any::<u64>()) {
        let grids: BTreeSet<Vec<u8>> = (0..8)
            .map(|offset| SudokuPuzzle::generate(&mut StdRng::seed_from_u64(seed.wrapping_add(offset))).solved)
            .collect();
        prop_assert!(grids.len() > 1);
    }

    #[test]
    fn sudoku_wins_exactly_on_solution(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SudokuState::new(SudokuPuzzle::generate(&mut rng));
        let blanks: Vec<usize> = (0..CELLS).filter(|&i| !state.is_given(i)).collect();

        for (n, &i) in blanks.iter().enumerate() {
            let digit = state.puzzle.solved[i];
            state.select_cell(i);
            let status = state.enter_digit(digit);
            let expected = if n + 1 == blanks.len() { GameStatus::Won } else { GameStatus::Playing };
            prop_assert_eq!(status, expected);
        }
    }

    #[test]
    fn memory_deck_holds_pairs(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = MemoryState::new(&MemorySettings::default(), &mut rng);

        prop_assert_eq!(state.cards.len(), DECK_SIZE);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in &state.cards {
            *counts.entry(card.icon.as_str()).or_default() += 1;
            prop_assert!(!card.is_flipped && !card.is_matched);
        }
        prop_assert_eq!(counts.len(), ICONS.len());
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn memory_never_has_more_than_two_pending(seed in any::<u64>(), flips in proptest::collection::vec(0usize..DECK_SIZE, 0..80)) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = MemoryState::new(&MemorySettings::default(), &mut rng);

        for (n, index) in flips.into_iter().enumerate() {
            let moves = state.moves;
            state.flip_card(index);
            prop_assert!(state.flipped_indices.len() <= 2);
            prop_assert!(state.moves <= moves + 1);
            if n % 3 == 0 {
                state.advance(1000);
            }
        }
    }

    #[test]
    fn hangman_guessing_all_letters_wins(seed in any::<u64>(), pick in 0usize..VOCABULARY.len()) {
        let (word, hint) = VOCABULARY[pick];
        let mut letters: Vec<char> = word.chars().collect::<BTreeSet<_>>().into_iter().collect();
        letters.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut state = HangmanState::new(word, hint, 6);
        for c in letters {
            state.guess(c);
        }
        prop_assert_eq!(state.status, GameStatus::Won);
        prop_assert_eq!(state.wrong_count, 0);
    }

    #[test]
    fn hangman_terminal_states_are_final(pick in 0usize..VOCABULARY.len(), extra in proptest::collection::vec(any::<char>(), 0..20)) {
        let (word, hint) = VOCABULARY[pick];
        let mut state = HangmanState::new(word, hint, 6);
        for c in ALPHABET.chars().filter(|c| !word.contains(*c)).take(6) {
            state.guess(c);
        }
        prop_assert_eq!(state.status, GameStatus::Lost);

        let snapshot = (state.guessed.clone(), state.wrong_count);
        for c in extra.into_iter().chain(word.chars()) {
            state.guess(c);
        }
        prop_assert_eq!((state.guessed.clone(), state.wrong_count), snapshot);
        prop_assert_eq!(state.status, GameStatus::Lost);
    }

    #[test]
    fn liquid_sort_conserves_liquid(seed in any::<u64>(), clicks in proptest::collection::vec(0usize..8, 0..200)) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = LiquidSortState::new(&mut rng);

        for index in clicks {
            state.select_tube(index);
            prop_assert!(state.tubes.iter().all(|t| t.len() <= TUBE_CAPACITY));
            if let Some(selected) = state.selected_tube {
                prop_assert!(!state.tubes[selected].is_empty());
            }
            let total: usize = state.tubes.iter().map(Vec::len).sum();
            prop_assert_eq!(total, 16);
        }
    }
}

#[test]
fn liquid_sort_two_color_walkthrough() {
    use lab_arcade::games::liquid_sort::game::Liquid::{Mercury as L1, Water as L0};

    let mut state = LiquidSortState::from_tubes(vec![
        vec![L0, L0, L1, L1],
        vec![L1, L1, L0, L0],
        vec![],
        vec![],
    ]);

    state.select_tube(0);
    state.select_tube(2);
    assert_eq!(state.tubes, vec![vec![L0, L0, L1], vec![L1, L1, L0, L0], vec![L1], vec![]]);

    state.select_tube(0);
    state.select_tube(2);
    assert_eq!(state.tubes, vec![vec![L0, L0], vec![L1, L1, L0, L0], vec![L1, L1], vec![]]);

    for _ in 0..2 {
        state.select_tube(1);
        state.select_tube(3);
    }
    assert_eq!(state.tubes, vec![vec![L0, L0], vec![L1, L1], vec![L1, L1], vec![L0, L0]]);
    // Uniform but not full
    assert_eq!(state.status, GameStatus::Playing);

    for _ in 0..2 {
        state.select_tube(3);
        state.select_tube(0);
    }
    for _ in 0..2 {
        state.select_tube(2);
        state.select_tube(1);
    }
    assert_eq!(state.tubes, vec![vec![L0; 4], vec![L1; 4], vec![], vec![]]);
    assert_eq!(state.status, GameStatus::Won);
    assert!(lab_arcade::games::liquid_sort::LiquidSortGame::is_won(&state));
}

#[test]
fn liquid_sort_win_predicate() {
    use lab_arcade::games::liquid_sort::game::Liquid::{Mercury as B, Water as R};

    let sorted = LiquidSortState::from_tubes(vec![
        vec![R, R, R, R],
        vec![],
        vec![B, B, B, B],
        vec![],
        vec![],
        vec![],
    ]);
    assert_eq!(sorted.status, GameStatus::Won);

    let mixed = LiquidSortState::from_tubes(vec![vec![R, R, R, B]]);
    assert_eq!(mixed.status, GameStatus::Playing);
}
