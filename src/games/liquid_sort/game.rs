use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::game::{GameStatus, PuzzleGame};

pub const TUBE_CAPACITY: usize = 4;
pub const TUBE_COUNT: usize = 6;
/// Liquids used per round; the rest of `Liquid::ALL` is spare
pub const COLORS_IN_PLAY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Liquid {
    Water,
    Mercury,
    Oil,
    Plasma,
    Alcohol,
}

impl Liquid {
    pub const ALL: [Liquid; 5] = [
        Liquid::Water,
        Liquid::Mercury,
        Liquid::Oil,
        Liquid::Plasma,
        Liquid::Alcohol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Liquid::Water => "Water",
            Liquid::Mercury => "Mercury",
            Liquid::Oil => "Oil",
            Liquid::Plasma => "Plasma",
            Liquid::Alcohol => "Alcohol",
        }
    }
}

pub type Tube = Vec<Liquid>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidSortState {
    /// Each tube is a stack; the last element is the top
    pub tubes: Vec<Tube>,
    pub selected_tube: Option<usize>,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidSortInput {
    SelectTube(usize),
}

impl LiquidSortState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: Vec<Liquid> = Liquid::ALL[..COLORS_IN_PLAY]
            .iter()
            .flat_map(|&liquid| std::iter::repeat(liquid).take(TUBE_CAPACITY))
            .collect();
        pool.shuffle(rng);

        let mut tubes: Vec<Tube> = pool.chunks(TUBE_CAPACITY).map(<[Liquid]>::to_vec).collect();
        tubes.resize(TUBE_COUNT, Vec::new());
        Self::from_tubes(tubes)
    }

    /// Start from an arbitrary arrangement.
    pub fn from_tubes(tubes: Vec<Tube>) -> Self {
        let status = if Self::is_sorted(&tubes) { GameStatus::Won } else { GameStatus::Playing };
        Self {
            tubes,
            selected_tube: None,
            status,
        }
    }

    pub fn select_tube(&mut self, index: usize) -> GameStatus {
        if self.status.is_terminal() || index >= self.tubes.len() {
            return self.status;
        }

        match self.selected_tube {
            Some(source) if source == index => self.selected_tube = None,
            Some(source) => self.pour(source, index),
            None => {
                if !self.tubes[index].is_empty() {
                    self.selected_tube = Some(index);
                }
            }
        }
        self.status
    }

    /// True if the top unit of `source` may go onto `dest`.
    pub fn can_pour(&self, source: usize, dest: usize) -> bool {
        let (Some(from), Some(to)) = (self.tubes.get(source), self.tubes.get(dest)) else {
            return false;
        };
        let Some(top) = from.last() else {
            return false;
        };
        source != dest && to.len() < TUBE_CAPACITY && to.last().map_or(true, |t| t == top)
    }

    /// Move a single unit. A refused pour re-targets the selection at `dest`
    /// when it has liquid to offer.
    fn pour(&mut self, source: usize, dest: usize) {
        if !self.can_pour(source, dest) {
            self.selected_tube = if self.tubes[dest].is_empty() { None } else { Some(dest) };
            return;
        }

        if let Some(unit) = self.tubes[source].pop() {
            self.tubes[dest].push(unit);
            debug!(source, dest, liquid = unit.name(), "poured");
        }
        self.selected_tube = None;

        if Self::is_sorted(&self.tubes) {
            self.status = GameStatus::Won;
            info!("liquid sort complete");
        }
    }

    /// Every tube is empty, or full of a single liquid.
    pub fn is_sorted(tubes: &[Tube]) -> bool {
        tubes.iter().all(|tube| {
            tube.is_empty() || (tube.len() == TUBE_CAPACITY && tube.iter().all(|&l| l == tube[0]))
        })
    }
}

#[derive(Clone)]
pub struct LiquidSortGame;

impl PuzzleGame for LiquidSortGame {
    type State = LiquidSortState;
    type Input = LiquidSortInput;
    type Settings = ();

    const NAME: &'static str = "Liquid Lab";
    const DESCRIPTION: &'static str = "Pour the liquids until every tube holds one kind";

    fn new_game<R: Rng + ?Sized>(_settings: &Self::Settings, rng: &mut R) -> Self::State {
        LiquidSortState::new(rng)
    }

    fn handle_input(state: &mut Self::State, input: Self::Input) -> GameStatus {
        match input {
            LiquidSortInput::SelectTube(index) => state.select_tube(index),
        }
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }
}
