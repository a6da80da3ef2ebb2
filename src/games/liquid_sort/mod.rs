/// Liquid sort: capacity-bounded tube stacks poured one unit at a time
pub mod game;
pub mod renderer;

pub use game::{Liquid, LiquidSortGame, LiquidSortInput, LiquidSortState};
pub use renderer::LiquidSortView;
