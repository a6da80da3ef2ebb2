/// Memory match: shuffled pairs with a two-phase reveal/resolve cycle
pub mod game;
pub mod renderer;

pub use game::{MemoryCard, MemoryGame, MemoryInput, MemorySettings, MemoryState};
pub use renderer::MemoryView;
