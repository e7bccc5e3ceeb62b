use crate::*;
pub use random::*;

mod random;

/// Source of mine placements for a new board.
///
/// Implementations must return a layout of exactly `config.size` holding exactly `config.mines` mines.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> MineLayout;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        (**self).generate(config)
    }
}
