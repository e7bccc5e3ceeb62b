use alloc::vec::Vec;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement, every set of `mines` distinct cells is equally likely.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    /// Deterministic generator, the same seed always yields the same layouts.
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;

        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Default for RandomMineGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        use rand::Rng;

        let total_cells = config.total_cells() as usize;
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        if config.mines as usize > total_cells {
            log::warn!(
                "Board already full, generated anyway, requested {} but only fits {}",
                config.mines,
                total_cells
            );
        }
        let mines = (config.mines as usize).min(total_cells);

        // partial Fisher-Yates: the first `mines` slots end up a uniform sample
        let mut positions: Vec<usize> = (0..total_cells).collect();
        for i in 0..mines {
            let j = self.rng.random_range(i..total_cells);
            positions.swap(i, j);
        }

        let columns = usize::from(config.columns());
        for &position in &positions[..mines] {
            mine_mask[[position / columns, position % columns]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::trace!(
            "Generated {} mines on a {}x{} board",
            layout.mine_count(),
            config.rows(),
            config.columns()
        );
        layout
    }
}
