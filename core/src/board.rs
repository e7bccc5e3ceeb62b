use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Playing, on the first in-range uncover or mark
/// - Playing -> Lose, when a mine is uncovered
/// - Playing -> Win, when [`Board::check_game_result`] finds every mine flagged and nothing covered
///
/// The board does not reject moves once a final state is reached, callers are expected to stop sending them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Win,
    Lose,
}

impl GameStatus {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Grid of cells plus the overall game status.
///
/// Serializes for snapshots only, a board is always built through its constructors.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    total_mines: CellCount,
    marked_mines: Saturating<CellCount>,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Empty 0x0 board, call [`Board::init`] before playing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with a fixed mine layout.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = layout.game_config()?;
        let mut board = Self::new();
        board.reset(config, &layout);
        Ok(board)
    }

    /// Starts a new game with randomly placed mines, replacing the whole board.
    pub fn init(&mut self, rows: Coord, columns: Coord, mines: CellCount) -> Result<()> {
        let config = GameConfig::new(rows, columns, mines)?;
        self.init_with(config, RandomMineGenerator::from_entropy())
    }

    /// Starts a new game with mines placed by `generator`.
    pub fn init_with(&mut self, config: GameConfig, mut generator: impl MineGenerator) -> Result<()> {
        let config = GameConfig::new(config.rows(), config.columns(), config.mines)?;
        let layout = generator.generate(config);

        if !layout.matches(&config) {
            log::warn!(
                "Generated layout mismatch, actual: {:?} with {} mines, requested: {:?} with {}",
                layout.size(),
                layout.mine_count(),
                config.size,
                config.mines
            );
            return Err(GameError::LayoutMismatch);
        }

        self.reset(config, &layout);
        Ok(())
    }

    fn reset(&mut self, config: GameConfig, layout: &MineLayout) {
        self.cells = Array2::from_shape_fn(config.size.to_nd_index(), |(row, col)| {
            // dimensions came from Coord values
            let coords = (row as Coord, col as Coord);
            Cell::new(layout[coords], layout.adjacent_mine_count(coords))
        });
        self.total_mines = config.mines;
        self.marked_mines = Saturating(0);
        self.status = GameStatus::NotStarted;
        self.triggered_mine = None;

        log::debug!(
            "New board {}x{} with {} mines",
            config.rows(),
            config.columns(),
            config.mines
        );
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(columns).unwrap_or(Coord::MAX),
        )
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn marked_mines(&self) -> CellCount {
        self.marked_mines.0
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.total_mines) - i64::from(self.marked_mines.0)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_final()
    }

    /// First mine that exploded since the board was initialized.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn covered_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.status == CellStatus::Covered)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Whether [`Board::uncover_nearby`] would open the neighbors of `coords`.
    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        match self.cell_at(coords) {
            Some(Cell {
                status: CellStatus::Uncovered,
                nearby_mines,
                ..
            }) if nearby_mines > 0 => nearby_mines == self.count_marked_neighbors(coords),
            _ => false,
        }
    }

    /// Opens a covered cell, flood-filling through cells with no adjacent mines.
    ///
    /// Out of range coordinates and cells that are not covered are left alone, flags have to be cleared with
    /// [`Board::change_mark`] first.
    pub fn uncover(&mut self, coords: Coord2) -> RevealOutcome {
        use CellStatus::*;

        let Some(coords) = self.checked(coords) else {
            return RevealOutcome::NoChange;
        };
        self.mark_started();

        let cell = self.cells[coords.to_nd_index()];
        if cell.status != Covered {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine {
            self.cells[coords.to_nd_index()].status = Exploded;
            self.triggered_mine.get_or_insert(coords);
            self.status = GameStatus::Lose;
            log::debug!("Mine exploded at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        self.cells[coords.to_nd_index()].status = Uncovered;
        if cell.nearby_mines == 0 {
            self.flood_fill(coords);
        }
        RevealOutcome::Revealed
    }

    /// Uncovers the zero region around `start`, which must already be uncovered.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit: Vec<Coord2> = Vec::from([start]);
        let mut opened: CellCount = 0;

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.cells.iter_neighbors(visit_coords) {
                let neighbor = &mut self.cells[pos.to_nd_index()];
                // flags and opened cells stop the fill, zero cells never border a mine
                if neighbor.status != CellStatus::Covered {
                    continue;
                }

                neighbor.status = CellStatus::Uncovered;
                opened += 1;
                if neighbor.nearby_mines == 0 {
                    to_visit.push(pos);
                }
            }
        }

        log::trace!("Flood opened {} cells from {:?}", opened, start);
    }

    /// Cycles the mark on a covered cell: none, mine flag, doubt, none.
    pub fn change_mark(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(coords) = self.checked(coords) else {
            return MarkOutcome::NoChange;
        };
        self.mark_started();

        let cell = &mut self.cells[coords.to_nd_index()];
        let Some(next) = cell.status.next_mark() else {
            return MarkOutcome::NoChange;
        };

        // a doubt mark keeps the count taken by the flag before it
        match next {
            CellStatus::MarkMine => self.marked_mines += 1,
            CellStatus::Covered => self.marked_mines -= 1,
            _ => {}
        }
        cell.status = next;

        MarkOutcome::Changed
    }

    /// Chord: opens every neighbor of an uncovered number once exactly that many neighbors are flagged.
    ///
    /// Anything else is silently ignored.
    pub fn uncover_nearby(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.can_chord_at(coords) {
            log::trace!("Chord at {:?} ignored", coords);
            return RevealOutcome::NoChange;
        }

        self.cells
            .iter_neighbors(coords)
            .map(|neighbor_coords| self.uncover(neighbor_coords))
            .fold(RevealOutcome::NoChange, core::ops::BitOr::bitor)
    }

    /// Declares the game won once every mine is flagged and no cell is left covered.
    ///
    /// Not called by any mutation, callers run it after each move. Never detects a loss.
    pub fn check_game_result(&mut self) -> GameStatus {
        if self.cells.is_empty() || self.marked_mines.0 != self.total_mines {
            return self.status;
        }

        if self
            .cells
            .iter()
            .all(|cell| cell.status != CellStatus::Covered)
        {
            if self.status != GameStatus::Win {
                log::debug!("Board cleared with {} mines flagged", self.total_mines);
            }
            self.status = GameStatus::Win;
        }

        self.status
    }

    fn checked(&self, coords: Coord2) -> Option<Coord2> {
        checked_coords(coords, self.size())
    }

    fn mark_started(&mut self) {
        if matches!(self.status, GameStatus::NotStarted) {
            self.status = GameStatus::Playing;
        }
    }

    fn count_marked_neighbors(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].status == CellStatus::MarkMine)
            .count() as u8
    }
}

impl core::ops::Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
