use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Covered,
    MarkDoubt,
    MarkMine,
    Uncovered,
    Exploded,
}

impl CellStatus {
    /// Uncovered and exploded cells never change again.
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Uncovered | Self::Exploded)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::MarkMine | Self::MarkDoubt)
    }

    /// Next status in the flag cycle, `None` for revealed cells.
    pub const fn next_mark(self) -> Option<Self> {
        match self {
            Self::Covered => Some(Self::MarkMine),
            Self::MarkMine => Some(Self::MarkDoubt),
            Self::MarkDoubt => Some(Self::Covered),
            Self::Uncovered | Self::Exploded => None,
        }
    }
}

/// Snapshot of one grid position.
///
/// `is_mine` and `nearby_mines` are fixed when the board is initialized, only `status` changes during play.
/// Whether to show `is_mine` before the game is lost is up to the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub status: CellStatus,
    pub is_mine: bool,
    pub nearby_mines: u8,
}

impl Cell {
    pub const fn new(is_mine: bool, nearby_mines: u8) -> Self {
        Self {
            status: CellStatus::Covered,
            is_mine,
            nearby_mines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cycle_returns_to_covered() {
        let mut status = CellStatus::Covered;
        let mut seen = [CellStatus::Covered; 3];

        for slot in &mut seen {
            status = status.next_mark().unwrap();
            *slot = status;
        }

        assert_eq!(
            seen,
            [
                CellStatus::MarkMine,
                CellStatus::MarkDoubt,
                CellStatus::Covered
            ]
        );
    }

    #[test]
    fn status_predicates() {
        assert!(CellStatus::Uncovered.is_revealed());
        assert!(CellStatus::Exploded.is_revealed());
        assert!(!CellStatus::Covered.is_revealed());
        assert!(!CellStatus::MarkMine.is_revealed());
        assert!(CellStatus::MarkDoubt.is_marked());
        assert!(!CellStatus::Uncovered.is_marked());
    }

    #[test]
    fn revealed_cells_have_no_mark() {
        assert_eq!(CellStatus::Uncovered.next_mark(), None);
        assert_eq!(CellStatus::Exploded.next_mark(), None);
    }

    #[test]
    fn snapshot_serializes_field_names() {
        let cell = Cell::new(false, 3);

        let json = serde_json::to_string(&cell).unwrap();

        assert_eq!(
            json,
            r#"{"status":"Covered","is_mine":false,"nearby_mines":3}"#
        );
    }
}
