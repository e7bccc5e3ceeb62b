use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Returns `coords` only when it lies inside a board of `size`.
pub const fn checked_coords(coords: Coord2, size: Coord2) -> Option<Coord2> {
    if coords.0 < size.0 && coords.1 < size.1 {
        Some(coords)
    } else {
        None
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, columns) = self.dim();
        let size = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(columns).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Moore neighborhood, row-major.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i16, i16), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    let next_col = col.checked_add_signed(d_col)?;

    checked_coords((next_row, next_col), bounds)
}

/// Iterates the in-bounds cells of the 8-neighborhood around a center cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbor_count_depends_on_position() {
        let bounds = (3, 4);

        assert_eq!(NeighborIter::new((0, 0), bounds).count(), 3);
        assert_eq!(NeighborIter::new((0, 1), bounds).count(), 5);
        assert_eq!(NeighborIter::new((1, 1), bounds).count(), 8);
        assert_eq!(NeighborIter::new((2, 3), bounds).count(), 3);
    }

    #[test]
    fn neighbors_exclude_center_and_stay_in_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((0, 1), (2, 2)).collect();

        assert_eq!(neighbors, [(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn checked_coords_rejects_edges() {
        assert_eq!(checked_coords((1, 1), (2, 2)), Some((1, 1)));
        assert_eq!(checked_coords((2, 0), (2, 2)), None);
        assert_eq!(checked_coords((0, 2), (2, 2)), None);
        assert_eq!(checked_coords((0, 0), (0, 0)), None);
    }
}
