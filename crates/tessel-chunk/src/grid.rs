use std::fmt;

use tessel_world::{ChunkCoord, Doodad};

use crate::ChunkError;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Walkability {
    #[default]
    Walkable = 0,
    NotWalkable = 1,
}

impl Walkability {
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Walkability::Walkable)
    }
}

/// `size x size` passability cells, addressed `[y][x]` and stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkabilityGrid {
    size: usize,
    cells: Vec<Walkability>,
}

impl WalkabilityGrid {
    /// An all-walkable grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Walkability::Walkable; size * size],
        }
    }

    /// Builds a grid with every non-walkable doodad marked.
    ///
    /// All doodads are bounds-checked before any cell is written, so an
    /// invalid list never yields a partially marked grid.
    pub fn from_doodads(
        coord: ChunkCoord,
        size: i32,
        doodads: &[Doodad],
    ) -> Result<Self, ChunkError> {
        if let Some((index, d)) = doodads
            .iter()
            .enumerate()
            .find(|(_, d)| d.x < 0 || d.y < 0 || d.x >= size || d.y >= size)
        {
            return Err(ChunkError::DoodadOutOfBounds {
                coord,
                index,
                x: d.x,
                y: d.y,
                size,
            });
        }
        let mut grid = Self::new(size.max(0) as usize);
        for d in doodads.iter().filter(|d| !d.walkable) {
            grid.set(d.x, d.y, Walkability::NotWalkable);
        }
        Ok(grid)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Walkability> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    #[inline]
    pub fn is_walkable(&self, x: i32, y: i32) -> Option<bool> {
        self.get(x, y).map(Walkability::is_walkable)
    }

    /// Returns false when `(x, y)` is out of range.
    pub fn set(&mut self, x: i32, y: i32, value: Walkability) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Walkability]> {
        // chunks_exact panics on 0
        self.cells.chunks_exact(self.size.max(1))
    }

    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Walkability::NotWalkable)
            .count()
    }
}

impl fmt::Display for WalkabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = if cell.is_walkable() { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
