// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The character grid connectors are routed on.
//!
//! A [`Matrix`] only ever grows to the right. Any [`Vector`] computed before an expansion stays
//! valid (columns are appended), but cell references must be looked up again afterwards.

use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::model::Vector;

pub mod cell;
pub mod tracer;

pub use cell::{BoxEdges, Cell, Charset, Content, Direction, Glyph, RouteOwner};
pub use tracer::LineTracer;

/// Upper bound on the cells a matrix is allowed to allocate up front.
pub const MAX_MATRIX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("matrix area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: {position} for {width}x{height} matrix")]
    OutOfBounds {
        position: Vector,
        width: usize,
        height: usize,
    },
}

/// A named cell test evaluated by [`Matrix::ray_cast_vertical`].
pub struct Probe<'a> {
    name: &'static str,
    test: &'a dyn Fn(Vector, &Cell) -> bool,
}

impl<'a> Probe<'a> {
    pub fn new(name: &'static str, test: &'a dyn Fn(Vector, &Cell) -> bool) -> Self {
        Self { name, test }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// First cell a ray cast found a collision on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    pub position: Vector,
    pub probe: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Matrix {
    /// Creates an empty `width` x `height` matrix.
    ///
    /// Fails when the area exceeds [`MAX_MATRIX_CELLS`] or a side does not fit in `i32`.
    pub fn new(width: usize, height: usize) -> Result<Self, MatrixError> {
        let fits = width.checked_mul(height).is_some_and(|area| {
            area <= MAX_MATRIX_CELLS
                && i32::try_from(width).is_ok()
                && i32::try_from(height).is_ok()
        });
        if !fits {
            return Err(MatrixError::AreaOverflow { width, height });
        }

        Ok(Self {
            width,
            height,
            rows: vec![vec![Cell::default(); width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, v: Vector) -> bool {
        self.index_of(v).is_some()
    }

    /// Returns the cell at `v`, or `None` when `v` is outside the current bounds.
    pub fn cell(&self, v: Vector) -> Option<&Cell> {
        let (x, y) = self.index_of(v)?;
        Some(&self.rows[y][x])
    }

    pub fn cell_mut(&mut self, v: Vector) -> Option<&mut Cell> {
        let (x, y) = self.index_of(v)?;
        Some(&mut self.rows[y][x])
    }

    /// Like [`Matrix::cell_mut`], but reports the bounds violation.
    pub fn cell_mut_checked(&mut self, v: Vector) -> Result<&mut Cell, MatrixError> {
        let err = self.out_of_bounds(v);
        self.cell_mut(v).ok_or(err)
    }

    /// Appends `n` empty columns on the right. Existing cells are untouched.
    pub fn expand_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.width += n;
        for row in &mut self.rows {
            row.resize(self.width, Cell::default());
        }
        trace!(added = n, width = self.width, "matrix expanded right");
    }

    /// Walks up to `|max_steps|` cells from `origin` (exclusive), downward for positive
    /// `max_steps` and upward for negative, and reports the first cell any probe matches.
    ///
    /// Fails when `origin` or a visited cell is outside the matrix.
    pub fn ray_cast_vertical(
        &self,
        origin: Vector,
        probes: &[Probe<'_>],
        max_steps: i32,
    ) -> Result<Option<RayHit>, MatrixError> {
        if !self.in_bounds(origin) {
            return Err(self.out_of_bounds(origin));
        }

        let step = max_steps.signum();
        let mut position = origin;
        for _ in 0..max_steps.unsigned_abs() {
            position = position.offset(0, step);
            let cell = self.cell(position).ok_or_else(|| self.out_of_bounds(position))?;
            if let Some(probe) = probes.iter().find(|probe| (probe.test)(position, cell)) {
                return Ok(Some(RayHit { position, probe: probe.name }));
            }
        }

        Ok(None)
    }

    /// Serializes the matrix row-major, one line per row.
    pub fn to_text(&self, charset: Charset) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|cell| cell.render(charset)));
        }
        out
    }

    fn index_of(&self, v: Vector) -> Option<(usize, usize)> {
        let x = usize::try_from(v.x()).ok()?;
        let y = usize::try_from(v.y()).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    fn out_of_bounds(&self, position: Vector) -> MatrixError {
        MatrixError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Charset::Unicode))
    }
}

#[cfg(test)]
mod tests {
    use super::{Content, Matrix, MatrixError, Probe, RayHit};
    use crate::model::Vector;

    fn obstacle(_: Vector, cell: &super::Cell) -> bool {
        cell.content().is_obstacle()
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let m = Matrix::new(3, 2).unwrap();
        assert!(m.cell(Vector::new(2, 1)).is_some());
        assert!(m.cell(Vector::new(3, 0)).is_none());
        assert!(m.cell(Vector::new(0, 2)).is_none());
        assert!(m.cell(Vector::new(-1, 0)).is_none());
    }

    #[test]
    fn rejects_area_overflow() {
        let err = Matrix::new(usize::MAX, 2).unwrap_err();
        assert_eq!(err, MatrixError::AreaOverflow { width: usize::MAX, height: 2 });
    }

    #[test]
    fn rejects_areas_past_the_cell_limit() {
        let err = Matrix::new(1 << 12, (1 << 12) + 1).unwrap_err();
        assert_eq!(err, MatrixError::AreaOverflow { width: 1 << 12, height: (1 << 12) + 1 });
        assert!(Matrix::new(1, 1_000_000_002).is_err());
    }

    #[test]
    fn expand_right_preserves_cells() {
        let mut m = Matrix::new(2, 2).unwrap();
        assert!(m.cell_mut(Vector::new(1, 1)).unwrap().claim_box('x', false));
        m.expand_right(3);
        assert_eq!(m.width(), 5);
        assert_eq!(m.height(), 2);
        assert_eq!(m.cell(Vector::new(1, 1)).unwrap().content(), Content::BoxBody);
        assert_eq!(m.cell(Vector::new(4, 1)).unwrap().content(), Content::Empty);
        assert_eq!(m.to_text(super::Charset::Unicode), "     \n x   ");
    }

    #[test]
    fn ray_cast_reports_first_hit_in_either_direction() {
        let mut m = Matrix::new(1, 5).unwrap();
        assert!(m.cell_mut(Vector::new(0, 3)).unwrap().claim_box('x', false));
        let probes = [Probe::new("obstacle", &obstacle)];

        let hit = m.ray_cast_vertical(Vector::new(0, 0), &probes, 4).unwrap();
        assert_eq!(hit, Some(RayHit { position: Vector::new(0, 3), probe: "obstacle" }));

        assert_eq!(m.ray_cast_vertical(Vector::new(0, 0), &probes, 2).unwrap(), None);
        assert!(m.ray_cast_vertical(Vector::new(0, 4), &probes, -1).unwrap().is_some());
        assert_eq!(m.ray_cast_vertical(Vector::new(0, 2), &probes, -2).unwrap(), None);
    }

    #[test]
    fn ray_cast_skips_the_origin() {
        let mut m = Matrix::new(1, 2).unwrap();
        assert!(m.cell_mut(Vector::new(0, 0)).unwrap().claim_box('x', false));
        let probes = [Probe::new("obstacle", &obstacle)];
        assert_eq!(m.ray_cast_vertical(Vector::new(0, 0), &probes, 1).unwrap(), None);
        assert_eq!(m.ray_cast_vertical(Vector::new(0, 0), &probes, 0).unwrap(), None);
    }

    #[test]
    fn ray_cast_fails_when_leaving_the_matrix() {
        let m = Matrix::new(1, 2).unwrap();
        let err = m.ray_cast_vertical(Vector::new(0, 1), &[], 1).unwrap_err();
        assert_eq!(
            err,
            MatrixError::OutOfBounds { position: Vector::new(0, 2), width: 1, height: 2 }
        );
        assert!(m.ray_cast_vertical(Vector::new(1, 0), &[], 1).is_err());
    }
}
