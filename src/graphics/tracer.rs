// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;
use tracing::trace;

use super::cell::{BoxEdges, Direction, RouteOwner};
use super::{Matrix, MatrixError};
use crate::model::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    direction: Direction,
    claimed: bool,
}

/// Records a path of unit moves without touching the matrix.
///
/// The recorded path is written in one pass by [`LineTracer::dump`], which either draws every
/// step or nothing: all positions are validated before the first cell is modified. The origin
/// itself is never drawn; it is the cell the line leaves from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTracer {
    origin: Vector,
    cursor: Vector,
    steps: SmallVec<[Step; 16]>,
}

impl LineTracer {
    pub fn new(origin: Vector) -> Self {
        Self {
            origin,
            cursor: origin,
            steps: SmallVec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn move_horizontal(&mut self, increasing: bool) -> Vector {
        self.step(Direction::horizontal(increasing))
    }

    pub fn move_vertical(&mut self, increasing: bool) -> Vector {
        self.step(Direction::vertical(increasing))
    }

    /// Marks the cell under the cursor to be tagged with the route owner on dump.
    pub fn claim(&mut self) {
        if let Some(step) = self.steps.last_mut() {
            step.claimed = true;
        }
    }

    /// Positions visited by the path, in order, excluding the origin.
    pub fn points(&self) -> impl Iterator<Item = Vector> + '_ {
        self.steps.iter().scan(self.origin, |position, step| {
            let (dx, dy) = step.direction.delta();
            *position = position.offset(dx, dy);
            Some(*position)
        })
    }

    /// Writes the recorded path into `matrix`.
    ///
    /// Each visited cell gets the edges of the step that entered it and of the step that leaves
    /// it, so turns render as corners. Claimed cells are tagged with `owner`.
    pub fn dump(&self, matrix: &mut Matrix, owner: RouteOwner) -> Result<(), MatrixError> {
        let points = self.points().collect::<SmallVec<[Vector; 16]>>();
        if let Some(&outside) = points.iter().find(|point| !matrix.in_bounds(**point)) {
            return Err(MatrixError::OutOfBounds {
                position: outside,
                width: matrix.width(),
                height: matrix.height(),
            });
        }

        for (idx, (point, step)) in points.iter().zip(&self.steps).enumerate() {
            let mut edges = BoxEdges::from(step.direction.opposite());
            if let Some(next) = self.steps.get(idx + 1) {
                edges = edges.union(next.direction.into());
            }

            let cell = matrix.cell_mut_checked(*point)?;
            cell.draw_line(edges);
            if step.claimed {
                cell.tag_route_owner(owner);
            }
        }

        trace!(origin = %self.origin, steps = self.steps.len(), "line dumped");
        Ok(())
    }

    fn step(&mut self, direction: Direction) -> Vector {
        let (dx, dy) = direction.delta();
        self.cursor = self.cursor.offset(dx, dy);
        self.steps.push(Step { direction, claimed: false });
        self.cursor
    }
}
