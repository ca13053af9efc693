// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector routing.
//!
//! A route leaves the source block one cell away from its label, slides right until a straight
//! vertical run to the target row is free, runs vertically, then approaches the target block
//! horizontally and ends in an arrowhead. Moves are buffered in a [`LineTracer`] and written in
//! one pass, so a failed route leaves no partial line behind.

use tracing::{debug, trace};

use super::{Block, BoardError};
use crate::graphics::{Cell, Direction, LineTracer, Matrix, Probe, RouteOwner};
use crate::model::{BlockId, Vector};

/// A directed edge between two blocks of the same board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    from: BlockId,
    to: BlockId,
    from_slot: usize,
    to_slot: usize,
}

/// Cells a connector drew, in path order, plus where its arrowhead landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRoute {
    pub from: BlockId,
    pub to: BlockId,
    pub cells: Vec<Vector>,
    pub arrow: Option<Vector>,
}

impl Connector {
    pub(crate) fn new(from: BlockId, to: BlockId, from_slot: usize, to_slot: usize) -> Self {
        Self {
            from,
            to,
            from_slot,
            to_slot,
        }
    }

    pub fn from(&self) -> &BlockId {
        &self.from
    }

    pub fn to(&self) -> &BlockId {
        &self.to
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_slot == self.to_slot
    }

    pub(crate) fn from_slot(&self) -> usize {
        self.from_slot
    }

    pub(crate) fn to_slot(&self) -> usize {
        self.to_slot
    }

    /// Routes the connector from `from` to `to` and draws it into `matrix`.
    ///
    /// `owner` tags the cells of the vertical search and run; routes with the same owner may
    /// share those cells, routes with a different owner treat them as walls.
    pub(crate) fn render(
        &self,
        from: &Block,
        to: &Block,
        owner: RouteOwner,
        matrix: &mut Matrix,
    ) -> Result<RenderedRoute, BoardError> {
        let source = from.position();
        let target = to.position();
        let reverse_x = target.x() <= source.x();
        let reverse_y = target.y() < source.y();
        // A self-loop has to leave its own label before coming back, so it never lands on it.
        let may_land = !self.is_self_loop();

        let start = from.exit_point(reverse_y);
        debug!(%start, %target, reverse_x, reverse_y, "routing connector");
        let mut tracer = LineTracer::new(start);

        let mut cur = if reverse_y {
            let cur = tracer.move_horizontal(true);
            expand_to_reach(matrix, cur);
            cur
        } else {
            tracer.move_vertical(true)
        };
        let first = matrix.cell(cur).ok_or_else(|| self.invalid_position(cur))?;
        if first.content().is_obstacle() {
            return Err(self.no_space(cur));
        }

        let occupied = |position: Vector, cell: &Cell| {
            cell.content().is_obstacle() && !(may_land && to.covers(position))
        };
        let foreign_route =
            |_: Vector, cell: &Cell| cell.route_owner().is_some_and(|other| other != owner);
        let probes = [
            Probe::new("occupied", &occupied),
            Probe::new("foreign-route", &foreign_route),
        ];

        // Jogs always go right: away from a target on the left, toward one on the right.
        while let Some(hit) = matrix.ray_cast_vertical(cur, &probes, target.y() - cur.y())? {
            trace!(position = %hit.position, probe = hit.probe, "vertical run blocked");
            cur = tracer.move_horizontal(true);
            expand_to_reach(matrix, cur);
            let cell = matrix.cell(cur).ok_or_else(|| self.invalid_position(cur))?;
            if cell.content().is_obstacle() {
                return Err(self.no_space(cur));
            }
            tracer.claim();
        }

        let down = cur.y() < target.y();
        let dy = if down { 1 } else { -1 };
        let mut landed = false;
        while cur.y() != target.y() && matrix.in_bounds(cur) {
            if may_land && to.covers(cur.offset(0, dy)) {
                landed = true;
                break;
            }
            cur = tracer.move_vertical(down);
            tracer.claim();
        }

        if !landed {
            while cur.x() != target.x() && matrix.in_bounds(cur) {
                let increasing = cur.x() < target.x();
                let next = cur.offset(if increasing { 1 } else { -1 }, 0);
                if to.covers(next) {
                    break;
                }
                // Any other label on the approach row would end up with the arrowhead.
                if matrix.cell(next).is_some_and(|cell| cell.content().is_box()) {
                    trace!(position = %next, "approach blocked by another block");
                    return Err(self.no_space(next));
                }
                cur = tracer.move_horizontal(increasing);
            }
        }

        tracer.dump(matrix, owner)?;

        let direction = if landed {
            Direction::vertical(down)
        } else if cur.x() != target.x() {
            Direction::horizontal(cur.x() < target.x())
        } else {
            Direction::horizontal(!reverse_x)
        };
        let arrow = matrix
            .cell_mut(cur)
            .is_some_and(|cell| cell.place_arrow(direction))
            .then_some(cur);
        debug!(steps = tracer.len(), arrow = ?arrow, "connector committed");

        Ok(RenderedRoute {
            from: self.from.clone(),
            to: self.to.clone(),
            cells: tracer.points().collect(),
            arrow,
        })
    }

    fn no_space(&self, position: Vector) -> BoardError {
        BoardError::NoSpace {
            from: self.from.clone(),
            to: self.to.clone(),
            position,
        }
    }

    fn invalid_position(&self, position: Vector) -> BoardError {
        BoardError::InvalidPosition {
            id: self.from.clone(),
            position,
        }
    }
}

/// Grows the matrix just enough for `v` to be addressable, if `v` lies past the right edge on a
/// valid row.
fn expand_to_reach(matrix: &mut Matrix, v: Vector) {
    let row_ok = usize::try_from(v.y()).is_ok_and(|y| y < matrix.height());
    let missing = usize::try_from(v.x())
        .map(|x| (x + 1).saturating_sub(matrix.width()))
        .unwrap_or(0);
    if row_ok && missing > 0 {
        matrix.expand_right(missing);
    }
}
