// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::graphics::Matrix;
use crate::model::{BlockId, Vector};

/// A labeled, single-row box placed at a fixed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    label: String,
    position: Vector,
}

impl Block {
    pub fn new(id: BlockId, label: impl Into<String>, position: Vector) -> Self {
        Self {
            id,
            label: label.into(),
            position,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    /// Label width in cells.
    pub fn width(&self) -> usize {
        self.label.chars().count()
    }

    /// Number of leading spaces in the label; those cells are padding, not body.
    pub fn leading_padding(&self) -> usize {
        self.label.chars().take_while(|ch| *ch == ' ').count()
    }

    /// Column one past the last label cell, or `None` when it does not fit in `i32`.
    pub fn checked_right_edge(&self) -> Option<i32> {
        let width = i32::try_from(self.width()).ok()?;
        self.position.x().checked_add(width)
    }

    /// Column one past the last label cell, saturating at `i32::MAX`.
    pub fn right_edge(&self) -> i32 {
        self.checked_right_edge().unwrap_or(i32::MAX)
    }

    /// Whether `v` is one of the cells the label occupies.
    pub fn covers(&self, v: Vector) -> bool {
        v.y() == self.position.y() && v.x() >= self.position.x() && v.x() < self.right_edge()
    }

    /// Cell a connector leaves from.
    ///
    /// Upward connectors leave from the last label column, all others from the first
    /// non-padding column.
    pub fn exit_point(&self, upward: bool) -> Vector {
        let offset = if upward {
            self.width().saturating_sub(1)
        } else {
            self.leading_padding()
        };
        self.position.offset(column(offset), 0)
    }

    /// Claims the label cells in `matrix`.
    ///
    /// Returns the first position that could not be claimed, either because it is out of bounds
    /// or because something else already holds it.
    pub(crate) fn render(&self, matrix: &mut Matrix) -> Result<(), Vector> {
        let padding = self.leading_padding();
        for (offset, ch) in self.label.chars().enumerate() {
            let position = self.position.offset(column(offset), 0);
            let claimed = matrix
                .cell_mut(position)
                .is_some_and(|cell| cell.claim_box(ch, offset < padding));
            if !claimed {
                return Err(position);
            }
        }
        Ok(())
    }
}

fn column(offset: usize) -> i32 {
    i32::try_from(offset).unwrap_or(i32::MAX)
}
