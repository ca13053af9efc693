// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The board: placed blocks, the connectors between them, and the render pass that draws both.
//!
//! Rendering is a single deterministic pass. Blocks are drawn first, then connectors in insertion
//! order; later connectors read the route-owner tags earlier ones left behind, so the order is
//! part of the output contract.

use std::fmt;

use thiserror::Error;
use tracing::{debug, debug_span};

use crate::graphics::{Charset, Matrix, MatrixError, RouteOwner};
use crate::model::{BlockId, Vector};

mod block;
mod connector;
mod registry;

pub use block::Block;
pub use connector::{Connector, RenderedRoute};
pub use registry::OrderedRegistry;

/// Number of spare rows below the lowest block, so connectors leaving it have room to turn.
const ROUTING_MARGIN_ROWS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("block with id {id} already present")]
    DuplicateId { id: BlockId },
    #[error("block with id {id} not found")]
    NotFound { id: String },
    #[error("connector from {from} to {to} already present")]
    DuplicateConnector { from: BlockId, to: BlockId },
    #[error("block {id} has an empty label")]
    EmptyLabel { id: BlockId },
    #[error("block {id} label contains control characters")]
    InvalidLabel { id: BlockId },
    #[error("block {id} overlaps another block at {position}")]
    BlockOverlap { id: BlockId, position: Vector },
    #[error("no space to route {from} -> {to} at {position}")]
    NoSpace {
        from: BlockId,
        to: BlockId,
        position: Vector,
    },
    #[error("{id}: invalid position {position}")]
    InvalidPosition { id: BlockId, position: Vector },
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Ordered `from -> to` pair identifying a connector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorKey {
    pub from: BlockId,
    pub to: BlockId,
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    blocks: OrderedRegistry<BlockId, Block>,
    connectors: OrderedRegistry<ConnectorKey, Connector>,
}

/// Result of a successful render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRender {
    matrix: Matrix,
    routes: Vec<RenderedRoute>,
}

impl BoardRender {
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Routes in connector insertion order.
    pub fn routes(&self) -> &[RenderedRoute] {
        &self.routes
    }

    pub fn to_text(&self, charset: Charset) -> String {
        self.matrix.to_text(charset)
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `block` under its id.
    ///
    /// The board is unchanged when this fails.
    pub fn add_block(&mut self, block: Block) -> Result<(), BoardError> {
        if block.label().trim().is_empty() {
            return Err(BoardError::EmptyLabel { id: block.id().clone() });
        }
        // Labels render on a single row; tabs and newlines would shift every later column.
        if block.label().chars().any(char::is_control) {
            return Err(BoardError::InvalidLabel { id: block.id().clone() });
        }
        let position = block.position();
        if position.x() < 0 || position.y() < 0 || block.checked_right_edge().is_none() {
            return Err(BoardError::InvalidPosition { id: block.id().clone(), position });
        }

        let id = block.id().clone();
        self.blocks
            .insert(id.clone(), block)
            .map(|_| ())
            .map_err(|_| BoardError::DuplicateId { id })
    }

    /// Adds a connector between two registered blocks. Self-loops are allowed.
    pub fn add_connector(&mut self, from: &str, to: &str) -> Result<(), BoardError> {
        let (from_slot, from_block) = self.lookup(from)?;
        let (to_slot, to_block) = self.lookup(to)?;

        let key = ConnectorKey {
            from: from_block.id().clone(),
            to: to_block.id().clone(),
        };
        if self.connectors.contains_key(&key) {
            return Err(BoardError::DuplicateConnector { from: key.from, to: key.to });
        }

        let connector = Connector::new(key.from.clone(), key.to.clone(), from_slot, to_slot);
        // The key was checked above, so the insert cannot be rejected.
        let _ = self.connectors.insert(key, connector);
        Ok(())
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Blocks in insertion order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.values()
    }

    /// Connectors in insertion order.
    pub fn connectors(&self) -> impl Iterator<Item = &Connector> + '_ {
        self.connectors.values()
    }

    pub fn connector(&self, from: &str, to: &str) -> Option<&Connector> {
        let key = ConnectorKey {
            from: self.block(from)?.id().clone(),
            to: self.block(to)?.id().clone(),
        };
        self.connectors.get(&key)
    }

    /// The route-owner tag connectors leaving `id` write into the matrix.
    pub fn route_owner(&self, id: &str) -> Option<RouteOwner> {
        self.blocks.slot_of(id).map(owner_for_slot)
    }

    /// `(width, height)` of the matrix before any connector expands it.
    pub fn layout_size(&self) -> (usize, usize) {
        let mut width = 0;
        let mut height = 0;
        for block in self.blocks.values() {
            let right_edge = usize::try_from(block.right_edge()).unwrap_or(0);
            let bottom = usize::try_from(block.position().y()).unwrap_or(0) + 1;
            width = width.max(right_edge);
            height = height.max(bottom + ROUTING_MARGIN_ROWS);
        }
        (width, height)
    }

    /// Draws every block, then every connector in insertion order.
    ///
    /// The first connector that cannot be routed aborts the whole render.
    pub fn render(&self) -> Result<BoardRender, BoardError> {
        let mut matrix = self.blank_matrix()?;
        self.render_blocks(&mut matrix)?;

        let mut routes = Vec::with_capacity(self.connectors.len());
        for slot in 0..self.connectors.len() {
            routes.push(self.render_connector(slot, &mut matrix)?);
        }

        debug!(
            blocks = self.blocks.len(),
            connectors = routes.len(),
            width = matrix.width(),
            height = matrix.height(),
            "board rendered"
        );
        Ok(BoardRender { matrix, routes })
    }

    pub(crate) fn blank_matrix(&self) -> Result<Matrix, BoardError> {
        let (width, height) = self.layout_size();
        Ok(Matrix::new(width, height)?)
    }

    pub(crate) fn render_blocks(&self, matrix: &mut Matrix) -> Result<(), BoardError> {
        for block in self.blocks.values() {
            block.render(matrix).map_err(|position| BoardError::BlockOverlap {
                id: block.id().clone(),
                position,
            })?;
        }
        Ok(())
    }

    pub(crate) fn render_connector(
        &self,
        slot: usize,
        matrix: &mut Matrix,
    ) -> Result<RenderedRoute, BoardError> {
        let connector = self
            .connectors
            .get_slot(slot)
            .ok_or_else(|| BoardError::NotFound { id: format!("connector #{slot}") })?;
        let from = self.block_at(connector.from_slot())?;
        let to = self.block_at(connector.to_slot())?;

        let span = debug_span!("connector", from = %connector.from(), to = %connector.to());
        let _guard = span.enter();
        connector.render(from, to, owner_for_slot(connector.from_slot()), matrix)
    }

    fn lookup(&self, id: &str) -> Result<(usize, &Block), BoardError> {
        self.blocks
            .slot_of(id)
            .and_then(|slot| Some((slot, self.blocks.get_slot(slot)?)))
            .ok_or_else(|| BoardError::NotFound { id: id.to_owned() })
    }

    fn block_at(&self, slot: usize) -> Result<&Block, BoardError> {
        self.blocks
            .get_slot(slot)
            .ok_or_else(|| BoardError::NotFound { id: format!("block #{slot}") })
    }
}

fn owner_for_slot(slot: usize) -> RouteOwner {
    RouteOwner(u32::try_from(slot).unwrap_or(u32::MAX))
}
