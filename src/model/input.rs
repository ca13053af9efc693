// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Serializable board description handed over by the layout stage.
//!
//! Blocks are added before connectors, each list in file order, so board errors surface exactly
//! as if the caller had driven [`Board`] by hand.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{BlockId, IdError};
use super::vector::Vector;
use crate::board::{Block, Board, BoardError};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BoardInput {
    pub blocks: Vec<BlockInput>,
    #[serde(default)]
    pub connectors: Vec<ConnectorInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BlockInput {
    pub id: String,
    /// Text drawn on the board; defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub position: Vector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConnectorInput {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid board json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid block id {id:?}: {source}")]
    InvalidId { id: String, source: IdError },
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl BoardInput {
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    /// JSON schema of the input format, pretty-printed.
    pub fn json_schema() -> String {
        let schema = schemars::schema_for!(BoardInput);
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    }

    pub fn into_board(self) -> Result<Board, InputError> {
        let mut board = Board::new();

        for block in self.blocks {
            let id = BlockId::new(&block.id)
                .map_err(|source| InputError::InvalidId { id: block.id.clone(), source })?;
            let label = block.label.unwrap_or(block.id);
            board.add_block(Block::new(id, label, block.position))?;
        }

        for connector in &self.connectors {
            board.add_connector(&connector.from, &connector.to)?;
        }

        Ok(board)
    }
}
