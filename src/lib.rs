// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Depboard: renders dependency boards as text diagrams.
//!
//! A board is a set of labelled blocks at fixed grid positions plus directed connectors between
//! them. Rendering draws every block into a character matrix, then routes each connector around
//! blocks and foreign routes using box-drawing lines and an arrowhead.

pub mod board;
pub mod graphics;
pub mod model;
pub mod render;

pub use board::{Block, Board, BoardError, BoardRender, ConnectorKey, RenderedRoute};
pub use graphics::Charset;
pub use model::{BlockId, BoardInput, InputError, Vector};
pub use render::{
    render_board_annotated, render_board_text, AnnotatedRender, BoardRef, RenderOptions,
};
