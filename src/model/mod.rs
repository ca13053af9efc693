// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types: identifiers, coordinates, and the serializable board input.

pub mod ids;
pub mod input;
pub mod vector;

pub use ids::{BlockId, Id, IdError};
pub use input::{BlockInput, BoardInput, ConnectorInput, InputError};
pub use vector::Vector;
