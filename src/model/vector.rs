// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::ops::{Add, Sub};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An integer `(column, row)` coordinate on the board.
///
/// Rows grow downward. Coordinates are signed so that a cursor stepping off the left or top edge
/// stays representable and can be rejected by the bounds check instead of wrapping.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub struct Vector {
    x: i32,
    y: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Moves by `(dx, dy)`, clamping at the edges of the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vector::new(2, 5);
        let b = Vector::new(-1, 3);
        assert_eq!(a + b, Vector::new(1, 8));
        assert_eq!(a - b, Vector::new(3, 2));
        assert_eq!(a.offset(0, -5), Vector::new(2, 0));
    }

    #[test]
    fn offsets_never_wrap() {
        let edge = Vector::new(i32::MAX - 1, i32::MIN + 1);
        assert_eq!(edge.offset(1, -1), Vector::new(i32::MAX, i32::MIN));
        assert_eq!(edge.offset(5, -5), Vector::new(i32::MAX, i32::MIN));
        assert_eq!(Vector::new(0, 0) - Vector::new(i32::MIN, 0), Vector::new(i32::MAX, 0));
    }

    #[test]
    fn deserializes_from_xy_object() {
        let v: Vector = serde_json::from_str(r#"{"x": 4, "y": 7}"#).unwrap();
        assert_eq!(v, Vector::new(4, 7));
        assert_eq!(v.to_string(), "(4, 7)");
    }
}
