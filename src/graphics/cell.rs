// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid cells and the glyph sets used to draw them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

pub const ASCII_HORIZONTAL: char = '-';
pub const ASCII_VERTICAL: char = '|';
pub const ASCII_JUNCTION: char = '+';

pub const ARROW_LEFT: char = '<';
pub const ARROW_RIGHT: char = '>';
pub const ARROW_UP: char = '^';
pub const ARROW_DOWN: char = 'v';

/// Glyph set used when a matrix is serialized to text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Charset {
    #[default]
    Unicode,
    Ascii,
}

/// One unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn horizontal(increasing: bool) -> Self {
        if increasing {
            Self::Right
        } else {
            Self::Left
        }
    }

    pub fn vertical(increasing: bool) -> Self {
        if increasing {
            Self::Down
        } else {
            Self::Up
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Which sides of a cell a line leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxEdges(u8);

impl BoxEdges {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const UP: Self = Self(1 << 2);
    pub const DOWN: Self = Self(1 << 3);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn is_straight(self) -> bool {
        matches!(self.0, 1..=3 | 4 | 8 | 12)
    }
}

impl From<Direction> for BoxEdges {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
        }
    }
}

fn unicode_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        // Straight segments (including endpoints).
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        // Corners.
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        // Tees.
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        _ => UNICODE_BOX_CROSS,
    }
}

fn ascii_char_from_edges(edges: BoxEdges) -> char {
    if edges.is_empty() {
        return ' ';
    }
    if !edges.is_straight() {
        return ASCII_JUNCTION;
    }
    if edges.contains(BoxEdges::LEFT) || edges.contains(BoxEdges::RIGHT) {
        ASCII_HORIZONTAL
    } else {
        ASCII_VERTICAL
    }
}

/// What a cell holds. Set once by the entity that claims the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    BoxBody,
    BoxPadding,
    Arrow,
}

impl Content {
    /// Content a route may never run through.
    pub fn is_obstacle(self) -> bool {
        match self {
            Self::BoxBody | Self::Arrow => true,
            Self::Empty | Self::BoxPadding => false,
        }
    }

    /// Content that belongs to a block.
    pub fn is_box(self) -> bool {
        match self {
            Self::BoxBody | Self::BoxPadding => true,
            Self::Empty | Self::Arrow => false,
        }
    }
}

/// Opaque token naming the source block whose connectors claimed a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteOwner(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Blank,
    Text(char),
    Line(BoxEdges),
    Arrow(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    content: Content,
    route_owner: Option<RouteOwner>,
    glyph: Glyph,
}

impl Cell {
    pub fn content(&self) -> Content {
        self.content
    }

    pub fn route_owner(&self) -> Option<RouteOwner> {
        self.route_owner
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    pub fn has_line(&self) -> bool {
        matches!(self.glyph, Glyph::Line(_))
    }

    /// Claims an empty cell for a block label character.
    ///
    /// Returns `false` when the cell already holds something.
    pub fn claim_box(&mut self, ch: char, padding: bool) -> bool {
        if self.content != Content::Empty {
            return false;
        }
        self.content = if padding { Content::BoxPadding } else { Content::BoxBody };
        self.glyph = Glyph::Text(ch);
        true
    }

    pub fn tag_route_owner(&mut self, owner: RouteOwner) {
        self.route_owner = Some(owner);
    }

    /// Merges line edges into the cell. Claimed cells keep their glyph.
    pub fn draw_line(&mut self, edges: BoxEdges) {
        if self.content != Content::Empty {
            return;
        }
        self.glyph = match self.glyph {
            Glyph::Line(existing) => Glyph::Line(existing.union(edges)),
            _ => Glyph::Line(edges),
        };
    }

    /// Turns an empty cell into an arrowhead. Returns `false` when the cell is claimed.
    pub fn place_arrow(&mut self, direction: Direction) -> bool {
        if self.content != Content::Empty {
            return false;
        }
        self.content = Content::Arrow;
        self.glyph = Glyph::Arrow(direction);
        true
    }

    pub fn render(&self, charset: Charset) -> char {
        match (self.glyph, charset) {
            (Glyph::Blank, _) => ' ',
            (Glyph::Text(ch), _) => ch,
            (Glyph::Line(edges), Charset::Unicode) => unicode_char_from_edges(edges),
            (Glyph::Line(edges), Charset::Ascii) => ascii_char_from_edges(edges),
            (Glyph::Arrow(direction), _) => match direction {
                Direction::Left => ARROW_LEFT,
                Direction::Right => ARROW_RIGHT,
                Direction::Up => ARROW_UP,
                Direction::Down => ARROW_DOWN,
            },
        }
    }
}
