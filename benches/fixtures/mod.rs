// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use depboard::{Block, BlockId, Board, Vector};

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn block_id(value: &str) -> BlockId {
    BlockId::new(value).expect("valid block id")
}

pub fn checksum_text(text: &str) -> u64 {
    text.bytes()
        .fold(0u64, |acc, byte| acc.wrapping_mul(131).wrapping_add(u64::from(byte)))
}

pub mod staircase {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub blocks: usize,
        pub fanout: usize,
        pub label_len: usize,
    }

    impl Params {
        pub const fn new(blocks: usize, fanout: usize, label_len: usize) -> Self {
            Self {
                blocks,
                fanout,
                label_len,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumDense,
        LargeLongLabels,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumDense => "medium_dense",
                Self::LargeLongLabels => "large_long_labels",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(12, 2, 8),
                Self::MediumDense => Params::new(60, 6, 8),
                Self::LargeLongLabels => Params::new(120, 4, 24),
            }
        }
    }

    /// Blocks descend diagonally, each one starting right where the previous label ends.
    ///
    /// - Every block connects to the next `fanout` blocks below it.
    /// - Label columns never overlap, so every route runs straight down its own column and then
    ///   right into its target; the board always renders.
    pub fn board(params: Params) -> Board {
        assert!(params.label_len >= 2, "label_len must be >= 2");

        let mut board = Board::new();
        let mut x = 0i32;
        for idx in 0..params.blocks {
            let id = format!("mod_{idx:04}");
            let label = ascii_repeat_to_len(&id, '_', params.label_len);
            let y = i32::try_from(idx * 2).expect("row fits i32");
            board
                .add_block(Block::new(block_id(&id), label, Vector::new(x, y)))
                .expect("add block");
            x += i32::try_from(params.label_len).expect("label fits i32");
        }

        for idx in 0..params.blocks {
            for k in 1..=params.fanout {
                let to = idx + k;
                if to >= params.blocks {
                    break;
                }
                board
                    .add_connector(&format!("mod_{idx:04}"), &format!("mod_{to:04}"))
                    .expect("add connector");
            }
        }

        board
    }

    pub fn fixture(case: Case) -> Board {
        board(case.params())
    }
}

pub mod wall {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Shallow,
        Deep,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Shallow => "shallow",
                Self::Deep => "deep",
            }
        }

        pub const fn depth(self) -> usize {
            match self {
                Self::Shallow => 8,
                Self::Deep => 96,
            }
        }
    }

    /// A single connector whose straight path is blocked by a stack of ever wider blocks, so the
    /// route has to jog right once per wall before it can descend.
    pub fn board(depth: usize) -> Board {
        assert!(depth >= 2, "depth must be >= 2");

        let mut board = Board::new();
        board
            .add_block(Block::new(block_id("src"), "src", Vector::new(0, 0)))
            .expect("add source");
        for k in 1..depth {
            let id = format!("wall_{k:04}");
            let label = ascii_repeat_to_len(&id, '#', (2 * k + 2).max(id.len()));
            let y = i32::try_from(2 * k).expect("row fits i32");
            board
                .add_block(Block::new(block_id(&id), label, Vector::new(0, y)))
                .expect("add wall");
        }
        let y = i32::try_from(2 * depth).expect("row fits i32");
        board
            .add_block(Block::new(block_id("dst"), "dst", Vector::new(0, y)))
            .expect("add destination");
        board.add_connector("src", "dst").expect("add connector");
        board
    }

    pub fn fixture(case: Case) -> Board {
        board(case.depth())
    }
}
