// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::graphics::{Charset, Matrix};

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn matrix_to_string(matrix: &Matrix, charset: Charset, trim: bool) -> String {
    let text = matrix.to_text(charset);
    if !trim {
        return text;
    }

    let mut lines = text.split('\n').map(|line| line.trim_end_matches(' ')).collect::<Vec<_>>();
    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{matrix_to_string, text_len};
    use crate::graphics::{Charset, Matrix};
    use crate::model::Vector;

    #[test]
    fn text_len_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(text_len("│─┼"), 3);
    }

    #[test]
    fn trimming_removes_trailing_spaces_and_empty_lines() {
        let mut matrix = Matrix::new(3, 3).unwrap();
        assert!(matrix.cell_mut(Vector::new(0, 0)).unwrap().claim_box('A', false));
        assert!(matrix.cell_mut(Vector::new(1, 1)).unwrap().claim_box('B', false));
        assert_eq!(matrix_to_string(&matrix, Charset::Unicode, true), "A\n B");
        assert_eq!(matrix_to_string(&matrix, Charset::Unicode, false), "A  \n B \n   ");
    }
}
