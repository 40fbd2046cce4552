// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Text rendering of a board's shot history.

use std::iter;

use crate::board::Board;

impl Board {
    /// Render the shot history as text.
    ///
    /// The grid sits between two borders of `=` that are `width * 2 + 3` characters
    /// wide. Under the top border is a column header (`.` then `1` to `width`), then one
    /// line per row: the row letter followed by the code of each shot location (`H` or
    /// `M`), blank where nothing was fired. Trailing blanks are trimmed, so a row with no
    /// shots is just its letter.
    pub fn display(&self) -> String {
        let width = self.width();
        let border = "=".repeat(width * 2 + 3);

        let mut lines = Vec::with_capacity(width + 3);
        lines.push(border.clone());
        lines.push(column_header(width));
        for (letter, row) in (b'A'..).zip(self.grid.rows()) {
            let mut line = String::new();
            line.push(letter as char);
            for location in row {
                line.push(' ');
                if let Some(shot) = self.grid[location].shot {
                    line.push_str(shot.code());
                }
            }
            lines.push(line.trim_end().to_owned());
        }
        lines.push(border);
        lines.join("\n")
    }
}

/// Header naming each column: `. 1 2 ... width`.
fn column_header(width: usize) -> String {
    iter::once(".".to_owned())
        .chain((1..=width).map(|column| column.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
