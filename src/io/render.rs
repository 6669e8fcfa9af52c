//! Plain-text renderings of a maze

use crate::spatial::grid::{Grid, Position};
use crate::spatial::walls::wall_grid;

/// One line per row, each node drawn as its direction glyph
///
/// The default 3x2 grid renders as `"+ < <\n^ < <\n"`.
pub fn render_directions<P>(grid: &Grid<P>) -> String {
    let directions = grid.directions();
    let mut out = String::with_capacity(grid.len() * 2);

    for row in directions.rows() {
        let line = row
            .iter()
            .map(|direction| direction.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Box-drawn maze with an optional marker cell shown as `@`
///
/// ```text
/// +---+---+
/// | @     |
/// +---+   +
/// |       |
/// +---+---+
/// ```
pub fn render_walls<P>(grid: &Grid<P>, marker: Option<Position>) -> String {
    let walls = wall_grid(grid);
    let mut out = String::new();

    for (y, row) in walls.rows().into_iter().enumerate() {
        for cell in &row {
            out.push_str(if cell.up { "+---" } else { "+   " });
        }
        out.push_str("+\n");

        for (x, cell) in row.iter().enumerate() {
            out.push(if cell.left { '|' } else { ' ' });
            let body = if marker == Some(Position::new(x, y)) {
                " @ "
            } else {
                "   "
            };
            out.push_str(body);
        }
        let right_edge = row.last().is_none_or(|cell| cell.right);
        out.push(if right_edge { '|' } else { ' ' });
        out.push('\n');
    }

    if let Some(last) = walls.outer_iter().next_back() {
        for cell in &last {
            out.push_str(if cell.down { "+---" } else { "+   " });
        }
        out.push_str("+\n");
    }

    out
}

/// Short summary line used by the command-line front end
pub fn describe<P>(grid: &Grid<P>) -> String {
    let (width, height) = grid.dimensions();
    format!("{width}x{height} maze, origin at {}", grid.origin())
}
