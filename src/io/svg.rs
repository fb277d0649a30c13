//! SVG serialization of a composed artwork
//!
//! The document is self-contained: every style rule is scoped by the profile
//! id, so several artworks can share one page without their rules colliding.
//! This is a pure function with no I/O; it returns a `String`.

use crate::generation::Artwork;
use crate::geometry::Cell;
use crate::io::configuration::DOCUMENT_BOTTOM_MARGIN;
use crate::style::StyleSheet;

/// Format a coordinate, printing negative zero as `0`
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Path data of a closed polygon: one move-to, line-tos, close
fn path_data(cell: &Cell) -> String {
    let mut commands: Vec<String> = cell
        .vertices
        .iter()
        .enumerate()
        .map(|(index, [x, y])| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command}{} {}", number(*x), number(*y))
        })
        .collect();
    commands.push("Z".to_string());
    commands.join(" ")
}

/// Markup of one cell; a zero-scale cell stays in the document but collapsed
fn cell_markup(cell: &Cell, row: usize) -> String {
    let [dx, dy] = cell.translate;
    let inline_scale = if cell.scale == 0.0 {
        r#" style="transform: scale(0);""#
    } else {
        ""
    };
    format!(
        r#"<g transform="translate({}, {})" class="profil-row-{row}"><path d="{}"{inline_scale} stroke="none" /></g>"#,
        number(dx),
        number(dy),
        path_data(cell),
    )
}

/// Markup of one column group and its cells
fn column_markup(col: usize, column: &[Cell]) -> String {
    let cells: String = column
        .iter()
        .enumerate()
        .map(|(row, cell)| cell_markup(cell, row))
        .collect();
    format!(r#"<g class="profil-col-{col}">{cells}</g>"#)
}

/// Style rules of one column: its offset, then fill and scale per position
fn column_rules(style: &StyleSheet, col: usize) -> String {
    let id = &style.profile_id;

    let offset = format!(
        "#{id} .profil-col-{col} {{transform: translate(0, {}px);}}",
        number(style.column_offset(col))
    );
    let cells = (0..style.row_count())
        .filter_map(|row| {
            style.cell(col, row).map(|cell| {
                let hidden = if cell.scale == 0.0 { " opacity: 0;" } else { "" };
                format!(
                    "#{id} .profil-col-{col} .profil-row-{row} path {{fill: {}; transform: scale({});{hidden}}}",
                    cell.color,
                    number(cell.scale)
                )
            })
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{offset}{cells}")
}

/// Style rules: column offsets, per-cell fill and scale, and the horizontal
/// shift of the whole grid
fn rules(style: &StyleSheet, offset_width: f64) -> String {
    let id = &style.profile_id;
    let columns = (0..style.column_count())
        .map(|col| column_rules(style, col))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{columns}#{id} > g {{transform: translate({}px, 0);}}",
        number(offset_width)
    )
}

/// Render an artwork as a standalone SVG document
pub fn serialize(artwork: &Artwork) -> String {
    let id = &artwork.profile_id;
    let width = number(artwork.canvas.width);
    let height = number(artwork.canvas.height + DOCUMENT_BOTTOM_MARGIN);

    let style = rules(&artwork.style, artwork.profile.offset_width);
    let columns: String = artwork
        .profile
        .columns
        .iter()
        .enumerate()
        .map(|(col, column)| column_markup(col, column))
        .collect();

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" id="{id}"><style>#{id}{{margin: auto; overflow: visible;}}{style}</style><g>{columns}</g></svg>"#
    )
}
