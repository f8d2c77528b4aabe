//! Bordered ASCII tables in the legacy report format: the title is overlaid
//! on the top border, a single separator sits under the header row.

use crate::stats::PositionStats;

const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Render statistics rows into a bordered table, in slice order.
pub fn render(title: &str, rows: &[(String, PositionStats)]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|(label, stats)| {
            [
                label.clone(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary.to_string(),
            ]
        })
        .collect();

    // Widths are in characters, not bytes: the headers are Cyrillic.
    let mut widths = [0usize; 4];
    for (column, header) in HEADERS.iter().enumerate() {
        widths[column] = header.chars().count();
        for row in &cells {
            widths[column] = widths[column].max(row[column].chars().count());
        }
    }

    let border = border_line(&widths);
    let mut table = String::new();

    table.push_str(&overlay_title(&border, title));
    table.push('\n');
    table.push_str(&format_row(&HEADERS, &widths));
    table.push('\n');
    table.push_str(&border);
    table.push('\n');
    for row in &cells {
        let row_refs = [
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ];
        table.push_str(&format_row(&row_refs, &widths));
        table.push('\n');
    }
    table.push_str(&border);

    table
}

fn border_line(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        for _ in 0..width + 2 {
            line.push('-');
        }
        line.push('+');
    }
    line
}

fn format_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
        line.push_str(" |");
    }
    line
}

fn overlay_title(border: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title_len + 1 >= border.chars().count() {
        // Title wider than the table; leave the border plain.
        return border.to_string();
    }

    let mut line = String::from("+");
    line.push_str(title);
    line.extend(border.chars().skip(title_len + 1));
    line
}
