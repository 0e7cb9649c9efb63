//! Help-table rendering for the outcome matrix.

use colored::Colorize;
use fairhand_core::{OutcomeMatrix, Verdict};

/// Cell text from the row player's perspective.
fn cell(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Draw => "Draw",
        Verdict::FirstWins => "Win",
        Verdict::SecondWins => "Lose",
    }
}

/// Print the matrix as a padded table: rows are your move, columns the
/// computer's.
pub fn render(matrix: &OutcomeMatrix) {
    let names = matrix.moves().names();
    let width = names
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Move".len())
        + 2;

    let mut header = format!("{:width$}", "Move");
    for name in names {
        header.push_str(&format!("{name:width$}"));
    }
    println!("{}", header.bold());

    for (name, row) in matrix.rows() {
        let mut line = format!("{name:width$}");
        for verdict in row {
            line.push_str(&format!("{:width$}", cell(*verdict)));
        }
        println!("{line}");
    }
}
