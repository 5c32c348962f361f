use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::{ScoreResult, SlotValue};

/// Closing message for a scored match. Counts are echoed as the user
/// entered them; a score that could not be computed renders as `NaN`.
pub fn format_final_message(
    scored_risers: &str,
    completed_rows: &str,
    completed_stacks: &str,
    score: SlotValue,
) -> String {
    format!(
        "The final score for the match with {} Scored Risers, {} Completed Rows, \
         and {} Completed Stacks is {} points",
        scored_risers, completed_rows, completed_stacks, score
    )
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Multi-line score breakdown for the `score` command.
///
/// ```text
/// Score: 41
///   Scored Risers     5 x 1  = 5
///   Completed Rows    2 x 3  = 6
///   Completed Stacks  1 x 30 = 30
/// ```
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let total = if result.incomplete {
        format!("{}*", result.score)
    } else {
        result.score.to_string()
    };

    let mut lines = Vec::with_capacity(result.breakdown.factors.len() + 1);
    if use_colors {
        lines.push(format!("Score: {}", total.bold().green()));
    } else {
        lines.push(format!("Score: {}", total));
    }

    for factor in &result.breakdown.factors {
        let count = match factor.count {
            SlotValue::Number(n) => n.to_string(),
            SlotValue::NotANumber => "?".to_string(),
        };
        let line = format!(
            "  {:<16} {:>3} x {:<2} = {}",
            factor.label, count, factor.points_each, factor.points
        );
        if use_colors && factor.count == SlotValue::NotANumber {
            lines.push(line.red().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}
