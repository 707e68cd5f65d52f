use gold_ledger_core::models::ranked::RankedOption;

const HEADERS: [&str; 5] = ["#", "Id", "Gold", "Price ($)", "Unit Cost ($/gold)"];

pub const EMPTY_HINT: &str = "No packages yet. Add one with `gold-ledger add <GOLD> <PRICE>`.\n";

const BEST_MARKER: &str = "* ";
const PLAIN_MARKER: &str = "  ";

/// Render the ranked rows as a right-aligned text table.
/// Best-value rows are prefixed with `*`.
pub fn render_table(rows: &[RankedOption<'_>]) -> String {
    if rows.is_empty() {
        return EMPTY_HINT.to_string();
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.rank.to_string(),
                row.option.id.to_string(),
                row.option.gold.to_string(),
                row.option.price_display(),
                row.option.unit_cost_display(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, PLAIN_MARKER, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(PLAIN_MARKER);
    out.push_str(&rule.join("  "));
    out.push('\n');

    for (row, cells) in rows.iter().zip(&cells) {
        let marker = if row.is_best { BEST_MARKER } else { PLAIN_MARKER };
        push_line(&mut out, marker, cells, &widths);
    }
    out.push_str("(* best value)\n");
    out
}

fn push_line(out: &mut String, marker: &str, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}", width = *width))
        .collect();
    out.push_str(marker);
    out.push_str(&padded.join("  "));
    out.push('\n');
}
