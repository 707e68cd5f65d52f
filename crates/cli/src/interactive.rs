use std::io::{BufRead, Write};

use gold_ledger_core::storage::backend::KeyValueStore;
use gold_ledger_core::PackageLedger;

use crate::form::{EntryForm, Field};
use crate::render::render_table;

const HELP: &str = "Enter gold amount, then price. Empty input keeps the current value. \
                    `d <id>` deletes a package, `q` quits.\n";

/// Prompt loop: gold, then price, then submit. Repeats until `q` or EOF.
///
/// Mirrors the web form: a rejected submission keeps both values (shown in
/// brackets at the next prompt) and nothing else is reported.
pub fn run<S, R, W>(ledger: &mut PackageLedger<S>, input: R, mut out: W) -> anyhow::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut form = EntryForm::new();
    out.write_all(HELP.as_bytes())?;
    out.write_all(render_table(&ledger.ranked()).as_bytes())?;

    let mut lines = input.lines();
    loop {
        write_prompt(&mut out, &form)?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let entry = line.trim();

        if matches!(entry, "q" | "quit") {
            break;
        }
        if let Some(id) = entry.strip_prefix("d ").and_then(|id| id.trim().parse::<u64>().ok()) {
            ledger.remove(id);
            out.write_all(render_table(&ledger.ranked()).as_bytes())?;
            continue;
        }

        match form.focus {
            Field::Gold => {
                if !entry.is_empty() {
                    form.gold = entry.to_string();
                }
                form.focus = Field::Price;
            }
            Field::Price => {
                if !entry.is_empty() {
                    form.price = entry.to_string();
                }
                if form.submit(ledger).is_some() {
                    out.write_all(render_table(&ledger.ranked()).as_bytes())?;
                } else {
                    form.focus = Field::Gold;
                }
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W, form: &EntryForm) -> std::io::Result<()> {
    let (label, current) = match form.focus {
        Field::Gold => ("Gold amount", &form.gold),
        Field::Price => ("Price ($)", &form.price),
    };
    if current.is_empty() {
        write!(out, "{label}> ")?;
    } else {
        write!(out, "{label} [{current}]> ")?;
    }
    out.flush()
}
