use crate::model::Operation;
use crate::solve::{SolutionSequence, SolveResult};
use std::fmt::Write;

/// Renders the per-word results and the trailing summary arrays.
///
/// The combined value is recomputed from the solved pair so the caller
/// can eyeball that the operands really rebuild the target.
pub fn render(sequence: &SolutionSequence, op: Operation) -> String {
    let mut out = String::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (word, result) in sequence {
        match result {
            SolveResult::Satisfiable { x, y } => {
                let combined = op.apply(*x, *y);
                let _ = writeln!(
                    out,
                    "x = {:#x} y = {:#x} combined = {:#x} (\"{}\")",
                    x,
                    y,
                    combined,
                    ascii_echo(combined)
                );
                xs.push(*x);
                ys.push(*y);
            }
            SolveResult::Unsatisfiable { assertions } => {
                let _ = writeln!(out, "word {word}: unsat");
                let _ = writeln!(out, "{assertions}");
            }
            SolveResult::Unknown { reason } => {
                let _ = writeln!(
                    out,
                    "word {word}: unknown ({})",
                    reason.as_deref().unwrap_or("no reason given")
                );
            }
        }
    }

    let _ = writeln!(out, "\n{} Values:", op.as_str());
    let _ = writeln!(out, "x = [{}]", hex_array(&xs));
    let _ = writeln!(out, "y = [{}]", hex_array(&ys));
    out
}

fn hex_array(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| format!("{v:#x}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Big-endian bytes of the combined word as printable ASCII, with
/// everything else escaped, mirroring how the payload would read.
fn ascii_echo(combined: u32) -> String {
    combined
        .to_be_bytes()
        .iter()
        .map(|&b| {
            if (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\' {
                (b as char).to_string()
            } else {
                format!("\\x{b:02x}")
            }
        })
        .collect()
}
