use std::io::{self, BufRead, Write};

use trivenn::RawEntry;

/// Form shape. The row cap mirrors the fixed-layout table this tool grew
/// out of; it is an upper bound on input size, not a requirement.
#[derive(Debug, Clone)]
pub struct FormOptions {
    pub max_rows: usize,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self { max_rows: 15 }
    }
}

/// Collects up to `max_rows` (center, surface-function-list) pairs.
///
/// Prompts go to `prompt` (stderr in the binary, so stdout stays clean for
/// the `Saved:` lines). A row left blank on both fields submits early, as
/// does end of input. Values are passed through untrimmed; normalization
/// owns whitespace handling.
pub fn collect_entries<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
    options: &FormOptions,
) -> io::Result<Vec<RawEntry>> {
    writeln!(
        prompt,
        "Enter up to {} rows. Surface functions are comma-separated; a fully blank row submits.",
        options.max_rows
    )?;

    let mut entries = Vec::new();
    for row in 1..=options.max_rows {
        write!(prompt, "Center {row}: ")?;
        prompt.flush()?;
        let Some(center) = read_line(input)? else {
            break;
        };

        write!(prompt, "Surface functions {row}: ")?;
        prompt.flush()?;
        let Some(functions) = read_line(input)? else {
            if !center.trim().is_empty() {
                entries.push(RawEntry::new(center, ""));
            }
            break;
        };

        if center.trim().is_empty() && functions.trim().is_empty() {
            break;
        }
        entries.push(RawEntry::new(center, functions));
    }

    tracing::debug!(entries = entries.len(), "form submitted");
    Ok(entries)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
