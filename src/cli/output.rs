use std::io::{self, IsTerminal, Write};

/// How a tool reports progress: plain lines, JSON, or nothing.
pub struct OutputConfig {
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
    /// Pad table columns for a terminal instead of writing tab-separated rows.
    pub aligned: bool,
}

impl OutputConfig {
    pub fn from_global(json: bool, verbose: bool, quiet: bool, no_color: bool) -> Self {
        let no_color = no_color || std::env::var_os("NO_COLOR").is_some();
        Self {
            json,
            verbose,
            quiet,
            aligned: !no_color && io::stdout().is_terminal(),
        }
    }

    fn shows_text(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Status line, hidden by `--quiet` and `--json`.
    pub fn status(&self, msg: &str) {
        if self.shows_text() {
            println!("{msg}");
        }
    }

    /// Only with `--verbose`.
    pub fn detail(&self, msg: &str) {
        if self.verbose && self.shows_text() {
            println!("{msg}");
        }
    }

    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    /// Verbose-only table, e.g. the archive listing.
    pub fn print_table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if !self.verbose || !self.shows_text() || rows.is_empty() {
            return;
        }
        for line in table_lines(headers, rows, self.aligned) {
            println!("{line}");
        }
    }
}

/// Render a table as padded columns with a rule under the header, or as TSV.
fn table_lines(headers: &[&str], rows: &[Vec<String>], aligned: bool) -> Vec<String> {
    if !aligned {
        let mut lines = vec![headers.join("\t")];
        lines.extend(rows.iter().map(|row| row.join("\t")));
        return lines;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![pad_row(headers, &widths), rule.join("  ")];
    lines.extend(rows.iter().map(|row| pad_row(row, &widths)));
    lines
}

fn pad_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{:<w$}", c.as_ref()))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
