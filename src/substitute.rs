use anyhow::Context;
use std::path::Path;

/// LaTeX macro that wraps solutions in question sheets.
pub const SOLUTION_MARKER: &str = r"\sol{";

/// What the marker becomes so pandoc renders the solution in blue.
pub const SOLUTION_REPLACEMENT: &str = r"\textcolor{blue}{";

/// Replace every literal occurrence of `marker`, returning the new text and the match count.
pub fn replace_markers(content: &str, marker: &str, replacement: &str) -> (String, usize) {
    if marker.is_empty() {
        return (content.to_string(), 0);
    }
    let count = content.matches(marker).count();
    (content.replace(marker, replacement), count)
}

/// Rewrite `input` into `output` with every `marker` replaced.
pub fn substitute_file(
    input: &Path,
    output: &Path,
    marker: &str,
    replacement: &str,
) -> anyhow::Result<usize> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let (result, count) = replace_markers(&content, marker, replacement);
    std::fs::write(output, result).with_context(|| format!("writing {}", output.display()))?;
    Ok(count)
}
