use anyhow::Result;
use clap::Parser;
use scormpack::cli::ReplaceSolCli;
use scormpack::substitute;

fn main() -> Result<()> {
    let cli = ReplaceSolCli::parse();
    let output = cli.global.output_config();

    let count = substitute::substitute_file(&cli.input, &cli.output, &cli.marker, &cli.replacement)?;

    if output.json {
        output.print_json(&serde_json::json!({
            "input": cli.input,
            "output": cli.output,
            "marker": cli.marker,
            "replacement": cli.replacement,
            "replacements": count,
        }))?;
    }
    output.status(&format!(
        "Replaced {count} occurrence(s) of '{}' with '{}' in {}, saved to {}",
        cli.marker,
        cli.replacement,
        cli.input.display(),
        cli.output.display()
    ));

    Ok(())
}
