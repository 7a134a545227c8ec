use anyhow::Result;
use clap::Parser;
use scormpack::cli::MakeScormCli;
use scormpack::cli::output::OutputConfig;
use scormpack::package::{self, PackageOutcome, PackageSummary};
use scormpack::scorm::scan::ImageDirStatus;
use scormpack::util::format_size;

fn main() -> Result<()> {
    let cli = MakeScormCli::parse();
    let output = cli.global.output_config();
    let config = cli.package_config();

    match package::package_directory(&config)? {
        PackageOutcome::NoContent => {
            if output.json {
                output.print_json(&serde_json::json!({
                    "created": false,
                    "source_dir": config.source_dir,
                    "html_files": 0,
                }))?;
            }
            output.status(&format!(
                "No HTML files found in {}.",
                config.source_dir.display()
            ));
        }
        PackageOutcome::Created(summary) => report(&summary, &output)?,
    }

    Ok(())
}

fn report(summary: &PackageSummary, output: &OutputConfig) -> Result<()> {
    if output.json {
        let mut info = serde_json::to_value(summary)?;
        info["created"] = serde_json::json!(true);
        return output.print_json(&info);
    }

    match summary.images_status {
        ImageDirStatus::Missing => output.status(&format!(
            "Images folder not found: {}",
            summary.images_dir.display()
        )),
        ImageDirStatus::Empty => output.status(&format!(
            "No files in images folder: {}",
            summary.images_dir.display()
        )),
        ImageDirStatus::Present => {}
    }

    let rows: Vec<Vec<String>> = summary
        .entries
        .iter()
        .map(|e| vec![e.name.clone(), format_size(e.size)])
        .collect();
    output.print_table(&["ENTRY", "SIZE"], &rows);
    for name in &summary.skipped {
        output.detail(&format!("Skipped duplicate entry: {name}"));
    }

    output.status(&format!(
        "SCORM package created: {}, with title: {}.",
        summary.output.display(),
        summary.title
    ));
    output.status(&format!(
        "{} html files and {} images added.",
        summary.html_files, summary.images_archived
    ));
    output.detail(&format!(
        "Manifest declares {} image(s) per resource",
        summary.manifest_assets
    ));

    Ok(())
}
