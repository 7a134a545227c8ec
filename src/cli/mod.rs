pub mod output;

use crate::package::{DEFAULT_IMAGES_DIR, DEFAULT_OUTPUT, DEFAULT_TITLE, PackageConfig};
use crate::substitute::{SOLUTION_MARKER, SOLUTION_REPLACEMENT};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Output flags shared by both tools
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

impl GlobalArgs {
    pub fn output_config(&self) -> output::OutputConfig {
        output::OutputConfig::from_global(self.json, self.verbose, self.quiet, self.no_color)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "make-scorm",
    version,
    about = "Package the HTML files in a directory as a SCORM 1.2 zip",
    after_help = "All .html files in the directory are added to the package, plus every file under the images folder.\n\nExample: make-scorm \"Lecture Notes\" pictures"
)]
pub struct MakeScormCli {
    /// Title of the SCORM package
    #[arg(default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Folder of images to include, relative to the source directory
    #[arg(default_value = DEFAULT_IMAGES_DIR)]
    pub images: PathBuf,

    /// Directory containing the HTML files
    #[arg(long = "dir", short = 'C', default_value = ".")]
    pub source_dir: PathBuf,

    /// Path of the zip to write
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl MakeScormCli {
    pub fn package_config(&self) -> PackageConfig {
        PackageConfig {
            source_dir: self.source_dir.clone(),
            output: self.output.clone(),
            title: self.title.clone(),
            images_dir: self.images.clone(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "replace-sol",
    version,
    about = "Replace \\sol{ with \\textcolor{blue}{ in a LaTeX file so pandoc keeps the solutions",
    after_help = "Example: replace-sol input.tex output.tex"
)]
pub struct ReplaceSolCli {
    /// LaTeX file to read
    pub input: PathBuf,

    /// File to write the result to
    pub output: PathBuf,

    /// Literal text to replace
    #[arg(long, default_value = SOLUTION_MARKER)]
    pub marker: String,

    /// Literal text to put in its place
    #[arg(long, default_value = SOLUTION_REPLACEMENT)]
    pub replacement: String,

    #[command(flatten)]
    pub global: GlobalArgs,
}
