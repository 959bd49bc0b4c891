use std::path::PathBuf;

use clap::Parser;

/// Terraform State to HCL
///
/// Generates hand-written-style HCL resource blocks from the `*.tfstate`
/// files in a directory, as a starting point for importing already
/// provisioned infrastructure into Terraform configuration.
///
/// DISCLAIMER: The generated blocks are a best-effort textual projection of
/// the state document. Manual review is expected before the files are used
/// as real configuration.
#[derive(Parser, Debug)]
#[command(name = "tfstate2hcl")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Directory scanned for *.tfstate files
    #[arg(short = 'd', long = "working-dir")]
    pub working_dir: Option<PathBuf>,

    /// Directory the generated .tf files are written to
    /// (default: <working-dir>/output)
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Label policy for instances with an index key: name-index, index
    #[arg(short = 'l', long = "label-style", default_value = "name-index")]
    pub label_style: LabelStyle,

    /// Do not run `terraform fmt` on the generated files
    #[arg(long = "skip-fmt")]
    pub skip_fmt: bool,
}

/// How the resource label of an indexed instance is composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelStyle {
    /// `<name>_<index_key>`
    #[default]
    NameIndex,
    /// Bare `<index_key>`
    Index,
}
