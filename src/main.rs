mod error;
mod logging;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use exifcase_case::{AssembleOptions, assemble, jsonld_options};
use exifcase_config::Config;
use exifcase_extract::{decode_file, file_info};
use exn::ResultExt;

use crate::error::{ErrorKind, Result};

/// Describe an image file as a UCO/CASE observable object in JSON-LD.
#[derive(Debug, Parser)]
#[command(name = "exifcase", version, about)]
struct Args {
    /// The image to describe.
    file: PathBuf,

    /// Configuration file to load on top of the user configuration.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also emit the content data facet.
    #[arg(long)]
    content_facet: bool,

    /// Spaces per JSON indentation level; 0 prints a single line.
    #[arg(long, value_name = "N")]
    indent: Option<usize>,
}
impl Args {
    fn apply(&self, config: &mut Config) {
        if self.content_facet {
            config.graph.content_facet = true;
        }
        if let Some(indent) = self.indent {
            config.output.indent = indent;
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    args.apply(&mut config);
    logging::init(&config.log, args.verbose)?;

    let document = describe(&args.file, &config)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}").or_raise(|| ErrorKind::Output)?;
    stdout.flush().or_raise(|| ErrorKind::Output)
}

/// Extract, map and serialize one file.
fn describe(path: &Path, config: &Config) -> Result<String> {
    tracing::info!(path = %path.display(), "Describing file");
    let info = file_info(path);
    let record = decode_file(path).or_raise(|| ErrorKind::Extract)?;
    let options = AssembleOptions {
        content_facet: config.graph.content_facet,
    };
    let graph = assemble(&record, &info, &options).or_raise(|| ErrorKind::Mapping)?;
    exifcase_graph::to_string(&graph, &jsonld_options(&config.graph.kb, config.output.indent))
        .or_raise(|| ErrorKind::Output)
}
