//! Endorsement Form CLI
//!
//! Usage:
//!   endorsement-form [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --set <KEY=VALUE>     Set one field (repeatable)
//!   -c, --config <FILE>       Settings file (TOML format)
//!   -b, --background <FILE>   Background JPEG path or data URI
//!   -o, --output-dir <DIR>    Directory to save the PDF in
//!   --stdout                  Write the PDF to stdout instead
//!   -f, --fields              Show the field reference
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use endorsement_form::form::{parse_fields, prompt_fields, Assignment, InputSource};
use endorsement_form::{
    export, DirectoryEmitter, DownloadEmitter, EmitOutcome, ExportError, Field, FormState,
    InputError, Overrides, Settings, WriterEmitter,
};

#[derive(Parser)]
#[command(name = "endorsement-form")]
#[command(about = "Fill the GCA endorsement form and export it as a PDF")]
struct Cli {
    /// TOML field file (read from stdin when omitted, stdin is not a terminal,
    /// and no --set is given)
    input: Option<PathBuf>,

    /// Set one field, e.g. --set lastName=Smith (repeatable, applied last)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<Assignment>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background JPEG path or data URI
    #[arg(short, long)]
    background: Option<String>,

    /// Directory to save the PDF in
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write the PDF to stdout instead of saving a file
    #[arg(long)]
    stdout: bool,

    /// Wrap long notes inside the notes box
    #[arg(long)]
    wrap_notes: bool,

    /// Name the file exactly as the original web form did
    #[arg(long)]
    legacy_filename: bool,

    /// Leave the page content stream uncompressed
    #[arg(long)]
    no_compress: bool,

    /// Show the field reference
    #[arg(short, long)]
    fields: bool,

    /// Log each render step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.fields {
        print_fields();
        return;
    }

    if let Err(e) = run(cli) {
        // Export errors already carry their cause in the message
        if e.downcast_ref::<ExportError>().is_some() {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "endorsement_form=debug"
    } else {
        "endorsement_form=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading settings '{}'", path.display()))?,
        None => Settings::default(),
    };

    let mut form = read_form(&cli)?;
    form.apply(&cli.set);

    let overrides = Overrides {
        background: cli.background.clone(),
        output_dir: cli.output_dir.clone(),
        wrap_notes: cli.wrap_notes,
        no_compress: cli.no_compress,
        legacy_filename: cli.legacy_filename,
    };
    let config = settings.export_config_with(&overrides);

    let mut emitter: Box<dyn DownloadEmitter> = if cli.stdout {
        Box::new(WriterEmitter::new(io::stdout().lock()))
    } else {
        Box::new(DirectoryEmitter::new(settings.output_dir_with(&overrides)))
    };

    let receipt = export(form.snapshot(), &config, emitter.as_mut())?;
    if let EmitOutcome::Saved(path) = receipt.outcome {
        println!("{}", path.display());
    }
    Ok(())
}

/// Collect initial field values from a file, stdin, or interactive prompts
fn read_form(cli: &Cli) -> Result<FormState> {
    let stdin = io::stdin();
    let source = InputSource::select(cli.input.as_deref(), !cli.set.is_empty(), stdin.is_terminal());

    match source {
        InputSource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading field file '{}'", path.display()))?;
            Ok(FormState::from_fields(parse_or_exit(&text, path)))
        }
        InputSource::Empty => Ok(FormState::new()),
        InputSource::Prompt => {
            let mut form = FormState::new();
            prompt_fields(&mut form, stdin.lock(), io::stderr()).context("reading answers")?;
            Ok(form)
        }
        InputSource::Stdin => {
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .context("reading field file from stdin")?;
            Ok(FormState::from_fields(parse_or_exit(&text, Path::new("<stdin>"))))
        }
    }
}

fn parse_or_exit(source: &str, path: &Path) -> endorsement_form::FieldSet {
    match parse_fields(source) {
        Ok(fields) => fields,
        Err(e) => {
            report_input_error(&e, source, path);
            std::process::exit(1);
        }
    }
}

fn report_input_error(error: &InputError, source: &str, path: &Path) {
    eprint!("{}", error.format(source, &path.display().to_string()));
}

fn print_fields() {
    println!("FIELDS (in form order)");
    println!("======================");
    for field in Field::ALL {
        println!("{:<15} {}", field.key(), field.prompt());
    }
    println!(
        r#"
Field files are flat TOML tables of strings:

    bankName = "First National"
    lastName = "Smith"
    traceNumber = "T100"

Unset fields render empty. The PDF is named <lastName>_<firstName>_<traceNumber>.pdf,
with "Unknown" standing in for any of the three that are empty."#
    );
}
