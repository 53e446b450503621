//! Command-line interface for pyhtml
//!
//! Compiles a pyhtml file to HTML, or prints one of the intermediate representations.
//!
//! Usage:
//!   pyhtml `<PYHTML_FILE>` [`<HTML_FILE>`]            - Compile, writing next to the source by default
//!   pyhtml `<PYHTML_FILE>` --stdout                   - Compile to standard output
//!   pyhtml `<PYHTML_FILE>` --emit tokens|ast|tree     - Print the token list, JSON tree or treeviz
//!
//! Configuration comes from the embedded defaults, then `--config <FILE>` or, without it, a
//! `pyhtml.toml` next to the source file if there is one. Logging goes to stderr: `--debug`
//! forces the `debug` filter, otherwise `RUST_LOG` and then the configured level apply.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pyhtml::formats::treeviz::to_treeviz_str;
use pyhtml::token::to_json;
use pyhtml::transforms::standard::{LEXING, TO_AST, TO_HTML};
use pyhtml::CompileError;
use pyhtml_config::{ConfigError, Loader, PyhtmlConfig, PROJECT_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn build_cli() -> Command {
    Command::new("pyhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile pyhtml documents to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pyhtml_file")
                .help("Path to the pyhtml source")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("html_file")
                .help("Output path (default: the source path with the configured extension)")
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Log the compiler's progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .help("What to produce. Inspection outputs print to stdout unless a path is given")
                .value_parser(["html", "tree", "tokens", "ast"])
                .default_value("html"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the output instead of writing a file")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let debug_flag = matches.get_flag("debug");
    let input = matches
        .get_one::<PathBuf>("pyhtml_file")
        .expect("input path is required");
    let config = load_config(input, matches.get_one::<PathBuf>("config"), debug_flag)?;
    init_logging(debug_flag, &config.logging.level);
    let emit = matches
        .get_one::<String>("emit")
        .map(String::as_str)
        .unwrap_or("html");

    let source = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.clone(),
        source,
    })?;
    info!(path = %input.display(), bytes = source.len(), emit, "compiling");

    let mut output = render(&source, emit)?;
    if config.output.trailing_newline && !output.ends_with('\n') {
        output.push('\n');
    }

    let target = match matches.get_one::<PathBuf>("html_file") {
        Some(path) => Some(path.clone()),
        None if emit == "html" => Some(default_output_path(input, &config.output.extension)),
        None => None,
    };

    match target {
        Some(path) if !matches.get_flag("stdout") => {
            fs::write(&path, output).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "wrote output");
        }
        _ => print!("{output}"),
    }
    Ok(())
}

fn load_config(
    input: &Path,
    explicit: Option<&PathBuf>,
    debug_flag: bool,
) -> Result<PyhtmlConfig, ConfigError> {
    let mut loader = Loader::new();
    loader = match explicit {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(project_config_path(input)),
    };
    if debug_flag {
        loader = loader.set_override("logging.level", "debug")?;
    }
    loader.build()
}

fn init_logging(debug_flag: bool, level: &str) {
    let filter = if debug_flag {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(level, "logging initialized");
}

/// Produce the requested output for a source document.
fn render(source: &str, emit: &str) -> Result<String, CliError> {
    let output = match emit {
        "tokens" => to_json(&LEXING.run(source.to_string())?)?,
        "ast" => serde_json::to_string_pretty(&TO_AST.run(source.to_string())?)?,
        "tree" => to_treeviz_str(&TO_AST.run(source.to_string())?),
        _ => TO_HTML.run(source.to_string())?,
    };
    Ok(output)
}

/// The project configuration file that applies to `input`.
fn project_config_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(PROJECT_FILE)
}

fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}
