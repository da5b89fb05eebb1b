//! Exclass CLI
//!
//! Builds an `ExampleClass` from command-line flags, optionally on top of a
//! JSON snapshot, and prints the result.

use anyhow::Context;
use clap::builder::PossibleValue;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum, value_parser};
use exclass_model::ExampleClass;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Pretty,
    Text,
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Pretty, Self::Text]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Json => PossibleValue::new("json").help("Compact JSON snapshot"),
            Self::Pretty => PossibleValue::new("pretty").help("Indented JSON snapshot"),
            Self::Text => {
                PossibleValue::new("text").help("Quoted name and values on separate lines")
            }
        })
    }
}

#[derive(Debug)]
struct Options {
    name: Option<String>,
    values: Vec<i32>,
    input: Option<PathBuf>,
    format: OutputFormat,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            name: matches.get_one::<String>("name").cloned(),
            values: matches
                .get_many::<i32>("value")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
            input: matches.get_one::<PathBuf>("input").cloned(),
            format: matches
                .get_one::<OutputFormat>("format")
                .copied()
                .unwrap_or(OutputFormat::Json),
        }
    }
}

fn cli() -> Command {
    Command::new("exclass")
        .version("0.1.0")
        .about("Build and print a named list of integers")
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("TEXT")
                .help("Set the name")
                .num_args(1),
        )
        .arg(
            Arg::new("value")
                .short('v')
                .long("value")
                .value_name("INT")
                .help("Append a value (repeatable, applied in order)")
                .action(ArgAction::Append)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Start from a JSON snapshot")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(value_parser!(OutputFormat))
                .default_value("json"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("FILTER")
                .help("Log filter directive (defaults to RUST_LOG, then warn)"),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_one::<String>("log").map(String::as_str));

    let options = Options::from_matches(&matches);
    match run(&options) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &Options) -> Result<String, anyhow::Error> {
    let mut instance = match &options.input {
        Some(path) => load_snapshot(path)?,
        None => ExampleClass::new(),
    };

    if let Some(name) = &options.name {
        instance.set_name(name.as_str());
    }
    for value in &options.values {
        instance.add_value(*value);
    }
    tracing::debug!(values = instance.values().len(), "instance built");

    render(&instance, options.format)
}

fn load_snapshot(path: &Path) -> Result<ExampleClass, anyhow::Error> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
    ExampleClass::from_json(&content)
        .with_context(|| format!("failed to load snapshot from {}", path.display()))
}

fn render(instance: &ExampleClass, format: OutputFormat) -> Result<String, anyhow::Error> {
    let output = match format {
        OutputFormat::Json => instance.to_json()?,
        OutputFormat::Pretty => instance.to_json_pretty()?,
        OutputFormat::Text => format!("name: {:?}\nvalues: {:?}", instance.name(), instance.values()),
    };
    Ok(output)
}
