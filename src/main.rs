use anyhow::{Context, Result};
use clap::{App, Arg};
use std::io::{self, Write};
use std::path::PathBuf;
use typename_group::handler::{run, Config, OutputFormat};
use typename_group::records::DEFAULT_DISCRIMINANT;

fn main() -> Result<()> {
    let matches = App::new("group_by_typename")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Groups JSON records by their discriminant field")
        .arg(
            Arg::with_name("input")
                .help("JSON array or newline-delimited JSON file ('-' for stdin, .bz2 accepted)")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::with_name("key")
                .long("key")
                .short("k")
                .takes_value(true)
                .default_value(DEFAULT_DISCRIMINANT)
                .help("Discriminant field to group by"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .short("f")
                .takes_value(true)
                .possible_values(&["json", "csv"])
                .default_value("json"),
        )
        .arg(
            Arg::with_name("output-dir")
                .long("output-dir")
                .short("o")
                .takes_value(true)
                .default_value("output")
                .help("Directory for CSV files, one per group"),
        )
        .arg(
            Arg::with_name("lenient")
                .long("lenient")
                .help("Skip records without a string discriminant instead of failing"),
        )
        .arg(
            Arg::with_name("no-native")
                .long("no-native")
                .help("Group with the fold fallback instead of the native primitive"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .multiple(true)
                .help("Raise log verbosity (overrides RUST_LOG)"),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    match matches.occurrences_of("verbose") {
        0 => {}
        1 => {
            logger.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            logger.filter_level(log::LevelFilter::Trace);
        }
    }
    logger.init();

    let format: OutputFormat = matches
        .value_of("format")
        .unwrap_or("json")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let config = Config {
        input: PathBuf::from(matches.value_of("input").unwrap_or("-")),
        key: matches.value_of("key").unwrap_or(DEFAULT_DISCRIMINANT).to_string(),
        format,
        output_dir: PathBuf::from(matches.value_of("output-dir").unwrap_or("output")),
        lenient: matches.is_present("lenient"),
        disable_native: matches.is_present("no-native"),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run(&config, &mut out)
        .with_context(|| format!("failed to group records from {}", config.input.display()))?;
    out.flush()?;

    // Each skipped record was already logged by the parser.
    if !summary.warnings.is_empty() {
        eprintln!(
            "⚠️  Skipped {} records without a usable '{}' field",
            summary.warnings.len(),
            config.key
        );
    }
    if config.format == OutputFormat::Csv {
        eprintln!(
            "✅ Wrote {} groups ({} records) to '{}'",
            summary.groups,
            summary.records,
            config.output_dir.display()
        );
    }

    Ok(())
}
