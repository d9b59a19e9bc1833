// handler/mod.rs
use crate::errors::Result;
use crate::file_io::open_input;
use crate::group::{force_fallback, group_by_typename};
use crate::parser::extract_records;
use crate::records::DEFAULT_DISCRIMINANT;
use crate::utils::{export_to_csv, export_to_json};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Input file; `-` for stdin.
    pub input: PathBuf,
    pub key: String,
    pub format: OutputFormat,
    /// Where CSV files go, one per group.
    pub output_dir: PathBuf,
    pub lenient: bool,
    pub disable_native: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("-"),
            key: DEFAULT_DISCRIMINANT.to_string(),
            format: OutputFormat::Json,
            output_dir: PathBuf::from("output"),
            lenient: false,
            disable_native: false,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub groups: usize,
    pub warnings: Vec<String>,
}

/// Reads, groups and exports records as `config` describes.
///
/// JSON output goes to `out`; CSV output is written under `config.output_dir`.
/// With `config.disable_native` the fold fallback is used for this run only.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Summary> {
    let _fallback = config.disable_native.then(force_fallback);

    let mut reader = open_input(&config.input)?;
    let (records, warnings) = extract_records(&mut reader, &config.key, config.lenient)?;
    debug!("read {} records from {}", records.len(), config.input.display());

    let record_count = records.len();
    let grouped = group_by_typename(records);
    let group_count = grouped.len();

    match config.format {
        OutputFormat::Json => export_to_json(out, &grouped)?,
        OutputFormat::Csv => {
            if !config.output_dir.exists() {
                fs::create_dir_all(&config.output_dir)?;
            }
            let mut used = HashSet::new();
            for (typename, group) in grouped.iter() {
                let stem = unique_stem(typename, &mut used);
                let file_path = config.output_dir.join(format!("{}.csv", stem));
                export_to_csv(&file_path, group)?;
            }
        }
    }

    info!("grouped {} records into {} groups", record_count, group_count);
    Ok(Summary {
        records: record_count,
        groups: group_count,
        warnings,
    })
}

// Discriminants are arbitrary strings; keep them from escaping the output directory.
fn file_stem(typename: &str) -> String {
    let stem: String = typename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem
    }
}

// Distinct typenames can share a stem ("A.B" and "A_B"), or differ only in case, which
// collides on case-insensitive filesystems. Later groups get a numeric suffix.
fn unique_stem(typename: &str, used: &mut HashSet<String>) -> String {
    let base = file_stem(typename);
    let mut stem = base.clone();
    let mut n = 2;
    while !used.insert(stem.to_lowercase()) {
        stem = format!("{}-{}", base, n);
        n += 1;
    }
    if stem != base {
        warn!("typename '{}' written as '{}.csv' to avoid a name clash", typename, stem);
    }
    stem
}
