//! Order positioned page content from JSON
//!
//! Reads a JSON array of content objects (`{"id", "kind", "bbox"}`) and
//! prints the reading order of every page as JSON.
//!
//! Usage:
//!   cargo run --release --bin order_page -- --input page.json
//!   cat page.json | cargo run --release --bin order_page -- --reading-order simple --pretty

use pdf_reading_order::{
    ContentObject, Error, ReadingOrderConfig, ReadingOrderPipeline, ReadingOrderStrategyType,
    Result, XYCutConfig,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: order_page [OPTIONS]

Options:
  --input <path>               Read objects from a file instead of stdin
  --reading-order <strategy>   xycut (default), simple or off
  --beta <f64>                 Cross-layout width multiplier (default: 2.0)
  --density-threshold <f64>    Density threshold (default: 0.9)
  --parallel                   Order pages in parallel
  --pretty                     Pretty-print the output
  --verbose, -v                Debug logging
  --help, -h                   Show this message";

/// One page of output.
#[derive(Debug, Serialize)]
struct PageOutput {
    page_number: u32,
    order: Vec<u64>,
}

struct OrderConfig {
    input: Option<PathBuf>,
    reading_order: ReadingOrderConfig,
    pretty: bool,
    verbose: bool,
    help: bool,
}

impl OrderConfig {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    fn parse(args: &[String]) -> Result<Self> {
        let mut input = None;
        let mut strategy = ReadingOrderStrategyType::default();
        let mut xycut = XYCutConfig::default();
        let mut parallel = false;
        let mut pretty = false;
        let mut verbose = false;
        let mut help = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--input" | "-i" => {
                    i += 1;
                    input = Some(PathBuf::from(value_of(args, i, "--input")?));
                },
                "--reading-order" => {
                    i += 1;
                    strategy = value_of(args, i, "--reading-order")?.parse()?;
                },
                "--beta" => {
                    i += 1;
                    xycut.beta = parse_f64(value_of(args, i, "--beta")?, "--beta")?;
                },
                "--density-threshold" => {
                    i += 1;
                    xycut.density_threshold = parse_f64(
                        value_of(args, i, "--density-threshold")?,
                        "--density-threshold",
                    )?;
                },
                "--parallel" => parallel = true,
                "--pretty" => pretty = true,
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => help = true,
                other => {
                    return Err(Error::InvalidArgument(format!("unknown option '{}'", other)));
                },
            }
            i += 1;
        }

        let reading_order = ReadingOrderConfig::new()
            .with_strategy(strategy)
            .with_xycut(xycut)
            .with_parallel_pages(parallel);
        reading_order.validate()?;

        Ok(Self {
            input,
            reading_order,
            pretty,
            verbose,
            help,
        })
    }
}

fn value_of<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::InvalidArgument(format!("{} requires a value", flag)))
}

fn parse_f64(value: &str, flag: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{} expects a number, got '{}'", flag, value)))
}

fn read_objects(input: Option<&PathBuf>) -> Result<Vec<ContentObject>> {
    let objects = match input {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            serde_json::from_str(&buffer)?
        },
    };
    Ok(objects)
}

fn run(config: OrderConfig) -> Result<()> {
    let objects = read_objects(config.input.as_ref())?;
    log::info!("Read {} objects", objects.len());

    let pipeline = ReadingOrderPipeline::with_config(config.reading_order)?;
    let pages = pipeline.process_document(objects)?;

    let output: Vec<PageOutput> = pages
        .into_iter()
        .map(|page| PageOutput {
            page_number: page.page_number,
            order: page.objects.iter().map(|o| o.object.id).collect(),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.pretty {
        serde_json::to_writer_pretty(&mut out, &output)?;
    } else {
        serde_json::to_writer(&mut out, &output)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> ExitCode {
    let config = match OrderConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        },
    };
    if config.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
