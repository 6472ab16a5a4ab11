//! huffcode: encode one line of text with a Huffman prefix code and
//! decode it back, reporting frequencies, codes and byte savings.
//!
//! The heavy lifting lives in `huffcode-core`; this binary only loads the
//! input (or generates a sample line), drives the pipeline and prints the
//! results. Empty input short-circuits before the core is invoked.

mod config;
mod input_gen;
mod report;
mod tree_printer;

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;

use log::{debug, error, info};

use huffcode_core::huffman::{build_code_table, build_tree, compute_frequencies, decode, encode};

use crate::config::Config;

/// Read the first line of the input file, without its line terminator.
/// A file with no first line reads as an empty string.
fn load_data(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn run(config: &Config, data: &str) -> huffcode_core::Result<()> {
    info!("--- start encoding ---");

    let frequencies = compute_frequencies(data);
    debug!(
        "{} chars, {} distinct symbols",
        data.chars().count(),
        frequencies.len()
    );

    let tree = build_tree(&frequencies)?;
    let codes = build_code_table(&tree);

    let encoded = encode(&codes, data)?;
    let decoded = decode(&encoded, &codes)?;

    if config.print_tree {
        tree_printer::print_tree(&tree);
        println!();
    }
    report::process_results(
        &frequencies,
        &codes,
        data,
        &encoded,
        &decoded,
        config.print_table,
    )?;

    info!("--- end ---");
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("try --help for usage");
            process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let data = match &config.input_file {
        Some(path) => match load_data(path) {
            Ok(line) => line,
            Err(e) => {
                error!("failed to read {}: {}", path.display(), e);
                eprintln!("error: failed to read {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            info!(
                "no input file, generating {} chars with seed {}",
                config.gen_chars, config.seed
            );
            input_gen::generate_sample_line(config.seed, config.gen_chars)
        }
    };

    if data.is_empty() {
        println!("Input data is empty! Try again with a file that has data inside!");
        return;
    }

    if let Err(e) = run(&config, &data) {
        error!("run failed: {}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
