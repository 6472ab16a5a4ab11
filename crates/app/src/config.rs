//! Configuration for the huffcode application.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: without an input file it
//! encodes a generated sample line, and the seed is printed so the run is
//! reproducible.

use std::path::PathBuf;

/// Complete configuration for one encode/decode run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path (None = generate a sample line)
    pub input_file: Option<PathBuf>,

    /// Seed for sample-line generation
    pub seed: u64,

    /// Length of the generated sample line, in chars
    pub gen_chars: usize,

    /// Whether to print the diagnostic tree rendering
    pub print_tree: bool,

    /// Whether to print the symbol/frequency/code table
    pub print_table: bool,

    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no `--seed` is provided, a time-based seed is used (and printed,
    /// so the run can be repeated).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut gen_chars: Option<usize> = None;
        let mut print_tree = false;
        let mut print_table = true;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--gen-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--gen-chars requires a number".to_string());
                    }
                    gen_chars = Some(args[i].parse().map_err(|_| "invalid gen-chars")?);
                }
                "--print-tree" => {
                    print_tree = true;
                }
                "--no-table" => {
                    print_table = false;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            seed,
            gen_chars: gen_chars.unwrap_or(80),
            print_tree,
            print_table,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file: {}", path.display()),
            None => println!(
                "Input: generated sample line ({} chars, seed {})",
                self.gen_chars, self.seed
            ),
        }
        println!("Print tree: {}", self.print_tree);
        println!("Print table: {}", self.print_table);
        println!();
    }
}

fn print_help() {
    println!("huffcode: Huffman prefix codes for a line of text");
    println!();
    println!("USAGE:");
    println!("    huffcode [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>        Input file; its first line is encoded");
    println!("                       (default: generate a sample line)");
    println!("    --seed <N>         Seed for sample-line generation");
    println!("    --gen-chars <N>    Length of the sample line (default: 80)");
    println!();
    println!("    --print-tree       Print the diagnostic tree rendering");
    println!("    --no-table         Don't print the frequency/code table");
    println!("    --print-config     Print the resolved configuration");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffcode                       # Encode a random sample line");
    println!("    huffcode --seed 42             # Deterministic sample line");
    println!("    huffcode --in input.txt        # Encode the first line of a file");
    println!("    huffcode --in input.txt --print-tree");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();

        assert!(config.input_file.is_none());
        assert_eq!(config.gen_chars, 80);
        assert!(!config.print_tree);
        assert!(config.print_table);
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::from_args(&args(&[
            "--in",
            "input.txt",
            "--seed",
            "42",
            "--print-tree",
            "--no-table",
        ]))
        .unwrap();

        assert_eq!(config.input_file, Some(PathBuf::from("input.txt")));
        assert_eq!(config.seed, 42);
        assert!(config.print_tree);
        assert!(!config.print_table);
    }

    #[test]
    fn test_missing_flag_value() {
        assert!(Config::from_args(&args(&["--in"])).is_err());
        assert!(Config::from_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }
}
