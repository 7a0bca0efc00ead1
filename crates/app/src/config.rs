//! Configuration for the huffpack command-line tool.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no input file it
//! generates reproducible sample data, compresses it, and verifies the
//! round trip. All defaults are printed on request so runs are
//! reproducible.

use std::path::PathBuf;

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input file path (None = generate sample)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    // === Mode ===
    /// Decompress instead of compress
    pub decompress: bool,

    // === Sample generation ===
    /// Random seed for sample data
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Verify compressed output by decompressing and comparing
    pub verify: bool,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the stats summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no --seed is provided, a time-based seed is used (and printable
    /// with --print-config, so any run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut decompress = false;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut verify = true;
        let mut print_config = false;
        let mut print_stats = true;

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
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--decompress" | "-d" => {
                    decompress = true;
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--no-verify" => {
                    verify = false;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
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

        if decompress && input_file.is_none() {
            return Err("--decompress requires --in".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        let config = Config {
            input_file,
            output_file: output_file.unwrap_or_else(|| {
                PathBuf::from(if decompress { "./out.bin" } else { "./out.hpk" })
            }),
            decompress,
            seed,
            sample_bytes: sample_bytes.unwrap_or(65536),
            verify,
            print_config,
            print_stats,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Mode:        {}",
            if self.decompress { "decompress" } else { "compress" }
        );
        println!(
            "Input file:  {}",
            self.input_file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("(generate sample)")
        );
        println!(
            "Output file: {}",
            self.output_file.to_str().unwrap_or("(non-utf8 path)")
        );
        println!();
        println!("Seed: {}", self.seed);
        println!(
            "Sample size: {} bytes ({} KiB)",
            self.sample_bytes,
            self.sample_bytes / 1024
        );
        println!("Verify: {}", self.verify);
        println!();
    }
}

fn print_help() {
    println!("huffpack: compress and decompress huffpack containers");
    println!();
    println!("USAGE:");
    println!("    huffpack [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input file (default: generate sample)");
    println!("    --out <PATH>          Output file (default: ./out.hpk, or ./out.bin with -d)");
    println!("    --decompress, -d      Decompress instead of compress (requires --in)");
    println!();
    println!("    --seed <N>            Random seed for sample data");
    println!("    --sample-bytes <N>    Generated sample size (default: 65536)");
    println!();
    println!("    --no-verify           Skip round-trip verification after compressing");
    println!("    --print-config        Print resolved configuration");
    println!("    --no-stats            Don't print the stats summary");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack                              # Compress generated sample data");
    println!("    huffpack --seed 42 --print-config     # Deterministic sample run");
    println!("    huffpack --in file.bin --out file.hpk # Compress a specific file");
    println!("    huffpack -d --in file.hpk --out file  # Decompress a container");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_arguments() {
        let config = Config::from_args(&[]).unwrap();

        assert!(config.input_file.is_none());
        assert!(!config.decompress);
        assert!(config.verify);
        assert_eq!(config.sample_bytes, 65536);
        assert_eq!(config.output_file, PathBuf::from("./out.hpk"));
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::from_args(&args(&[
            "--in",
            "data.bin",
            "--out",
            "data.hpk",
            "--seed",
            "99",
            "--no-verify",
        ]))
        .unwrap();

        assert_eq!(config.input_file, Some(PathBuf::from("data.bin")));
        assert_eq!(config.output_file, PathBuf::from("data.hpk"));
        assert_eq!(config.seed, 99);
        assert!(!config.verify);
    }

    #[test]
    fn test_decompress_default_output() {
        let config = Config::from_args(&args(&["-d", "--in", "x.hpk"])).unwrap();
        assert!(config.decompress);
        assert_eq!(config.output_file, PathBuf::from("./out.bin"));
    }

    #[test]
    fn test_decompress_requires_input() {
        let result = Config::from_args(&args(&["--decompress"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_value() {
        assert!(Config::from_args(&args(&["--in"])).is_err());
        assert!(Config::from_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let result = Config::from_args(&args(&["--bogus"]));
        assert!(result.is_err());
    }
}
