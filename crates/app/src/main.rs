//! huffpack: compress and decompress files in the huffpack container
//! format.
//!
//! With no arguments, generates reproducible sample data, compresses it to
//! `./out.hpk`, verifies the round trip, and prints a stats summary.

mod config;
mod input_gen;

use std::fs;

use config::Config;
use huffpack_core::stats::CompressionStats;
use huffpack_core::{decode, decompress, framing, Encoder, HuffmanEncoder};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let result = if config.decompress {
        run_decompress(&config)
    } else {
        run_compress(&config)
    };

    if let Err(error) = result {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run_compress(config: &Config) -> huffpack_core::Result<()> {
    let data = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            println!(
                "No input file; generating {} bytes of sample data (seed {})",
                config.sample_bytes, config.seed
            );
            input_gen::generate_sample_data(config.seed, config.sample_bytes)
        }
    };

    let mut stats = CompressionStats::new();
    stats.input_bytes = data.len() as u64;

    let encoding = HuffmanEncoder::new().encode(&data)?;
    stats.table_entries = encoding.table.len() as u64;
    stats.payload_bits = encoding.bit_length as u64;

    let container = framing::pack(encoding.bit_length, &encoding.table, &encoding.payload)?;
    stats.container_bytes = container.len() as u64;

    fs::write(&config.output_file, &container)?;
    stats.complete();

    println!(
        "Compressed {} bytes -> {} bytes ({})",
        data.len(),
        container.len(),
        config.output_file.display()
    );

    if config.verify {
        let restored = decompress(&container)?;
        if restored == data {
            println!("Verification: PASSED");
        } else {
            println!("Verification: FAILED (round-trip mismatch)");
        }
    }

    if config.print_stats {
        stats.print_summary();
    }

    Ok(())
}

fn run_decompress(config: &Config) -> huffpack_core::Result<()> {
    // Presence of the input file is enforced during argument parsing.
    let Some(path) = config.input_file.as_ref() else {
        return Ok(());
    };
    let container = fs::read(path)?;

    let mut stats = CompressionStats::new();
    stats.container_bytes = container.len() as u64;

    let parsed = framing::unpack(&container)?;
    stats.table_entries = parsed.table.len() as u64;
    stats.payload_bits = parsed.bit_length as u64;

    let restored = decode::decode(&parsed.payload, parsed.bit_length, &parsed.table)?;
    stats.input_bytes = restored.len() as u64;

    fs::write(&config.output_file, &restored)?;
    stats.complete();

    println!(
        "Decompressed {} bytes -> {} bytes ({})",
        container.len(),
        restored.len(),
        config.output_file.display()
    );

    if config.print_stats {
        stats.print_summary();
    }

    Ok(())
}
