//! Command-line front end for the huffpuff codec.
//!
//! This binary is a thin collaborator: it owns file paths, default output
//! names, the non-empty-input precondition, and diagnostics. All coding
//! logic lives behind `huffpuff::compress` / `huffpuff::decompress`.

use std::env;
use std::fs;
use std::process::ExitCode;

use colored::Colorize;

use huffpuff::{analyze, compress, decompress, HuffpuffConfig, HuffpuffError};

enum Mode {
    Compress,
    Extract,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("{} invalid number of arguments.", "Error:".red().bold());
        print_usage();
        return ExitCode::FAILURE;
    }

    let mode = match args[1].as_str() {
        "-c" | "--compress" => Mode::Compress,
        "-x" | "--extract" | "--decompress" | "--inflate" => Mode::Extract,
        other => {
            eprintln!("{} bad argument '{}'.", "Error:".red().bold(), other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let config = HuffpuffConfig::default();
    let input_path = args[2].clone();
    let output_path = args.get(3).cloned().unwrap_or_else(|| match mode {
        Mode::Compress => config.default_archive_name.clone(),
        Mode::Extract => config.default_restore_name.clone(),
    });

    match run(&mode, &input_path, &output_path, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(HuffpuffError::EmptyInput) => {
            eprintln!(
                "{} {} is an empty file.",
                "Error:".red().bold(),
                input_path
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    mode: &Mode,
    input_path: &str,
    output_path: &str,
    config: &HuffpuffConfig,
) -> Result<(), HuffpuffError> {
    let input = fs::read(input_path)?;
    if input.is_empty() {
        return Err(HuffpuffError::EmptyInput);
    }

    match mode {
        Mode::Compress => {
            log::info!("compressing {} ({} bytes)", input_path, input.len());
            let archive = compress(&input)?;
            fs::write(output_path, &archive)?;

            if config.emit_stats {
                let stats = analyze(&archive)?;
                let ratio = input.len() as f64 / stats.total_size as f64;
                println!(
                    "{} -> {}: {} bytes in, {} bytes out ({} tree bits, {} payload bits, {:.2}x)",
                    input_path,
                    output_path,
                    input.len(),
                    stats.total_size,
                    stats.tree_bits,
                    stats.payload_bits,
                    ratio
                );
            }
        }
        Mode::Extract => {
            log::info!("extracting {} ({} bytes)", input_path, input.len());
            let restored = decompress(&input)?;
            fs::write(output_path, &restored)?;
            println!(
                "{} -> {}: restored {} bytes",
                input_path,
                output_path,
                restored.len()
            );
        }
    }

    Ok(())
}

/// Prints the manual, in the case that a user makes a syntax error while
/// invoking the utility.
fn print_usage() {
    println!("\nNAME");
    println!("   huffpuff - a Huffman coding implementation\n");
    println!("SYNOPSIS");
    println!("   huffpuff [-c] [--compress] [-x] [--extract] [--decompress]");
    println!("   [--inflate] file ...\n");
    println!("DESCRIPTION");
    println!("   Compress files, and decompress huffpuff archives created by");
    println!("   this programme.\n");
    println!("OPTIONS");
    println!("   Mandatory arguments are as follows, plus the input file name.\n");
    println!("   -c, --compress");
    println!("       compress a file to a smaller binary archive\n");
    println!("   -x, --extract, --decompress, --inflate");
    println!("       decompress a binary archive back to its original form\n");
    println!("   Optionally an output file name can be specified (see usage)\n");
    println!("USAGE EXAMPLES");
    println!("   huffpuff -c inputfile.txt");
    println!("   huffpuff -x out.bin");
    println!("   huffpuff --compress inputfile.txt outputfile.bin");
    println!("   huffpuff --inflate outputfile.bin restored.txt\n");
}
