// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! CLI for shroud-core.
//!
//! ```bash
//! shroud encrypt photo.png scrambled.png --seed 42
//! shroud decrypt scrambled.png restored.png --seed 42
//! ```
//!
//! The seed must be identical across the encrypt/decrypt pair. A missing
//! input path exits with code 2; all other failures exit with code 1.

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use shroud_core::{decrypt_pixels, encrypt_pixels, RasterImage};

#[derive(Parser)]
#[command(
    name = "shroud",
    version,
    about = "Seed-deterministic image obfuscation: pixel permutation + channel XOR"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble an image; the same seed decrypts it
    Encrypt {
        /// Input image path
        input: String,
        /// Output image path
        output: String,
        /// Integer seed (same for encrypt/decrypt)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i64,
    },
    /// Restore an image scrambled with the same seed
    Decrypt {
        /// Input image path
        input: String,
        /// Output image path
        output: String,
        /// Integer seed (same for encrypt/decrypt)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let (input, output, seed, decrypt) = match cli.command {
        Commands::Encrypt { input, output, seed } => (input, output, seed, false),
        Commands::Decrypt { input, output, seed } => (input, output, seed, true),
    };

    if !Path::new(&input).exists() {
        eprintln!("error: input file not found: {input}");
        process::exit(2);
    }

    if let Err(e) = run(&input, &output, seed, decrypt) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(input: &str, output: &str, seed: i64, decrypt: bool) -> Result<(), String> {
    let img = RasterImage::load(input).map_err(|e| e.to_string())?;

    let processed = if decrypt {
        decrypt_pixels(&img.pixels, seed)
    } else {
        encrypt_pixels(&img.pixels, seed)
    }
    .map_err(|e| e.to_string())?;

    let (width, height) = (img.width(), img.height());
    img.with_pixels(processed)
        .and_then(|out| out.save(output))
        .map_err(|e| e.to_string())?;

    let verb = if decrypt { "decrypted" } else { "encrypted" };
    eprintln!("{verb} {width}x{height} -> {output}");
    Ok(())
}
