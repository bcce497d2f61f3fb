//! Build script for lumen-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates board.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lumen_core::config::BoardConfig;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml at compile time
///
/// The firmware parses the same file again at boot with a no_std parser;
/// catching mistakes here keeps a bad file from silently falling back to
/// defaults on the board.
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &e.to_string()),
    };

    // Full TOML syntax plus field names and types
    let config: BoardConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid board.toml", &e.to_string()),
    };

    // Hardware ranges
    if let Err(e) = config.validate() {
        fail("Unsupported value in board.toml", &e.to_string());
    }

    // The boot-time parser accepts a subset of TOML; make sure it agrees
    match lumen_core::config::parse_board_config(&content) {
        Ok(parsed) if parsed == config => {}
        Ok(_) => fail(
            "board.toml parses differently at boot",
            "use only [section] headers and `key = integer` lines",
        ),
        Err(e) => fail("board.toml uses syntax the boot-time parser rejects", &e.to_string()),
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    let body = detail
        .lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
