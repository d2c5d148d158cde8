//! # bind demo application
//!
//! A sample CLI tool that fills a nested config struct from flags, env vars
//! and declared defaults. It exists to demonstrate and manually verify the
//! binding rules.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example bind_demo
//! cargo run --example bind_demo -- --server-port 9000 echo
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature               | How to exercise it                                                  |
//! |-----------------------|---------------------------------------------------------------------|
//! | Declared defaults     | `cargo run --example bind_demo`                                     |
//! | Env var (derived)     | `BIND_DEMO_SERVER_PORT=9999 cargo run --example bind_demo`          |
//! | Env var (explicit)    | `DEMO_COLOR=red cargo run --example bind_demo`                      |
//! | Flag (derived)        | `cargo run --example bind_demo -- --server-host 0.0.0.0`            |
//! | Flag (explicit)       | `cargo run --example bind_demo -- --color blue`                     |
//! | Bool flag             | `cargo run --example bind_demo -- --verbose`                        |
//! | Duration              | `cargo run --example bind_demo -- --server-timeout 2m`              |
//! | Source report as JSON | `cargo run --example bind_demo -- json`                             |
//! | Usage text            | `cargo run --example bind_demo -- --help`                           |

mod config;

use clapbind::{BindError, Binder, Report};

use config::DemoConfig;

// ---------------------------------------------------------------------------
// ANSI color helpers
// ---------------------------------------------------------------------------

fn ansi_color_code(name: &str) -> &str {
    match name {
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn echo(config: &DemoConfig, report: &Report) {
    let color = ansi_color_code(&config.display.color);

    if config.verbose {
        println!("{color}[verbose] Resolved configuration for {:?}{RESET}", config.name);
        println!();
    }

    if config.display.format == "plain" {
        for entry in &report.entries {
            println!("{}={}", entry.flag, entry.value);
        }
        return;
    }

    let max_key_len = report
        .entries
        .iter()
        .map(|e| e.flag.len())
        .max()
        .unwrap_or(0);
    for entry in &report.entries {
        if config.verbose {
            println!(
                "{color}{:<max_key_len$}{RESET}  {}  ({})",
                entry.flag, entry.value, entry.source
            );
        } else {
            println!("{color}{:<max_key_len$}{RESET}  {}", entry.flag, entry.value);
        }
    }
}

fn json(report: &Report) {
    match report.to_json() {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to render report:\n{e}");
            std::process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let mut config = DemoConfig::default();
    let report = Binder::new()
        .env_prefix("BIND_DEMO")
        .program_name("bind-demo")
        .bind(&mut config, "")
        .unwrap_or_else(|e| match e {
            BindError::Flags(e) => e.exit(),
            e => {
                eprintln!("Failed to bind config:\n{e}");
                std::process::exit(1);
            }
        });

    match report.remaining.first().map(String::as_str) {
        None | Some("echo") => echo(&config, &report),
        Some("json") => json(&report),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            std::process::exit(1);
        }
    }
}
