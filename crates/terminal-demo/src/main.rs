// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal demo
//
// Entry point. Initialises logging, loads the terminal config, and runs the
// scripted flows against the platform bridge, printing every boundary call.
//
// Usage: terminal-demo [--config <path>] [--write-config]
// The config path may also come from TERMINAL_DEMO_CONFIG.

mod flows;

use std::path::PathBuf;
use std::process::ExitCode;

use terminal_bridge::{TerminalModule, platform_bridge};
use terminal_core::TerminalConfig;

use flows::Session;

const CONFIG_ENV: &str = "TERMINAL_DEMO_CONFIG";
const DEFAULT_CONFIG: &str = "terminal.json";

struct Args {
    config: PathBuf,
    write_config: bool,
}

fn parse_args() -> Args {
    let mut config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let mut write_config = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = args.next().map(PathBuf::from),
            "--write-config" => write_config = true,
            other => tracing::warn!(arg = other, "ignoring unrecognised argument"),
        }
    }

    Args {
        config: config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG)),
        write_config,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args();
    let config = TerminalConfig::load(&args.config);
    if args.write_config {
        match config.save(&args.config) {
            Ok(()) => tracing::info!(path = %args.config.display(), "config written"),
            Err(e) => tracing::error!(path = %args.config.display(), "failed to write config: {e}"),
        }
    }

    let module = TerminalModule::new(platform_bridge());
    tracing::info!(platform = module.platform_name(), "terminal demo starting");

    let mut session = Session::new(&module);
    let outcome = flows::run_all(&mut session, &config);

    for step in session.steps() {
        println!("==> {} {}", step.method, step.request);
        match serde_json::to_string_pretty(&step.response) {
            Ok(pretty) => println!("{pretty}"),
            Err(e) => tracing::error!("failed to render response: {e}"),
        }
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), "demo stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
