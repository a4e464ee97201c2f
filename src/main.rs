//! tts-bridge command line
//!
//! `tts-bridge symbols [class]` prints the JNI symbols the listener class
//! needs. `tts-bridge replay <handle> [file]` drives JSON-line events
//! through a bridge and prints the resulting native calls.

use anyhow::{bail, Context};
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use tts_bridge::config::Config;
use tts_bridge::logging::{init_logging, init_with_level};
use tts_bridge::native::{LoggingEntryPoints, RecordingEntryPoints};
use tts_bridge::replay::replay;
use tts_bridge::symbols::{platform_stop_symbol, short_name, EntryPointTable, SETUP_CLASS, SETUP_METHOD};
use tts_bridge::Bridge;

const USAGE: &str = "Usage:\n  tts-bridge [--debug] symbols [class]\n  tts-bridge [--debug] replay <handle> [file]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");
    let args: Vec<String> = args
        .into_iter()
        .filter(|arg| arg != "--debug" && arg != "-d")
        .collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            Config::default()
        }
    };

    if debug_mode {
        init_with_level(LevelFilter::Debug, &config.log_tag());
    } else {
        init_logging(&config);
    }
    info!("{} version {} starting", tts_bridge::APP_NAME, tts_bridge::VERSION);

    if let Err(e) = run(&args, &config) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &[String], config: &Config) -> anyhow::Result<()> {
    match args.first().map(String::as_str) {
        Some("symbols") => {
            let class = args.get(1).cloned().unwrap_or_else(|| config.class_name());
            print_symbols(&class)
        }
        Some("replay") => {
            let handle: i32 = args
                .get(1)
                .context("replay needs a backend handle")?
                .parse()
                .context("backend handle must be an integer")?;
            run_replay(handle, args.get(2).map(String::as_str), config)
        }
        _ => bail!("{}", USAGE),
    }
}

fn print_symbols(class: &str) -> anyhow::Result<()> {
    let table = EntryPointTable::for_class(class)?;
    println!("Listener class: {}", table.class());
    for (entry_point, symbol) in table.iter() {
        let note = if entry_point.is_relay() {
            "  (relays to the one-argument onStop)"
        } else {
            ""
        };
        println!("  {:<40} {}{}", entry_point.to_string(), symbol, note);
    }
    println!(
        "Not exported: onStop(Ljava/lang/String;Z)V -> {}",
        platform_stop_symbol(class)?
    );
    println!(
        "Setup: {}.{}{} -> {}",
        SETUP_CLASS,
        SETUP_METHOD.0,
        SETUP_METHOD.1,
        short_name(SETUP_CLASS, SETUP_METHOD.0)
    );
    Ok(())
}

fn run_replay(handle: i32, path: Option<&str>, config: &Config) -> anyhow::Result<()> {
    let native = LoggingEntryPoints::new(RecordingEntryPoints::new());
    let bridge = Bridge::with_config(handle, &native, config);

    let result = match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            replay(&bridge, BufReader::new(file))
        }
        None => replay(&bridge, io::stdin().lock()),
    };

    // Dump what reached the native side even when replay stopped early.
    let calls = native.inner().calls();
    println!("{}", serde_json::to_string_pretty(&calls)?);

    let delivered = result?;
    debug!("Delivered {} events", delivered);
    Ok(())
}
