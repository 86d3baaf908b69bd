//! ciphers — encrypt, decrypt and visualize with the classical ciphers

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classical_ciphers::config::{self, Config};
use classical_ciphers::dispatch::{run, Request};
use classical_ciphers::{demo, export_demo_to_json, CipherKind, Operation, PaddingMode};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod menu;

/// Caesar, Vigenère, Rail Fence and Columnar ciphers
#[derive(Parser)]
#[command(name = "ciphers", version, about, long_about = None)]
struct Cli {
    /// Carry the exact columnar padding length as `<ciphertext>:<padding>`
    #[arg(long, global = true)]
    exact_padding: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    Encrypt {
        /// caesar, vigenere, rail-fence or columnar
        cipher: CipherKind,
        text: String,
        /// Shift, key or rail count (defaults come from the config file)
        #[arg(short, long)]
        param: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt text
    Decrypt {
        cipher: CipherKind,
        text: String,
        #[arg(short, long)]
        param: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// Draw the rail fence or columnar grid for a text
    Visualize {
        cipher: CipherKind,
        text: String,
        #[arg(short, long)]
        param: Option<String>,
    },

    /// Print the demonstration samples
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the demonstration samples to a JSON file
    Export { path: PathBuf },

    /// Interactive menu (the default)
    Menu,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn default_param(cipher: CipherKind, config: &Config) -> String {
    let defaults = &config.defaults;
    match cipher {
        CipherKind::Caesar => defaults.caesar_shift.to_string(),
        CipherKind::Vigenere => defaults.vigenere_key.clone(),
        CipherKind::RailFence => defaults.rails.to_string(),
        CipherKind::Columnar => defaults.columnar_key.clone(),
    }
}

/// `--exact-padding` wins over the config file
fn padding_mode(exact_flag: bool, config: &Config) -> PaddingMode {
    if exact_flag {
        PaddingMode::Exact
    } else {
        config.columnar.padding
    }
}

/// Run one request and format what gets printed
fn one_shot_output(request: Request, padding: PaddingMode, as_json: bool) -> Result<String> {
    let (cipher, operation) = (request.cipher, request.operation);
    let output = run(&request, padding)
        .with_context(|| format!("{cipher} {operation} failed"))?;

    if as_json {
        let doc = json!({ "request": request, "output": output });
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(output)
    }
}

fn one_shot(
    config: &Config,
    padding: PaddingMode,
    cipher: CipherKind,
    operation: Operation,
    text: String,
    param: Option<String>,
    as_json: bool,
) -> Result<()> {
    let param = param.unwrap_or_else(|| default_param(cipher, config));
    let request = Request::new(cipher, operation, text, param);
    println!("{}", one_shot_output(request, padding, as_json)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load().context("Failed to load config — check CIPHERS_CONFIG")?;
    init_logging(config);

    let padding = padding_mode(cli.exact_padding, config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Encrypt {
            cipher,
            text,
            param,
            json,
        } => one_shot(config, padding, cipher, Operation::Encrypt, text, param, json)?,
        Commands::Decrypt {
            cipher,
            text,
            param,
            json,
        } => one_shot(config, padding, cipher, Operation::Decrypt, text, param, json)?,
        Commands::Visualize {
            cipher,
            text,
            param,
        } => one_shot(config, padding, cipher, Operation::Visualize, text, param, false)?,
        Commands::Demo { json } => {
            let samples = demo::samples()?;
            if json {
                let doc = classical_ciphers::export::demo_document(&samples);
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                print!("{}", demo::render(&samples));
            }
        }
        Commands::Export { path } => {
            let count = export_demo_to_json(&path)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            println!("Exported {count} sample(s) → {}", path.display());
        }
        Commands::Menu => {
            info!("Interactive menu, columnar padding: {padding:?}");
            let stdin = io::stdin();
            menu::Menu::new(stdin.lock(), io::stdout(), padding).run()?;
        }
    }

    Ok(())
}
