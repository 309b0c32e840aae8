// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use interceptor_chain::config::consts::DEFAULT_LOG_FILTER;
use interceptor_chain::config::{load_and_validate_config, RuntimeBuilder};
use interceptor_chain::engine::Dispatcher;
use interceptor_chain::interceptors::default_interceptors;
use interceptor_chain::model::{Instruction, Outcome};

const DEFAULT_FLAG: &str = "--default";
const JSON_FLAG: &str = "--json";
const PROGRAM_NAME: &str = "interceptor-chain";

/// Where the interceptor list comes from
#[derive(Debug, PartialEq)]
enum ChainSource {
    /// The built-in log -> action chain
    Default,
    /// A YAML or TOML configuration file
    File(String),
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    source: ChainSource,
    input_text: String,
    json: bool,
}

fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or(PROGRAM_NAME)
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let mut json = false;
    let mut positional = Vec::new();

    for arg in args.iter().skip(1) {
        if arg == JSON_FLAG {
            json = true;
        } else {
            positional.push(arg.as_str());
        }
    }

    // The last argument is always the input text
    let (input_text, rest) = positional.split_last()?;
    let source = match rest {
        [flag] if *flag == DEFAULT_FLAG => ChainSource::Default,
        [path] => ChainSource::File(path.to_string()),
        _ => return None,
    };

    Some(CliArgs {
        source,
        input_text: input_text.to_string(),
        json,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_dispatcher(source: &ChainSource) -> anyhow::Result<Dispatcher<Instruction, Outcome>> {
    match source {
        ChainSource::Default => Ok(Dispatcher::new(default_interceptors())),
        ChainSource::File(path) => {
            let config = load_and_validate_config(path)
                .with_context(|| format!("loading configuration '{}'", path))?;
            let dispatcher = RuntimeBuilder::from_config(&config)
                .with_context(|| format!("building interceptors from '{}'", path))?;
            Ok(dispatcher)
        }
    }
}

fn run(cli: &CliArgs) -> anyhow::Result<()> {
    let dispatcher = build_dispatcher(&cli.source)?;
    tracing::info!(interceptors = ?dispatcher.names(), "Interceptor chain ready");

    let start_time = Instant::now();
    let outcome = dispatcher
        .dispatch(Instruction::new(cli.input_text.as_str()).with_metadata("source", "cli"))
        .context("dispatch failed")?;
    tracing::info!(duration = ?start_time.elapsed(), "Dispatch finished");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.body);
        for (key, value) in &outcome.metadata {
            println!("  • {}: {}", key, value);
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(cli) = parse_args(&args) else {
        let program = program_name(&args);
        eprintln!("Usage: {} [--json] <config.yaml|config.toml> <input_text>", program);
        eprintln!("       {} [--json] --default <input_text>", program);
        eprintln!("Example: {} configs/guarded.yaml \"drop table users\"", program);
        std::process::exit(2);
    };

    init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
