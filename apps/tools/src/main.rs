use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use server_api::{ApiContext, ScreenParams};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Render BFF screens and dispatch actions in-process, without a server.
#[derive(Parser, Debug)]
#[command(name = "bffctl")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_filter: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered `area/screen` routes.
    Screens,
    /// List action names the dispatcher accepts.
    Actions,
    /// Render one screen envelope.
    Screen {
        area: String,
        screen: String,
        /// Query parameter as `key=value`; repeatable.
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Dispatch an action and print the response.
    Action {
        name: String,
        /// JSON object passed as the action's `data`.
        #[arg(long, default_value = "{}")]
        data: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = ApiContext::default();
    match cli.command {
        Command::Screens => {
            for route in api.screens.routes() {
                println!("{route}");
            }
        }
        Command::Actions => {
            for name in api.dispatcher.action_names() {
                println!("{name}");
            }
        }
        Command::Screen {
            area,
            screen,
            params,
        } => {
            let params: ScreenParams = params.into_iter().collect();
            debug!(%area, %screen, ?params, "rendering");
            let Some(envelope) = api.render_screen(&area, &screen, &params) else {
                bail!("unknown screen '{area}/{screen}'");
            };
            print_json(&envelope, cli.pretty)?;
            if !envelope.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Action { name, data } => {
            let body = action_body(&name, &data)?;
            let response = api.dispatcher.respond(&body);
            print_json(&response, cli.pretty)?;
            if !response.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

fn action_body(name: &str, data: &str) -> Result<Vec<u8>> {
    let data: Value = serde_json::from_str(data).context("--data is not valid JSON")?;
    if !data.is_object() {
        bail!("--data must be a JSON object");
    }
    Ok(serde_json::to_vec(&json!({ "action": name, "data": data }))?)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
