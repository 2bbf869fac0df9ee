//! Guided startup for running the service by hand.
//!
//! The service cannot answer any request without an `OpenWeatherMap` key,
//! so the key is settled first: an existing `OPENWEATHER_API_KEY` is kept,
//! otherwise it is asked for (hidden input) and a blank answer aborts
//! before anything is bound. The listen address follows, then a final
//! confirmation. Answers are handed to [`super::run_server`] through the
//! same environment variables it reads in non-interactive mode.

use air_quality_openweather::config::API_KEY_ENV;
use dialoguer::{Confirm, Input, Password};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Answers collected before the server starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Startup {
    bind_addr: String,
    port: u16,
    /// `None` when the environment already carries a usable key.
    api_key: Option<String>,
}

/// Whether `existing` (the current value of the key variable) is usable.
fn has_usable_key(existing: Option<&str>) -> bool {
    existing.is_some_and(|key| !key.trim().is_empty())
}

/// Normalizes a typed key, rejecting blank input.
fn accept_api_key(input: &str) -> Option<String> {
    let key = input.trim();
    (!key.is_empty()).then(|| key.to_string())
}

fn prompt_api_key() -> std::io::Result<Option<String>> {
    let existing = std::env::var(API_KEY_ENV).ok();
    if has_usable_key(existing.as_deref()) {
        println!("Using the API key from {API_KEY_ENV}.");
        return Ok(None);
    }

    let typed = Password::new()
        .with_prompt("OpenWeatherMap API key")
        .allow_empty_password(true)
        .interact()
        .map_err(std::io::Error::other)?;

    accept_api_key(&typed).map(Some).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("an API key is required (or set {API_KEY_ENV})"),
        )
    })
}

fn prompt_listen_address() -> std::io::Result<(String, u16)> {
    let bind_addr: String = Input::new()
        .with_prompt("Listen on address")
        .default(DEFAULT_BIND_ADDR.to_string())
        .interact_text()
        .map_err(std::io::Error::other)?;

    let port: u16 = Input::new()
        .with_prompt("Listen on port")
        .default(DEFAULT_PORT)
        .interact_text()
        .map_err(std::io::Error::other)?;

    Ok((bind_addr, port))
}

/// Asks for the API key and listen address, then starts the server.
///
/// # Errors
///
/// Returns an error if a prompt cannot be read, no API key is given, or
/// the server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Air quality service: interactive startup");
    println!();

    let api_key = prompt_api_key()?;
    let (bind_addr, port) = prompt_listen_address()?;
    let startup = Startup {
        bind_addr,
        port,
        api_key,
    };

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Serve AQI reports on http://{}:{}?",
            startup.bind_addr, startup.port
        ))
        .default(true)
        .interact()
        .map_err(std::io::Error::other)?;
    if !confirmed {
        println!("Not started.");
        return Ok(());
    }

    // SAFETY: no other threads exist yet; run_server reads these once
    // during its own setup.
    unsafe {
        std::env::set_var("BIND_ADDR", &startup.bind_addr);
        std::env::set_var("PORT", startup.port.to_string());
        if let Some(key) = &startup.api_key {
            std::env::set_var(API_KEY_ENV, key);
        }
    }

    super::run_server().await
}
