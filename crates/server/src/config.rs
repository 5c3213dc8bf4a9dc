use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

const CONFIG_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub log_filter: String,
    pub max_body_bytes: usize,
    /// `*` or a single exact origin.
    pub allow_origin: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:8080".into(),
            log_filter: "info".into(),
            max_body_bytes: 64 * 1024,
            allow_origin: "*".into(),
        }
    }
}

/// Keys accepted in `server.toml`. Everything is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    log_filter: Option<String>,
    max_body_bytes: Option<usize>,
    allow_origin: Option<String>,
}

impl Settings {
    pub fn apply_file_str(&mut self, raw: &str) -> anyhow::Result<()> {
        let file: FileSettings = toml::from_str(raw).context("invalid server config")?;
        if let Some(v) = file.bind_addr {
            self.server_bind = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file.max_body_bytes {
            self.max_body_bytes = v;
        }
        if let Some(v) = file.allow_origin {
            self.allow_origin = v;
        }
        Ok(())
    }

    /// Later variables win: `APP__BIND_ADDR` over `SERVER_BIND`, `RUST_LOG`
    /// over `APP__LOG_FILTER`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("SERVER_BIND") {
            self.server_bind = v;
        }
        if let Some(v) = lookup("APP__BIND_ADDR") {
            self.server_bind = v;
        }

        if let Some(v) = lookup("APP__LOG_FILTER") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("RUST_LOG") {
            self.log_filter = v;
        }

        if let Some(v) = lookup("APP__MAX_BODY_BYTES") {
            if let Ok(parsed) = v.trim().parse::<usize>() {
                self.max_body_bytes = parsed;
            }
        }

        if let Some(v) = lookup("APP__ALLOW_ORIGIN") {
            self.allow_origin = v;
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the config file if it exists, then the environment.
pub fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => settings
            .apply_file_str(&raw)
            .with_context(|| format!("failed to load '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()));
        }
    }

    settings.apply_env(lookup);
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
