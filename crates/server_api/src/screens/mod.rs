//! Screen builders. Each one turns query parameters into an envelope; none of
//! them hold state or fail on missing parameters, they fall back to defaults.

mod auth;
mod driver;
mod splash;
mod widgets;

use std::collections::BTreeMap;

use shared::protocol::ScreenEnvelope;
use tracing::debug;

pub use driver::{default_home_data, parse_documents_param};

pub type ScreenBuilder = fn(&ScreenParams) -> ScreenEnvelope;

/// Query parameters of a screen request, treated as opaque per-screen input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenParams(BTreeMap<String, String>);

impl ScreenParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Non-blank value for `key`, if one was supplied.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}

impl From<BTreeMap<String, String>> for ScreenParams {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self(value)
    }
}

impl FromIterator<(String, String)> for ScreenParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `(area, screen)` to builder, fixed at startup.
#[derive(Clone, Default)]
pub struct ScreenRegistry {
    builders: BTreeMap<(String, String), ScreenBuilder>,
}

impl ScreenRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every screen this server ships.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("app", "splash", splash::splash_screen);
        registry.register("auth", "otp", auth::otp_screen);
        registry.register("auth", "registration-role", auth::registration_role_screen);
        registry.register("driver", "home", driver::home_screen);
        registry
    }

    pub fn register(&mut self, area: &str, screen: &str, builder: ScreenBuilder) {
        self.builders
            .insert((area.to_string(), screen.to_string()), builder);
    }

    pub fn contains(&self, area: &str, screen: &str) -> bool {
        self.builders
            .contains_key(&(area.to_string(), screen.to_string()))
    }

    pub fn render(
        &self,
        area: &str,
        screen: &str,
        params: &ScreenParams,
    ) -> Option<ScreenEnvelope> {
        let builder = self.builders.get(&(area.to_string(), screen.to_string()))?;
        debug!(area, screen, "rendering screen");
        Some(builder(params))
    }

    /// Registered `area/screen` paths in sorted order.
    pub fn routes(&self) -> impl Iterator<Item = String> + '_ {
        self.builders
            .keys()
            .map(|(area, screen)| format!("{area}/{screen}"))
    }
}

#[cfg(test)]
#[path = "../tests/screens_tests.rs"]
mod tests;
