//! Transport-independent core of the BFF: the action dispatcher and the
//! screen registry. The HTTP server and the CLI are thin shells around
//! [`ApiContext`].

pub mod dispatch;
pub mod handlers;
pub mod screens;

use std::sync::Arc;

pub use dispatch::{Clock, Dispatcher};
pub use screens::{ScreenParams, ScreenRegistry};
use shared::{error::DispatchError, protocol::ActionResponse, protocol::ScreenEnvelope};

/// Everything a request needs. Immutable after startup and cheap to clone.
#[derive(Clone)]
pub struct ApiContext {
    pub dispatcher: Arc<Dispatcher>,
    pub screens: Arc<ScreenRegistry>,
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(Dispatcher::new(), ScreenRegistry::with_defaults())
    }
}

impl ApiContext {
    pub fn new(dispatcher: Dispatcher, screens: ScreenRegistry) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            screens: Arc::new(screens),
        }
    }

    /// Renders `area/screen`, or `None` when no such screen is registered.
    pub fn render_screen(
        &self,
        area: &str,
        screen: &str,
        params: &ScreenParams,
    ) -> Option<ScreenEnvelope> {
        self.screens.render(area, screen, params)
    }

    pub fn handle_action(&self, body: &[u8]) -> Result<ActionResponse, DispatchError> {
        self.dispatcher.dispatch_body(body)
    }
}
