use tracing::{debug, info};

use super::calc_score::calc_score;
use super::error::DialogError;
use crate::config::{Config, DEFAULT_INTENT_NAME};
use crate::lex::{LexEvent, LexResponse};
use crate::scoring::BoundsPolicy;

/// Entry point for Lex code hook events.
///
/// Immutable once built, so one instance can serve any number of
/// invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    intent_name: String,
    bounds: BoundsPolicy,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(DEFAULT_INTENT_NAME, BoundsPolicy::default())
    }
}

impl Handler {
    pub fn new(intent_name: impl Into<String>, bounds: BoundsPolicy) -> Self {
        Self {
            intent_name: intent_name.into(),
            bounds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.intent_name.clone(), config.bounds)
    }

    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }

    /// Handle one invocation.
    pub fn handle(&self, event: &LexEvent) -> Result<LexResponse, DialogError> {
        debug!(
            bot = %event.bot.name,
            alias = ?event.bot.alias,
            version = ?event.bot.version,
            message_version = ?event.message_version,
            output_dialog_mode = ?event.output_dialog_mode,
            "event received"
        );

        let response = self.dispatch(event)?;

        info!(
            user_id = %event.user_id,
            action = response.dialog_action.kind(),
            "responding"
        );
        Ok(response)
    }

    /// Route by intent name. Only the configured intent is supported.
    pub fn dispatch(&self, event: &LexEvent) -> Result<LexResponse, DialogError> {
        debug!(
            user_id = %event.user_id,
            intent_name = %event.intent_name(),
            source = ?event.invocation_source,
            confirmation = ?event.current_intent.confirmation_status,
            transcript = ?event.input_transcript,
            "dispatch"
        );

        if event.intent_name() == self.intent_name {
            return Ok(calc_score(event, self.bounds));
        }

        Err(DialogError::UnsupportedIntent(event.intent_name().to_string()))
    }
}

/// Handle an event with the default intent name and bounds.
pub fn dispatch(event: &LexEvent) -> Result<LexResponse, DialogError> {
    Handler::default().handle(event)
}
