use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot name -> raw value. Lex sends `null` for slots it has not filled yet.
pub type Slots = HashMap<String, Option<String>>;

/// Opaque string state carried across turns by the runtime.
pub type SessionAttributes = HashMap<String, String>;

/// Whether the runtime is still collecting slots or asking for fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

/// Inbound Lex V1 code hook event.
///
/// Only the fields the handler reads or logs are modelled; anything else the
/// runtime sends is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub current_intent: CurrentIntent,
    pub invocation_source: InvocationSource,
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    #[serde(default)]
    pub bot: Bot,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub input_transcript: Option<String>,
    #[serde(default)]
    pub output_dialog_mode: Option<String>,
    #[serde(default)]
    pub message_version: Option<String>,
}

impl LexEvent {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    /// Raw text of a slot. Missing keys and `null` both come back as `None`.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|v| v.as_deref())
    }

    /// Inbound session attributes, with a missing mapping treated as empty.
    pub fn session_attributes(&self) -> SessionAttributes {
        self.session_attributes.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_dialog_hook_event() {
        let event: LexEvent = serde_json::from_value(json!({
            "messageVersion": "1.0",
            "invocationSource": "DialogCodeHook",
            "userId": "user-1",
            "sessionAttributes": {"team": "1234A"},
            "bot": {"name": "VIQCScore", "alias": "$LATEST", "version": "$LATEST"},
            "outputDialogMode": "Text",
            "currentIntent": {
                "name": "Calc_Score",
                "slots": {
                    "scored_risers": "5",
                    "completed_rows": null,
                    "completed_stacks": null
                },
                "confirmationStatus": "None"
            },
            "inputTranscript": "5"
        }))
        .unwrap();

        assert_eq!(event.invocation_source, InvocationSource::DialogCodeHook);
        assert_eq!(event.intent_name(), "Calc_Score");
        assert_eq!(event.slot("scored_risers"), Some("5"));
        assert_eq!(event.slot("completed_rows"), None);
        assert_eq!(event.slot("not_a_slot"), None);
        assert_eq!(event.bot.alias.as_deref(), Some("$LATEST"));
        assert_eq!(
            event.session_attributes().get("team").map(String::as_str),
            Some("1234A")
        );
    }

    #[test]
    fn test_null_session_attributes_become_empty() {
        let event: LexEvent = serde_json::from_value(json!({
            "invocationSource": "FulfillmentCodeHook",
            "userId": "user-1",
            "sessionAttributes": null,
            "bot": {"name": "VIQCScore"},
            "currentIntent": {"name": "Calc_Score", "slots": {}}
        }))
        .unwrap();

        assert!(event.session_attributes.is_none());
        assert!(event.session_attributes().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let event: LexEvent = serde_json::from_value(json!({
            "invocationSource": "DialogCodeHook",
            "currentIntent": {
                "name": "Calc_Score",
                "slots": {},
                "slotDetails": {"scored_risers": {"originalValue": "five"}}
            },
            "requestAttributes": null,
            "recentIntentSummaryView": []
        }))
        .unwrap();

        assert_eq!(event.user_id, "");
        assert_eq!(event.bot, Bot::default());
    }

    #[test]
    fn test_bot_without_name() {
        let event: LexEvent = serde_json::from_value(json!({
            "invocationSource": "DialogCodeHook",
            "bot": {"alias": "prod"},
            "currentIntent": {"name": "Calc_Score", "slots": {}}
        }))
        .unwrap();

        assert_eq!(event.bot.name, "");
        assert_eq!(event.bot.alias.as_deref(), Some("prod"));
    }

    #[test]
    fn test_unknown_invocation_source_rejected() {
        let result: Result<LexEvent, _> = serde_json::from_value(json!({
            "invocationSource": "SomethingElse",
            "currentIntent": {"name": "Calc_Score", "slots": {}}
        }));
        assert!(result.is_err());
    }
}
