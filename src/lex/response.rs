use serde::{Deserialize, Serialize};

use super::types::{SessionAttributes, Slots};

/// Terminal state reported with a `Close` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

/// Directive telling the runtime what to do next.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },
    Delegate {
        slots: Slots,
    },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogAction {
    /// Short name used in logs, matching the wire `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// Re-ask the user for `slot_to_elicit`.
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Hand control back to the runtime's own slot filling.
pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// End the conversation.
pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs() -> SessionAttributes {
        SessionAttributes::from([("team".to_string(), "1234A".to_string())])
    }

    #[test]
    fn test_elicit_slot_wire_shape() {
        let slots = Slots::from([
            ("scored_risers".to_string(), None),
            ("completed_rows".to_string(), Some("2".to_string())),
        ]);
        let response = elicit_slot(
            attrs(),
            "Calc_Score",
            slots,
            "scored_risers",
            Message::plain_text("try again"),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {"team": "1234A"},
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "Calc_Score",
                    "slots": {"scored_risers": null, "completed_rows": "2"},
                    "slotToElicit": "scored_risers",
                    "message": {"contentType": "PlainText", "content": "try again"}
                }
            })
        );
    }

    #[test]
    fn test_delegate_wire_shape() {
        let response = delegate(attrs(), Slots::new());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {"team": "1234A"},
                "dialogAction": {"type": "Delegate", "slots": {}}
            })
        );
    }

    #[test]
    fn test_close_wire_shape() {
        let response = close(
            SessionAttributes::new(),
            FulfillmentState::Fulfilled,
            Message::plain_text("done"),
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {},
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Fulfilled",
                    "message": {"contentType": "PlainText", "content": "done"}
                }
            })
        );
    }

    #[test]
    fn test_kind_matches_tag() {
        let response = delegate(SessionAttributes::new(), Slots::new());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["dialogAction"]["type"], response.dialog_action.kind());
    }
}
