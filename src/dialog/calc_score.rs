use tracing::{debug, info, warn};

use crate::lex::{
    close, delegate, elicit_slot, FulfillmentState, InvocationSource, LexEvent, LexResponse,
    Message,
};
use crate::output::format_final_message;
use crate::scoring::{
    calculate_score, validate_score, BoundsPolicy, MatchInputs, ScoreSlot, SlotValue,
    ValidationResult,
};

/// Session attribute the running score is stored under.
pub const SCORE_ATTRIBUTE: &str = "score";

/// Handle the score intent for either invocation source.
pub fn calc_score(event: &LexEvent, bounds: BoundsPolicy) -> LexResponse {
    match event.invocation_source {
        InvocationSource::DialogCodeHook => dialog_hook(event, bounds),
        InvocationSource::FulfillmentCodeHook => fulfill(event),
    }
}

/// Mid-dialog: re-prompt for the first bad slot, or record the score and
/// let the runtime carry on.
fn dialog_hook(event: &LexEvent, bounds: BoundsPolicy) -> LexResponse {
    let validation = validate_score(
        event.slot(ScoreSlot::ScoredRisers.name()),
        event.slot(ScoreSlot::CompletedRows.name()),
        event.slot(ScoreSlot::CompletedStacks.name()),
        bounds,
    );

    match validation {
        ValidationResult::Invalid { slot, message } => {
            warn!(slot = %slot, value = ?event.slot(slot.name()), "re-eliciting slot");

            let mut slots = event.slots().clone();
            slots.insert(slot.name().to_string(), None);

            elicit_slot(
                event.session_attributes(),
                event.intent_name(),
                slots,
                slot.name(),
                Message::plain_text(message),
            )
        }
        ValidationResult::Valid => {
            let result = calculate_score(&MatchInputs::from_slots(event.slots()));
            debug!(score = result.score, breakdown = ?result.breakdown, "inputs valid");

            let mut session_attributes = event.session_attributes();
            session_attributes.insert(SCORE_ATTRIBUTE.to_string(), result.score.to_string());

            delegate(session_attributes, event.slots().clone())
        }
    }
}

/// Conversation complete: report the final score. Inputs are not
/// re-validated here; an unreadable count reports the score as `NaN`.
fn fulfill(event: &LexEvent) -> LexResponse {
    let raw = |slot: ScoreSlot| event.slot(slot.name()).unwrap_or("(blank)");
    let risers = raw(ScoreSlot::ScoredRisers);
    let rows = raw(ScoreSlot::CompletedRows);
    let stacks = raw(ScoreSlot::CompletedStacks);

    let result = calculate_score(&MatchInputs::from_slots(event.slots()));

    let score = if result.incomplete {
        warn!(risers, rows, stacks, "fulfillment requested with unreadable counts");
        SlotValue::NotANumber
    } else {
        info!(score = result.score, "match scored");
        SlotValue::Number(result.score)
    };

    close(
        event.session_attributes(),
        FulfillmentState::Fulfilled,
        Message::plain_text(format_final_message(risers, rows, stacks, score)),
    )
}
