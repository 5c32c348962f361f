use super::config::BoundsPolicy;
use super::factors::{ScoreSlot, SlotValue};

/// Outcome of checking the three match slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { slot: ScoreSlot, message: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violated_slot(&self) -> Option<ScoreSlot> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { slot, .. } => Some(*slot),
        }
    }
}

/// Validate raw slot text for risers, rows and stacks, in that order.
/// Stops at the first slot that is missing, non-numeric or out of bounds.
pub fn validate_score(
    scored_risers: Option<&str>,
    completed_rows: Option<&str>,
    completed_stacks: Option<&str>,
    policy: BoundsPolicy,
) -> ValidationResult {
    let raw_values = [scored_risers, completed_rows, completed_stacks];

    for (slot, raw) in ScoreSlot::ALL.into_iter().zip(raw_values) {
        let value = SlotValue::parse(raw);
        if !policy.bounds(slot).contains(value) {
            return ValidationResult::Invalid {
                slot,
                message: correction_message(slot, raw),
            };
        }
    }

    ValidationResult::Valid
}

/// Message asking the user to re-enter `slot`. Always states the field
/// limits, whichever policy is enforced.
pub fn correction_message(slot: ScoreSlot, raw: Option<&str>) -> String {
    let stated = slot.field_bounds();
    format!(
        "The number of {label} you entered, {raw}, is not valid. \
         Please enter a valid number of {label} between {min} and {max}",
        label = slot.label(),
        raw = raw.unwrap_or("(blank)"),
        min = stated.min,
        max = stated.max,
    )
}
