pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::BoundsPolicy;
pub use engine::{calculate_score, MatchInputs, ScoreBreakdown, ScoreResult};
pub use factors::{parse_slot, Bounds, ScoreSlot, SlotValue};
pub use validation::{validate_score, ValidationResult};
