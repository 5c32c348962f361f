use serde::{Deserialize, Serialize};

use super::factors::{Bounds, ScoreSlot};

/// Which upper bounds the validator enforces.
///
/// Both policies tell the user the same field limits (27 risers, 8 rows,
/// 8 stacks). `Legacy` accepts one extra unit on top of those, matching the
/// checks earlier versions of the bot shipped with.
///
/// Example YAML:
/// ```yaml
/// bounds: legacy
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    #[default]
    Strict,
    Legacy,
}

impl BoundsPolicy {
    /// Range enforced for `slot` under this policy.
    pub fn bounds(&self, slot: ScoreSlot) -> Bounds {
        let stated = slot.field_bounds();
        match self {
            BoundsPolicy::Strict => stated,
            BoundsPolicy::Legacy => match slot {
                ScoreSlot::ScoredRisers => Bounds::new(stated.min, 28),
                ScoreSlot::CompletedRows => Bounds::new(stated.min, 9),
                ScoreSlot::CompletedStacks => Bounds::new(stated.min, 10),
            },
        }
    }
}
