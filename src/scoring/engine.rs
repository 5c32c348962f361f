use super::factors::{ScoreSlot, SlotValue};
use crate::lex::Slots;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorContribution {
    pub label: &'static str, // e.g. "Scored Risers"
    pub count: SlotValue,    // Units reported by the team
    pub points_each: i64,
    pub points: i64, // 0 when count is NaN
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i64,
    /// At least one input was not a number, so `score` is a partial sum.
    pub incomplete: bool,
    pub breakdown: ScoreBreakdown,
}

/// Parsed inputs for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchInputs {
    pub scored_risers: SlotValue,
    pub completed_rows: SlotValue,
    pub completed_stacks: SlotValue,
}

impl MatchInputs {
    pub fn new(
        scored_risers: SlotValue,
        completed_rows: SlotValue,
        completed_stacks: SlotValue,
    ) -> Self {
        Self {
            scored_risers,
            completed_rows,
            completed_stacks,
        }
    }

    /// Read and parse the three scoring slots out of a Lex slot map.
    pub fn from_slots(slots: &Slots) -> Self {
        let read = |slot: ScoreSlot| {
            SlotValue::parse(slots.get(slot.name()).and_then(|v| v.as_deref()))
        };
        Self::new(
            read(ScoreSlot::ScoredRisers),
            read(ScoreSlot::CompletedRows),
            read(ScoreSlot::CompletedStacks),
        )
    }

    pub fn get(&self, slot: ScoreSlot) -> SlotValue {
        match slot {
            ScoreSlot::ScoredRisers => self.scored_risers,
            ScoreSlot::CompletedRows => self.completed_rows,
            ScoreSlot::CompletedStacks => self.completed_stacks,
        }
    }
}

/// score = risers + 3 x rows + 30 x stacks
pub fn calculate_score(inputs: &MatchInputs) -> ScoreResult {
    let mut score: i64 = 0;
    let mut incomplete = false;
    let mut factors = Vec::with_capacity(ScoreSlot::ALL.len());

    for slot in ScoreSlot::ALL {
        let count = inputs.get(slot);
        let points = match count.as_number() {
            Some(n) => n.saturating_mul(slot.points()),
            None => {
                incomplete = true;
                0
            }
        };
        score = score.saturating_add(points);

        factors.push(FactorContribution {
            label: slot.label(),
            count,
            points_each: slot.points(),
            points,
        });
    }

    ScoreResult {
        score,
        incomplete,
        breakdown: ScoreBreakdown { factors },
    }
}
