use std::fmt;

/// A slot value after parsing.
///
/// `NotANumber` stands in for missing, empty or non-numeric input. It fails
/// every bounds check, so it can never slip through validation as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValue {
    Number(i64),
    NotANumber,
}

impl SlotValue {
    /// Parse raw slot text. Never fails; bad input becomes `NotANumber`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => s
                .parse::<i64>()
                .map(SlotValue::Number)
                .unwrap_or(SlotValue::NotANumber),
            _ => SlotValue::NotANumber,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            SlotValue::Number(n) => Some(*n),
            SlotValue::NotANumber => None,
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Number(n) => write!(f, "{}", n),
            SlotValue::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Shorthand for [`SlotValue::parse`].
pub fn parse_slot(raw: Option<&str>) -> SlotValue {
    SlotValue::parse(raw)
}

/// Inclusive range a slot value must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: SlotValue) -> bool {
        match value {
            SlotValue::Number(n) => n >= self.min && n <= self.max,
            SlotValue::NotANumber => false,
        }
    }
}

/// The three scored quantities, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreSlot {
    ScoredRisers,
    CompletedRows,
    CompletedStacks,
}

impl ScoreSlot {
    pub const ALL: [ScoreSlot; 3] = [
        ScoreSlot::ScoredRisers,
        ScoreSlot::CompletedRows,
        ScoreSlot::CompletedStacks,
    ];

    /// Slot name as configured on the bot.
    pub fn name(&self) -> &'static str {
        match self {
            ScoreSlot::ScoredRisers => "scored_risers",
            ScoreSlot::CompletedRows => "completed_rows",
            ScoreSlot::CompletedStacks => "completed_stacks",
        }
    }

    /// Human-readable name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreSlot::ScoredRisers => "Scored Risers",
            ScoreSlot::CompletedRows => "Completed Rows",
            ScoreSlot::CompletedStacks => "Completed Stacks",
        }
    }

    /// Match points for one unit of this slot.
    pub fn points(&self) -> i64 {
        match self {
            ScoreSlot::ScoredRisers => 1,
            ScoreSlot::CompletedRows => 3,
            ScoreSlot::CompletedStacks => 30,
        }
    }

    /// Range a field can physically reach in a match (27 risers, 8 rows, 8 stacks).
    pub fn field_bounds(&self) -> Bounds {
        match self {
            ScoreSlot::ScoredRisers => Bounds::new(0, 27),
            ScoreSlot::CompletedRows | ScoreSlot::CompletedStacks => Bounds::new(0, 8),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for ScoreSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_slot(Some("5")), SlotValue::Number(5));
        assert_eq!(parse_slot(Some("0")), SlotValue::Number(0));
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_sign() {
        assert_eq!(parse_slot(Some(" 12 ")), SlotValue::Number(12));
        assert_eq!(parse_slot(Some("+3")), SlotValue::Number(3));
        assert_eq!(parse_slot(Some("-1")), SlotValue::Number(-1));
    }

    #[test]
    fn test_parse_missing_or_garbage_is_nan() {
        assert_eq!(parse_slot(None), SlotValue::NotANumber);
        assert_eq!(parse_slot(Some("")), SlotValue::NotANumber);
        assert_eq!(parse_slot(Some("   ")), SlotValue::NotANumber);
        assert_eq!(parse_slot(Some("five")), SlotValue::NotANumber);
        assert_eq!(parse_slot(Some("2.5")), SlotValue::NotANumber);
        assert_eq!(parse_slot(Some("99999999999999999999")), SlotValue::NotANumber);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::new(0, 8);
        assert!(bounds.contains(SlotValue::Number(0)));
        assert!(bounds.contains(SlotValue::Number(8)));
        assert!(!bounds.contains(SlotValue::Number(-1)));
        assert!(!bounds.contains(SlotValue::Number(9)));
    }

    #[test]
    fn test_nan_fails_every_bound() {
        for bounds in [Bounds::new(0, 8), Bounds::new(i64::MIN, i64::MAX)] {
            assert!(!bounds.contains(SlotValue::NotANumber));
        }
    }

    #[test]
    fn test_slot_names_round_trip() {
        for slot in ScoreSlot::ALL {
            assert_eq!(ScoreSlot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(ScoreSlot::from_name("scored_cubes"), None);
    }

    #[test]
    fn test_slot_value_display() {
        assert_eq!(SlotValue::Number(7).to_string(), "7");
        assert_eq!(SlotValue::NotANumber.to_string(), "NaN");
    }
}
