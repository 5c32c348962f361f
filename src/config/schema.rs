use serde::{Deserialize, Serialize};

use crate::scoring::BoundsPolicy;

pub const DEFAULT_TIME_ZONE: &str = "America/New_York";
pub const DEFAULT_INTENT_NAME: &str = "Calc_Score";

/// Handler configuration.
///
/// Example YAML:
/// ```yaml
/// time_zone: America/Chicago
/// intent_name: Calc_Score
/// bounds: strict
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// IANA zone used for log timestamps
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// The one intent this handler fulfills
    #[serde(default = "default_intent_name")]
    pub intent_name: String,

    #[serde(default)]
    pub bounds: BoundsPolicy,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_intent_name() -> String {
    DEFAULT_INTENT_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            intent_name: default_intent_name(),
            bounds: BoundsPolicy::default(),
        }
    }
}
