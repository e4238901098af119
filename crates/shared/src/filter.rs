use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{Difficulty, Recipe};

/// Upper bound (inclusive) of the quick bucket, in minutes.
pub const QUICK_MAX_MINUTES: u32 = 30;

/// Upper bound (inclusive) of the medium bucket, in minutes.
pub const MEDIUM_MAX_MINUTES: u32 = 60;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    #[default]
    #[strum(to_string = "any", serialize = "all")]
    Any,
    /// Up to 30 minutes total.
    #[strum(to_string = "quick")]
    Quick,
    /// 31 to 60 minutes total.
    #[strum(to_string = "medium")]
    Medium,
    /// More than 60 minutes total.
    #[strum(to_string = "long")]
    Long,
}

impl TimeBucket {
    pub fn contains(&self, total_minutes: u32) -> bool {
        match self {
            TimeBucket::Any => true,
            TimeBucket::Quick => total_minutes <= QUICK_MAX_MINUTES,
            TimeBucket::Medium => {
                total_minutes > QUICK_MAX_MINUTES && total_minutes <= MEDIUM_MAX_MINUTES
            }
            TimeBucket::Long => total_minutes > MEDIUM_MAX_MINUTES,
        }
    }
}

/// Active catalog filters. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub dietary: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub time: TimeBucket,
}

impl FilterState {
    pub fn with_dietary(mut self, tag: impl Into<String>) -> Self {
        self.dietary = Some(tag.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_time(mut self, time: TimeBucket) -> Self {
        self.time = time;
        self
    }

    /// Every active predicate must hold.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let dietary = match &self.dietary {
            Some(tag) => recipe.has_dietary_tag(tag),
            None => true,
        };

        let difficulty = match self.difficulty {
            Some(difficulty) => recipe.difficulty == difficulty,
            None => true,
        };

        dietary && difficulty && self.time.contains(recipe.total_time())
    }

    pub fn is_any(&self) -> bool {
        self.dietary.is_none() && self.difficulty.is_none() && self.time == TimeBucket::Any
    }
}

/// Parses a filter value where `any` (or `all`) stands for no filter.
pub fn parse_optional<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("any") || value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    value.parse().map(Some)
}
