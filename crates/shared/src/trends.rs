//! Trend labels for keywords.
//!
//! This is a placeholder until historical keyword data exists: the label is
//! derived from the current score only, and the change rate carries no signal.
//! It is either random noise in [-10, 10) or a fixed 0.0.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Article, Keyword};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

impl Trend {
    pub fn from_score(value: u8) -> Self {
        if value > 70 {
            Trend::Rising
        } else if value > 50 {
            Trend::Stable
        } else {
            Trend::Falling
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
            Trend::Falling => "falling",
        }
    }
}

/// Where the synthetic change rate comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeRate {
    #[default]
    Random,
    Neutral,
}

impl ChangeRate {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "random" => Some(ChangeRate::Random),
            "neutral" => Some(ChangeRate::Neutral),
            _ => None,
        }
    }

    fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            ChangeRate::Random => rng.gen_range(-10.0..10.0),
            ChangeRate::Neutral => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub keyword: String,
    pub trend: Trend,
    pub change_rate: f64,
}

/// Label every keyword. `articles` is accepted for when real history exists.
pub fn classify_trend(
    keywords: &[Keyword],
    _articles: &[Article],
    change_rate: ChangeRate,
) -> Vec<TrendReport> {
    let mut rng = rand::thread_rng();
    keywords
        .iter()
        .map(|k| TrendReport {
            keyword: k.text.clone(),
            trend: Trend::from_score(k.value),
            change_rate: change_rate.sample(&mut rng),
        })
        .collect()
}
