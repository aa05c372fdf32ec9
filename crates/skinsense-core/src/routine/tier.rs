use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation band for a 0-100 effectiveness score, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Poor => write!(f, "poor"),
            Tier::Fair => write!(f, "fair"),
            Tier::Good => write!(f, "good"),
            Tier::Excellent => write!(f, "excellent"),
        }
    }
}

/// Map a score to its tier. Each lower bound is inclusive.
pub fn effectiveness_tier(score: Decimal) -> Tier {
    if score >= Decimal::from(90) {
        Tier::Excellent
    } else if score >= Decimal::from(75) {
        Tier::Good
    } else if score >= Decimal::from(60) {
        Tier::Fair
    } else {
        Tier::Poor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
}

impl StarRating {
    pub const MAX: u8 = 5;

    pub fn empty(&self) -> u8 {
        Self::MAX
            .saturating_sub(self.full)
            .saturating_sub(u8::from(self.half))
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            write!(f, "*")?;
        }
        if self.half {
            write!(f, "+")?;
        }
        for _ in 0..self.empty() {
            write!(f, ".")?;
        }
        Ok(())
    }
}

/// Five-star rendering of a score: one star per 20 points, plus a half star
/// when the remainder is at least 10.
pub fn star_rating(score: Decimal) -> StarRating {
    let twenty = Decimal::from(20);
    let score = score.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let full = (score / twenty).floor().to_u8().unwrap_or(0).min(StarRating::MAX);
    let half = full < StarRating::MAX && score % twenty >= Decimal::TEN;
    StarRating { full, half }
}

/// Whole-percent value shown next to layer and overall scores.
pub fn display_percent(score: Decimal) -> Decimal {
    score.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
