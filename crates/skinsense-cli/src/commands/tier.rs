use rust_decimal::Decimal;
use skinsense_core::error::SkinSenseError;
use skinsense_core::routine::{display_percent, effectiveness_tier, star_rating};

pub fn run(score: Decimal) -> Result<(), SkinSenseError> {
    let tier = effectiveness_tier(score);
    println!(
        "{}%  {}  {} ({})",
        display_percent(score),
        star_rating(score),
        tier,
        tier.text_class()
    );
    Ok(())
}
