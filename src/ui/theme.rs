//! Class names shared by the result table and badges. The palette itself
//! lives in `assets/main.css`.

use crate::domain::{CardStyle, RatingTier};

pub fn card_badge(style: CardStyle) -> &'static str {
    match style {
        CardStyle::GoldTotw => "card-badge gold-totw",
        CardStyle::TotsToty => "card-badge tots-toty",
        CardStyle::Icon => "card-badge icon",
        CardStyle::Hero => "card-badge hero",
        CardStyle::Special => "card-badge special",
        CardStyle::Rare => "card-badge rare",
        CardStyle::Default => "card-badge default",
    }
}

pub fn rating_badge(tier: RatingTier) -> &'static str {
    match tier {
        RatingTier::Tier5 => "rating-badge tier-5",
        RatingTier::Tier4 => "rating-badge tier-4",
        RatingTier::Tier3 => "rating-badge tier-3",
        RatingTier::Tier2 => "rating-badge tier-2",
        RatingTier::Tier1 => "rating-badge tier-1",
    }
}

pub fn header_cell(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}
