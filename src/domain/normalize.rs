//! Pure conversions from raw card fields to comparable and displayable forms.
//!
//! Nothing in here fails: malformed input degrades to `"N/A"` for display and
//! to NaN (or zero, for absent prices) for comparison.

use super::entities::FieldValue;

pub const NOT_AVAILABLE: &str = "N/A";
pub const CURRENCY_GLYPH: char = '€';

/// Human-facing text: blank values become `"N/A"`, everything else is
/// stringified with only its first character upper-cased.
pub fn display_text(value: &FieldValue) -> String {
    if value.is_blank() {
        return NOT_AVAILABLE.to_string();
    }
    capitalize_first(&value.as_text())
}

/// `€`-prefixed whole amount with `,` thousands separators.
pub fn display_currency(value: &FieldValue) -> String {
    format_currency(value.as_number())
}

pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{CURRENCY_GLYPH}{sign}∞");
    }

    let rounded = round_half_up(amount);
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if negative {
        format!("{CURRENCY_GLYPH}-{grouped}")
    } else {
        format!("{CURRENCY_GLYPH}{grouped}")
    }
}

/// Numeric magnitude of an in-game price such as `"1.2k"`, `"€ 950"` or
/// `"2M"`.
///
/// Only `k` is honoured when a price mentions both `k` and `m`; the suffixes
/// are checked in that order and never combined.
pub fn parse_price_magnitude(raw: &FieldValue) -> f64 {
    let text = match raw {
        FieldValue::Text(text) => text,
        other => {
            let value = parse_float_prefix(&other.as_text());
            return if value.is_nan() || value == 0.0 {
                0.0
            } else {
                value
            };
        }
    };

    let lowered = text.to_lowercase();
    let digits: String = lowered
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    let value = parse_float_prefix(&digits);

    if lowered.contains('k') {
        value * 1_000.0
    } else if lowered.contains('m') {
        value * 1_000_000.0
    } else {
        value
    }
}

/// Reads a number the way a loose text field is read for sorting: the longest
/// leading decimal literal wins, trailing garbage is ignored.
pub fn coerce_number(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Number(number) => *number,
        FieldValue::Text(text) => parse_float_prefix(text),
        FieldValue::Missing | FieldValue::Flag(_) => f64::NAN,
    }
}

/// Badge palette for a card edition label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStyle {
    GoldTotw,
    TotsToty,
    Icon,
    Hero,
    Special,
    Rare,
    Default,
}

impl CardStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::GoldTotw => "gold-totw",
            Self::TotsToty => "tots-toty",
            Self::Icon => "icon",
            Self::Hero => "hero",
            Self::Special => "special",
            Self::Rare => "rare",
            Self::Default => "default",
        }
    }
}

// First match wins; order is significant.
const CARD_STYLE_CASCADE: [(&str, CardStyle); 9] = [
    ("totw", CardStyle::GoldTotw),
    ("toty", CardStyle::TotsToty),
    ("tots", CardStyle::TotsToty),
    ("icon", CardStyle::Icon),
    ("hero", CardStyle::Hero),
    ("special", CardStyle::Special),
    ("rare", CardStyle::Rare),
    ("ormal", CardStyle::Rare),
    ("if", CardStyle::GoldTotw),
];

pub fn card_type_style(card_type: &FieldValue) -> CardStyle {
    let lowered = card_type.as_text().to_lowercase();
    CARD_STYLE_CASCADE
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, style)| *style)
        .unwrap_or(CardStyle::Default)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RatingTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl RatingTier {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Tier1 => "tier-1",
            Self::Tier2 => "tier-2",
            Self::Tier3 => "tier-3",
            Self::Tier4 => "tier-4",
            Self::Tier5 => "tier-5",
        }
    }
}

pub fn rating_tier(rating: &FieldValue) -> RatingTier {
    // NaN fails every comparison and lands in the lowest tier.
    match rating.as_number() {
        r if r >= 90.0 => RatingTier::Tier5,
        r if r >= 85.0 => RatingTier::Tier4,
        r if r >= 80.0 => RatingTier::Tier3,
        r if r >= 75.0 => RatingTier::Tier2,
        _ => RatingTier::Tier1,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Longest leading decimal literal of `text`, after leading whitespace.
/// Returns NaN when no digits are found.
pub fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}
