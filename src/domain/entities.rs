use std::{borrow::Cow, fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// A single raw field as delivered by the prediction service.
///
/// The service is loosely typed: ratings may arrive as numbers or strings,
/// prices carry currency glyphs and magnitude suffixes, and any field may be
/// `null` or missing entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Missing,
    Text(String),
    Number(f64),
    Flag(bool),
}

impl FieldValue {
    /// `null`, absent or an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// String form used for display and for case-insensitive comparison.
    /// Missing values render as the empty string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Missing => Cow::Borrowed(""),
            FieldValue::Text(text) => Cow::Borrowed(text.as_str()),
            FieldValue::Number(number) => Cow::Owned(number_to_text(*number)),
            FieldValue::Flag(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
        }
    }

    /// Whole-value numeric reading: text must be a number after trimming.
    /// Blank text reads as zero; missing values yield NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Missing => f64::NAN,
            FieldValue::Number(number) => *number,
            FieldValue::Flag(flag) => {
                if *flag {
                    1.0
                } else {
                    0.0
                }
            }
            FieldValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Non-blank text, if any. Used for optional links and identifiers.
    pub fn non_blank_text(&self) -> Option<Cow<'_, str>> {
        if self.is_blank() {
            None
        } else {
            Some(self.as_text())
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

fn number_to_text(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        if number > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if number == 0.0 {
        "0".to_string()
    } else {
        number.to_string()
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnyScalar;

        impl<'de> de::Visitor<'de> for AnyScalar {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, boolean or null")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Missing)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Missing)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(AnyScalar)
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Flag(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(value))
            }

            // Composite values carry nothing we can show or sort on.
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(FieldValue::Missing)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                while map
                    .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                    .is_some()
                {}
                Ok(FieldValue::Missing)
            }
        }

        deserializer.deserialize_any(AnyScalar)
    }
}

/// One card variant of a player, as returned by `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CardRecord {
    #[serde(default, rename = "Name")]
    pub name: FieldValue,
    #[serde(default, rename = "card")]
    pub card_type: FieldValue,
    #[serde(default)]
    pub overall_rating: FieldValue,
    #[serde(default)]
    pub price: FieldValue,
    #[serde(default)]
    pub predicted_price: FieldValue,
    #[serde(default)]
    pub age: FieldValue,
    #[serde(default)]
    pub positions: FieldValue,
    #[serde(default)]
    pub preferred_foot: FieldValue,
    #[serde(default)]
    pub height_cm: FieldValue,
    #[serde(default)]
    pub weight_kg: FieldValue,
    #[serde(default)]
    pub player_id: FieldValue,
    #[serde(default)]
    pub link: FieldValue,
}

impl CardRecord {
    pub fn field(&self, key: SortKey) -> &FieldValue {
        match key {
            SortKey::Name => &self.name,
            SortKey::Card => &self.card_type,
            SortKey::OverallRating => &self.overall_rating,
            SortKey::Price => &self.price,
            SortKey::PredictedPrice => &self.predicted_price,
            SortKey::Age => &self.age,
            SortKey::Positions => &self.positions,
            SortKey::PreferredFoot => &self.preferred_foot,
            SortKey::HeightCm => &self.height_cm,
            SortKey::WeightKg => &self.weight_kg,
        }
    }

    /// Rendering identity. `player_id` alone repeats across card variants.
    pub fn row_key(&self, position: usize) -> RowKey {
        RowKey {
            player_id: self.player_id.as_text().into_owned(),
            card_type: self.card_type.as_text().into_owned(),
            position,
        }
    }

    pub fn link(&self) -> Option<String> {
        self.link.non_blank_text().map(Cow::into_owned)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub player_id: String,
    pub card_type: String,
    pub position: usize,
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.player_id, self.card_type, self.position)
    }
}

/// Sortable result-table columns, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Card,
    OverallRating,
    Price,
    PredictedPrice,
    Age,
    Positions,
    PreferredFoot,
    HeightCm,
    WeightKg,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        SortKey::Name,
        SortKey::Card,
        SortKey::OverallRating,
        SortKey::Price,
        SortKey::PredictedPrice,
        SortKey::Age,
        SortKey::Positions,
        SortKey::PreferredFoot,
        SortKey::HeightCm,
        SortKey::WeightKg,
    ];

    /// Field name used by the prediction service payload.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Card => "card",
            Self::OverallRating => "overall_rating",
            Self::Price => "price",
            Self::PredictedPrice => "predicted_price",
            Self::Age => "age",
            Self::Positions => "positions",
            Self::PreferredFoot => "preferred_foot",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "🏆 Name",
            Self::Card => "🎴 Card",
            Self::OverallRating => "⭐ Rating",
            Self::Price => "💰 UT Price",
            Self::PredictedPrice => "💎 Real Price",
            Self::Age => "🎂 Age",
            Self::Positions => "📍 Position",
            Self::PreferredFoot => "🦶 Foot",
            Self::HeightCm => "📏 Height",
            Self::WeightKg => "⚖️ Weight",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort column: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.field_name() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}
