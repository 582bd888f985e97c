//! Card lookup domain: raw records, value normalization and the sortable
//! result set.

pub mod app_state;
pub mod entities;
pub mod normalize;
pub mod record_set;

#[allow(unused_imports)]
pub use app_state::{AppState, QueryTicket};
#[allow(unused_imports)]
pub use entities::{CardRecord, FieldValue, RowKey, SortKey, UnknownSortKey};
#[allow(unused_imports)]
pub use normalize::{
    card_type_style, coerce_number, display_currency, display_text, format_currency,
    parse_price_magnitude, rating_tier, CardStyle, RatingTier, NOT_AVAILABLE,
};
#[allow(unused_imports)]
pub use record_set::{compare_records, RecordSet, SortDirection, SortDirective};
