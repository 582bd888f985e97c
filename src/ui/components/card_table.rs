use dioxus::prelude::*;

use crate::domain::{
    card_type_style, display_currency, display_text, rating_tier, CardRecord, SortDirective,
    SortKey,
};
use crate::ui::theme;

/// Display-ready projection of one card record.
#[derive(Clone, Debug, PartialEq)]
pub struct CardRow {
    pub key: String,
    pub name: String,
    pub link: Option<String>,
    pub card: String,
    pub card_class: &'static str,
    pub rating: String,
    pub rating_class: &'static str,
    pub price: String,
    pub predicted_price: String,
    pub age: String,
    pub positions: String,
    pub preferred_foot: String,
    pub height_cm: String,
    pub weight_kg: String,
}

impl CardRow {
    pub fn new(record: &CardRecord, position: usize) -> Self {
        Self {
            key: record.row_key(position).to_string(),
            name: display_text(&record.name),
            link: record.link(),
            card: display_text(&record.card_type),
            card_class: theme::card_badge(card_type_style(&record.card_type)),
            rating: display_text(&record.overall_rating),
            rating_class: theme::rating_badge(rating_tier(&record.overall_rating)),
            price: display_text(&record.price),
            predicted_price: display_currency(&record.predicted_price),
            age: display_text(&record.age),
            positions: display_text(&record.positions),
            preferred_foot: display_text(&record.preferred_foot),
            height_cm: display_text(&record.height_cm),
            weight_kg: display_text(&record.weight_kg),
        }
    }
}

/// Rows for an already ordered view; keys use the position in that view.
pub fn card_rows<'a>(view: impl IntoIterator<Item = &'a CardRecord>) -> Vec<CardRow> {
    view.into_iter()
        .enumerate()
        .map(|(position, record)| CardRow::new(record, position))
        .collect()
}

#[component]
pub fn CardTable(
    rows: Vec<CardRow>,
    directive: SortDirective,
    on_sort: EventHandler<&'static str>,
) -> Element {
    rsx! {
        div {
            class: "card-table-wrap",
            table {
                class: "card-table",
                thead {
                    tr {
                        for key in SortKey::ALL {
                            th {
                                key: "{key.field_name()}",
                                class: theme::header_cell(directive.key == Some(key)),
                                onclick: move |_| on_sort.call(key.field_name()),
                                "{key.label()}{directive.indicator(key)}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        CardRowView { key: "{row.key}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CardRowView(row: CardRow) -> Element {
    rsx! {
        tr {
            td {
                class: "cell-name",
                if let Some(link) = row.link.clone() {
                    a {
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{row.name}"
                    }
                } else {
                    "{row.name}"
                }
            }
            td {
                span { class: row.card_class, "{row.card}" }
            }
            td {
                span { class: row.rating_class, "{row.rating}" }
            }
            td { class: "cell-price", "{row.price}" }
            td { class: "cell-predicted", "{row.predicted_price}" }
            td { "{row.age}" }
            td { class: "cell-positions", "{row.positions}" }
            td { "{row.preferred_foot}" }
            td { "{row.height_cm}" }
            td { "{row.weight_kg}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldValue, RecordSet, NOT_AVAILABLE};

    #[test]
    fn every_header_column_activates_by_field_name() {
        let mut set = RecordSet::default();
        for key in SortKey::ALL {
            assert_eq!(set.activate_sort_by_name(key.field_name()), Ok(key));
            assert_eq!(set.directive().key, Some(key));
        }
    }

    #[test]
    fn row_formats_every_column() {
        let record = CardRecord {
            name: FieldValue::from("erling haaland"),
            card_type: FieldValue::from("TOTW"),
            overall_rating: FieldValue::Number(91.0),
            price: FieldValue::from("1.2m"),
            predicted_price: FieldValue::Number(180_000_000.4),
            age: FieldValue::Number(24.0),
            positions: FieldValue::from("st"),
            preferred_foot: FieldValue::from("left"),
            height_cm: FieldValue::Number(195.0),
            weight_kg: FieldValue::Missing,
            player_id: FieldValue::Number(239085.0),
            link: FieldValue::from("https://example.com/haaland"),
        };

        let row = CardRow::new(&record, 2);
        assert_eq!(row.key, "239085:TOTW:2");
        assert_eq!(row.name, "Erling haaland");
        assert_eq!(row.link.as_deref(), Some("https://example.com/haaland"));
        assert_eq!(row.card_class, "card-badge gold-totw");
        assert_eq!(row.rating, "91");
        assert_eq!(row.rating_class, "rating-badge tier-5");
        assert_eq!(row.price, "1.2m");
        assert_eq!(row.predicted_price, "€180,000,000");
        assert_eq!(row.positions, "St");
        assert_eq!(row.preferred_foot, "Left");
        assert_eq!(row.weight_kg, NOT_AVAILABLE);
    }

    #[test]
    fn blank_record_renders_placeholders() {
        let row = CardRow::new(&CardRecord::default(), 0);
        assert_eq!(row.name, NOT_AVAILABLE);
        assert_eq!(row.link, None);
        assert_eq!(row.card_class, "card-badge default");
        assert_eq!(row.rating_class, "rating-badge tier-1");
        assert_eq!(row.predicted_price, NOT_AVAILABLE);
    }

    #[test]
    fn rows_are_keyed_by_view_position() {
        let twin = CardRecord {
            player_id: FieldValue::Number(1.0),
            card_type: FieldValue::from("Rare"),
            ..CardRecord::default()
        };
        let rows = card_rows([&twin, &twin]);
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].key, rows[1].key);
    }
}
