//! Result set of the last player query plus the active column sort.

use std::cmp::Ordering;

use super::entities::{CardRecord, FieldValue, SortKey, UnknownSortKey};
use super::normalize::{coerce_number, parse_price_magnitude};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Which column the table is ordered by, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortDirective {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortDirective {
    /// Re-activating the current column flips direction; any other column
    /// starts ascending.
    pub fn activate(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Header arrow for `key`.
    pub fn indicator(&self, key: SortKey) -> &'static str {
        match (self.key, self.direction) {
            (Some(active), SortDirection::Ascending) if active == key => " ▲",
            (Some(active), SortDirection::Descending) if active == key => " ▼",
            _ => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<CardRecord>,
    directive: SortDirective,
}

impl RecordSet {
    pub fn new(records: Vec<CardRecord>) -> Self {
        Self {
            records,
            directive: SortDirective::default(),
        }
    }

    /// Swaps in a fresh result set. The sort directive survives so new
    /// results come back ordered the same way.
    pub fn replace_records(&mut self, records: Vec<CardRecord>) {
        self.records = records;
    }

    pub fn activate_sort(&mut self, key: SortKey) {
        self.directive.activate(key);
    }

    /// Column activation by raw field name, e.g. `"predicted_price"`.
    pub fn activate_sort_by_name(&mut self, column: &str) -> Result<SortKey, UnknownSortKey> {
        let key = column.parse::<SortKey>()?;
        self.activate_sort(key);
        Ok(key)
    }

    pub fn directive(&self) -> SortDirective {
        self.directive
    }

    /// Records in fetch order.
    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by the current directive. Ties keep fetch order in
    /// either direction.
    pub fn ordered_view(&self) -> Vec<&CardRecord> {
        let mut view: Vec<&CardRecord> = self.records.iter().collect();
        if let Some(key) = self.directive.key {
            let direction = self.directive.direction;
            merge_sort_by(&mut view, &mut |a, b| {
                direction.apply(compare_records(a, b, key))
            });
        }
        view
    }
}

/// Stable top-down merge sort. Mixed columns can yield a comparator that is
/// not a total order; this always terminates with a permutation of the
/// input instead of panicking the way `slice::sort_by` may.
fn merge_sort_by<T: Copy>(items: &mut [T], compare: &mut impl FnMut(&T, &T) -> Ordering) {
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort_by(&mut items[..mid], compare);
    merge_sort_by(&mut items[mid..], compare);

    let mut merged = Vec::with_capacity(items.len());
    let (mut left, mut right) = (0, mid);
    while left < mid && right < items.len() {
        // Take from the right run only when strictly smaller.
        if compare(&items[right], &items[left]) == Ordering::Less {
            merged.push(items[right]);
            right += 1;
        } else {
            merged.push(items[left]);
            left += 1;
        }
    }
    merged.extend_from_slice(&items[left..mid]);
    merged.extend_from_slice(&items[right..]);
    items.copy_from_slice(&merged);
}

/// Ascending comparison of two records on one column.
pub fn compare_records(a: &CardRecord, b: &CardRecord, key: SortKey) -> Ordering {
    compare_fields(key, a.field(key), b.field(key))
}

fn compare_fields(key: SortKey, a: &FieldValue, b: &FieldValue) -> Ordering {
    if key == SortKey::Price {
        return compare_f64_nan_first(parse_price_magnitude(a), parse_price_magnitude(b));
    }

    let a_num = coerce_number(a);
    let b_num = coerce_number(b);
    if a_num.is_finite() && b_num.is_finite() {
        return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
    }

    a.as_text().to_lowercase().cmp(&b.as_text().to_lowercase())
}

fn compare_f64_nan_first(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> CardRecord {
        CardRecord {
            name: FieldValue::from(name),
            ..CardRecord::default()
        }
    }

    fn priced(name: &str, price: impl Into<FieldValue>) -> CardRecord {
        CardRecord {
            price: price.into(),
            ..card(name)
        }
    }

    fn names(view: &[&CardRecord]) -> Vec<String> {
        view.iter()
            .map(|record| record.name.as_text().into_owned())
            .collect()
    }

    fn sorted_by(records: Vec<CardRecord>, key: SortKey, direction: SortDirection) -> Vec<String> {
        let mut set = RecordSet::new(records);
        set.activate_sort(key);
        if direction == SortDirection::Descending {
            set.activate_sort(key);
        }
        names(&set.ordered_view())
    }

    #[test]
    fn unsorted_view_keeps_fetch_order() {
        let set = RecordSet::new(vec![card("b"), card("a"), card("c")]);
        assert_eq!(set.directive(), SortDirective::default());
        assert_eq!(names(&set.ordered_view()), ["b", "a", "c"]);
    }

    #[test]
    fn price_descending_uses_magnitudes() {
        let records = vec![priced("A", "1.5m"), priced("B", "900k")];
        assert_eq!(
            sorted_by(records, SortKey::Price, SortDirection::Descending),
            ["A", "B"]
        );
    }

    #[test]
    fn price_ascending_mixes_suffixes_and_plain_numbers() {
        let records = vec![
            priced("million", "1.1M"),
            priced("plain", "950"),
            priced("thousands", "15.5K"),
            priced("absent", FieldValue::Missing),
            priced("glyph", "€ 2,000"),
        ];
        assert_eq!(
            sorted_by(records, SortKey::Price, SortDirection::Ascending),
            ["absent", "plain", "glyph", "thousands", "million"]
        );
    }

    #[test]
    fn unparseable_prices_sort_below_everything() {
        let records = vec![priced("low", "5"), priced("junk", "n/a"), priced("zero", "0")];
        assert_eq!(
            sorted_by(records.clone(), SortKey::Price, SortDirection::Ascending),
            ["junk", "zero", "low"]
        );
        assert_eq!(
            sorted_by(records, SortKey::Price, SortDirection::Descending),
            ["low", "zero", "junk"]
        );
    }

    #[test]
    fn numeric_strings_compare_numerically() {
        let records = vec![
            CardRecord {
                overall_rating: FieldValue::from("9"),
                ..card("nine")
            },
            CardRecord {
                overall_rating: FieldValue::Number(10.0),
                ..card("ten")
            },
            CardRecord {
                overall_rating: FieldValue::from("85"),
                ..card("eighty-five")
            },
        ];
        assert_eq!(
            sorted_by(records, SortKey::OverallRating, SortDirection::Ascending),
            ["nine", "ten", "eighty-five"]
        );
    }

    #[test]
    fn text_compares_case_insensitively_with_blanks_first() {
        let records = vec![
            CardRecord {
                positions: FieldValue::from("ST"),
                ..card("striker")
            },
            CardRecord {
                positions: FieldValue::Missing,
                ..card("unknown")
            },
            CardRecord {
                positions: FieldValue::from("cam"),
                ..card("playmaker")
            },
            CardRecord {
                positions: FieldValue::from(""),
                ..card("empty")
            },
        ];
        assert_eq!(
            sorted_by(records, SortKey::Positions, SortDirection::Ascending),
            ["unknown", "empty", "playmaker", "striker"]
        );
    }

    #[test]
    fn missing_numbers_fall_back_to_text_order() {
        let records = vec![
            CardRecord {
                age: FieldValue::Number(31.0),
                ..card("veteran")
            },
            CardRecord {
                age: FieldValue::Missing,
                ..card("unknown")
            },
            CardRecord {
                age: FieldValue::Number(19.0),
                ..card("prospect")
            },
        ];
        assert_eq!(
            sorted_by(records, SortKey::Age, SortDirection::Ascending),
            ["unknown", "prospect", "veteran"]
        );
    }

    #[test]
    fn ties_keep_fetch_order_in_both_directions() {
        let records = vec![
            priced("first", "1k"),
            priced("big", "2k"),
            priced("second", "1000"),
            priced("third", "1.0k"),
        ];
        assert_eq!(
            sorted_by(records.clone(), SortKey::Price, SortDirection::Ascending),
            ["first", "second", "third", "big"]
        );
        assert_eq!(
            sorted_by(records, SortKey::Price, SortDirection::Descending),
            ["big", "first", "second", "third"]
        );
    }

    #[test]
    fn toggle_flips_and_other_key_resets() {
        let mut directive = SortDirective::default();
        directive.activate(SortKey::Age);
        assert_eq!(directive.key, Some(SortKey::Age));
        assert_eq!(directive.direction, SortDirection::Ascending);

        directive.activate(SortKey::Age);
        assert_eq!(directive.direction, SortDirection::Descending);

        directive.activate(SortKey::Age);
        assert_eq!(directive.direction, SortDirection::Ascending);

        directive.activate(SortKey::Age);
        directive.activate(SortKey::Name);
        assert_eq!(directive.key, Some(SortKey::Name));
        assert_eq!(directive.direction, SortDirection::Ascending);
    }

    #[test]
    fn double_toggle_restores_ascending_view() {
        let mut set = RecordSet::new(vec![
            card("delta"),
            card("Alpha"),
            card("charlie"),
            card("alpha"),
        ]);
        set.activate_sort(SortKey::Name);
        let ascending = names(&set.ordered_view());

        set.activate_sort(SortKey::Name);
        set.activate_sort(SortKey::Name);
        assert_eq!(names(&set.ordered_view()), ascending);
        assert_eq!(ascending, ["Alpha", "alpha", "charlie", "delta"]);
    }

    #[test]
    fn repeated_view_is_idempotent() {
        let mut set = RecordSet::new(vec![priced("x", "3k"), priced("y", "1k"), priced("z", "2k")]);
        set.activate_sort(SortKey::Price);
        let once = names(&set.ordered_view());
        let twice = names(&set.ordered_view());
        assert_eq!(once, twice);
        assert_eq!(set.records()[0].name, FieldValue::from("x"));
    }

    #[test]
    fn view_is_a_permutation_for_every_directive() {
        let records = vec![
            CardRecord {
                overall_rating: FieldValue::Number(88.0),
                positions: FieldValue::from("LW"),
                ..priced("one", "1.2k")
            },
            CardRecord {
                overall_rating: FieldValue::from("n/a"),
                ..priced("two", FieldValue::Missing)
            },
            CardRecord {
                card_type: FieldValue::from("TOTW"),
                ..priced("three", "weird")
            },
            priced("one", "1.2k"),
        ];
        let mut set = RecordSet::new(records.clone());

        for key in SortKey::ALL {
            for _ in 0..2 {
                set.activate_sort(key);
                let mut view: Vec<CardRecord> = set.ordered_view().into_iter().cloned().collect();
                assert_eq!(view.len(), records.len());
                for expected in &records {
                    let position = view
                        .iter()
                        .position(|candidate| candidate == expected)
                        .expect("record present in view");
                    view.remove(position);
                }
                assert!(view.is_empty());
            }
        }
    }

    #[test]
    fn inconsistent_mixed_column_still_yields_a_permutation() {
        const AGES: [&str; 3] = ["-1", "+1", "+a"];

        for size in [21usize, 32, 64, 200] {
            let mut seed: u64 = 0x9e37_79b9 ^ size as u64;
            let records: Vec<CardRecord> = (0..size)
                .map(|idx| {
                    seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                    CardRecord {
                        age: FieldValue::from(AGES[(seed >> 33) as usize % AGES.len()]),
                        ..card(&format!("card {idx}"))
                    }
                })
                .collect();
            let mut set = RecordSet::new(records.clone());

            for _ in 0..2 {
                set.activate_sort(SortKey::Age);
                let mut view = names(&set.ordered_view());
                let mut fetched = names(&records.iter().collect::<Vec<_>>());
                view.sort();
                fetched.sort();
                assert_eq!(view, fetched, "size {size}");
            }
        }
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        merge_sort_by(&mut pairs, &mut |a, b| a.0.cmp(&b.0));
        assert_eq!(pairs, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn replacing_records_keeps_directive() {
        let mut set = RecordSet::new(vec![priced("old", "1k")]);
        set.activate_sort(SortKey::Price);
        set.activate_sort(SortKey::Price);

        set.replace_records(vec![priced("small", "10"), priced("large", "3m")]);
        assert_eq!(set.directive().direction, SortDirection::Descending);
        assert_eq!(names(&set.ordered_view()), ["large", "small"]);
    }

    #[test]
    fn activation_by_field_name() {
        let mut set = RecordSet::default();
        assert_eq!(set.activate_sort_by_name("predicted_price"), Ok(SortKey::PredictedPrice));
        assert_eq!(set.directive().key, Some(SortKey::PredictedPrice));

        assert!(set.activate_sort_by_name("link").is_err());
        assert_eq!(set.directive().key, Some(SortKey::PredictedPrice));
        assert_eq!(set.directive().direction, SortDirection::Ascending);
    }

    #[test]
    fn indicator_marks_only_active_column() {
        let mut directive = SortDirective::default();
        assert_eq!(directive.indicator(SortKey::Price), "");

        directive.activate(SortKey::Price);
        assert_eq!(directive.indicator(SortKey::Price), " ▲");
        assert_eq!(directive.indicator(SortKey::Age), "");

        directive.activate(SortKey::Price);
        assert_eq!(directive.indicator(SortKey::Price), " ▼");
    }
}
