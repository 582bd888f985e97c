pub mod card_table;
pub mod toast;
