use super::entities::CardRecord;
use super::record_set::RecordSet;

/// Identifies one issued player query. Only the most recently issued ticket
/// may deliver results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Contents of the search box.
    pub player_name: String,
    pub cards: RecordSet,
    pub loading: bool,
    /// Message of the last failed query, cleared when a new one starts.
    pub error: Option<String>,
    latest_ticket: u64,
}

impl AppState {
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.player_name.trim().is_empty()
    }

    /// Nothing fetched, nothing failed, nothing pending.
    pub fn is_idle(&self) -> bool {
        self.cards.is_empty() && !self.loading && self.error.is_none()
    }

    /// Starts a new query: the previous result set and error are dropped but
    /// the column sort is kept.
    pub fn begin_query(&mut self) -> QueryTicket {
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        self.cards.replace_records(Vec::new());
        QueryTicket(self.latest_ticket)
    }

    /// Applies the outcome of `ticket`. Returns `false` and leaves the state
    /// untouched when a newer query has been issued since.
    pub fn finish_query(
        &mut self,
        ticket: QueryTicket,
        outcome: Result<Vec<CardRecord>, String>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(cards) => self.cards.replace_records(cards),
            Err(message) => self.error = Some(message),
        }
        true
    }
}
