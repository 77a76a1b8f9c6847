//! Interactive session state: one snapshot slot plus loading/error flags.
//!
//! Submissions may overlap. Each one takes a [`RequestTicket`] carrying a
//! generation number, and only the ticket of the latest submission may
//! change the state. Responses to older tickets are dropped, so the final
//! state always matches the last thing the user asked for.

use crate::error::LookupError;
use crate::types::WeatherSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    query: String,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The result replaced the session state
    Applied,
    /// A newer submission exists; the result was discarded
    Stale,
}

#[derive(Debug, Default)]
pub struct WeatherSession {
    snapshot: Option<WeatherSnapshot>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl WeatherSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission. Any response to an earlier ticket becomes stale.
    pub fn begin(&mut self, query: &str) -> RequestTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        RequestTicket {
            generation: self.generation,
            query: query.to_string(),
        }
    }

    /// Apply the result of a submission if it is still the latest one.
    pub fn apply(
        &mut self,
        ticket: &RequestTicket,
        result: Result<WeatherSnapshot, LookupError>,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale result for '{}' (generation {}, latest {})",
                ticket.query,
                ticket.generation,
                self.generation
            );
            return ApplyOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Lookup for '{}' failed: {}", ticket.query, e);
                self.snapshot = None;
                self.error = Some(e.user_message());
            }
        }
        ApplyOutcome::Applied
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
