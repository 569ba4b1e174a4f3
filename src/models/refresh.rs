use chrono::{DateTime, Local};
use derive_getters::Getters;

/// What the presentation layer needs to know about the refresh loop.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq)]
pub struct RefreshStatus {
    loading: bool,
    last_error: Option<String>,
    last_updated: Option<DateTime<Local>>,
}

impl RefreshStatus {
    pub fn begin(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    pub fn finish(&mut self, last_error: Option<String>, updated_at: DateTime<Local>) {
        self.loading = false;
        self.last_error = last_error;
        self.last_updated = Some(updated_at);
    }

    pub fn abandon(&mut self) {
        self.loading = false;
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}

/// Outcome of a single refresh cycle.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq)]
pub struct RefreshReport {
    requested: usize,
    updated: usize,
    failed: usize,
    last_error: Option<String>,
    /// Another cycle was already in flight, nothing was requested.
    skipped: bool,
}

impl RefreshReport {
    pub fn new(requested: usize, updated: usize, failed: usize, last_error: Option<String>) -> Self {
        Self {
            requested,
            updated,
            failed,
            last_error,
            skipped: false,
        }
    }

    pub fn coalesced() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        self.failed > 0
    }
}
