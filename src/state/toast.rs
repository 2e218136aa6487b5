//! Transient confirmation banner state.
//!
//! Each `show` bumps a sequence number; the timed dismissal that follows
//! carries that number so a stale timer can never clear a newer message.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// State for the transient toast banner.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: Option<String>,
    pub seq: u64,
}

impl ToastState {
    /// Show a message and return the sequence number to pass to `dismiss`.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Clear the message, unless a newer one has been shown since `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}
