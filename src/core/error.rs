//! Errors raised by external collaborators
//!
//! Every port call that can fail returns a `DependencyError`. Failures are
//! caught at the dispatch boundary, written to the event log, and the
//! operation is abandoned for that invocation. There is no retry.

/// Failure of an external dependency (roster store, calendar feed, or
/// chat gateway call)
#[derive(Debug, Clone, thiserror::Error)]
pub enum DependencyError {
    /// The remote endpoint could not be reached
    #[error("request failed: {0}")]
    Transport(String),

    /// The remote endpoint answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),

    /// The caller lacks permission for the attempted mutation
    #[error("missing permission: {0}")]
    Forbidden(String),

    /// The remote endpoint answered with a body we could not decode
    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

impl DependencyError {
    /// Short diagnostic suitable for the event log
    ///
    /// Log lines go to a chat channel, so long upstream error chains are
    /// truncated rather than dumped verbatim.
    #[must_use]
    pub fn brief(&self) -> String {
        const MAX: usize = 120;
        let text = self.to_string();
        if text.len() <= MAX {
            text
        } else {
            let cut = text
                .char_indices()
                .take_while(|(i, _)| *i < MAX)
                .last()
                .map_or(0, |(i, c)| i + c.len_utf8());
            format!("{}...", &text[..cut])
        }
    }
}
