//! Correlation identifier generation.

/// Generates request identifiers unique within one session.
///
/// Owned by the session rather than shared process state, so multiple
/// concurrent sessions in one process never contend or collide.
pub(crate) struct RequestIdGen {
    prefix: String,
    next: u64,
}

impl RequestIdGen {
    pub(crate) fn new(prefix: String) -> Self {
        Self { prefix, next: 0 }
    }

    /// Produce the next identifier: `"<prefix>-<n>"`, monotonic.
    pub(crate) fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
