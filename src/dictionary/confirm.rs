// Duplicate confirmation - asks the caller whether a repeated target term should still be added

/// Synchronous yes/no query raised when an insert would reuse an existing target term
pub trait DuplicateConfirmer {
    /// Return true to add `source -> target` anyway
    fn confirm_duplicate(&mut self, source: &str, target: &str) -> bool;
}

impl<F> DuplicateConfirmer for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn confirm_duplicate(&mut self, source: &str, target: &str) -> bool {
        self(source, target)
    }
}
