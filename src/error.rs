//! Errors surfaced by [`Tree`][crate::Tree] operations.
//!
//! Lookups that miss are not errors: [`Tree::find`][crate::Tree::find] returns `None`,
//! [`Tree::depth`][crate::Tree::depth] returns `-1` and deleting an absent key does nothing.

/// Returned by the traversal methods on [`Tree`][crate::Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TraversalError {
    /// The traversal was started without a callback to visit nodes with.
    #[error("Callback is required")]
    MissingCallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_callback_message() {
        assert_eq!(
            TraversalError::MissingCallback.to_string(),
            "Callback is required"
        );
    }
}
