//! Row index resolution for the flat sheets
//!
//! The auxiliary sheets address records purely by position. A row picked
//! from a filtered or searched view must therefore be matched back to its
//! position in the full sheet before any update-at or delete-at call.
//! Field-wise equality against the unfiltered rows is the only identity
//! available; when duplicate rows exist the first occurrence wins,
//! silently. All sheet screens share this one function so the semantics
//! stay uniform.

/// Position of the first record in `full` that is field-wise equal to
/// `selected`, or `None` when the sheet changed underneath the view.
pub fn resolve_index<R: PartialEq>(full: &[R], selected: &R) -> Option<usize> {
    full.iter().position(|row| row == selected)
}
