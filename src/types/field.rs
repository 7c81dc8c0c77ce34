/// Read-only snapshot of one input's current state.
pub trait FieldState {
    /// Empty text, an unchecked box, or no value at all.
    fn is_empty(&self) -> bool;

    /// The value as text. Used by every predicate except `unchecked`.
    fn raw_value(&self) -> &str;

    /// Checked state. Inputs that cannot be checked report `false`.
    fn is_checked(&self) -> bool;
}

/// The collection of inputs a run validates against.
///
/// A validation run owns the collection's markers for its whole duration:
/// it clears every marked input first, then marks the inputs that fail.
pub trait FieldCollection {
    type Field: FieldState;

    /// Find an input by id.
    fn lookup(&self, id: &str) -> Option<&Self::Field>;

    /// Flag one input with `marker`. Unknown ids are ignored.
    fn mark_invalid(&mut self, id: &str, marker: &str);

    /// Remove `marker` from every input that carries it.
    fn clear_all_marked(&mut self, marker: &str);
}
