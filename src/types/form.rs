use std::collections::{BTreeSet, HashMap};

use super::field::{FieldCollection, FieldState};

/// An in-memory [`FieldCollection`] of text inputs and checkboxes.
///
/// Each input carries its own set of markers, so a form can be validated,
/// inspected, corrected, and validated again.
#[derive(Debug, Clone, Default)]
pub struct Form {
    inputs: HashMap<String, Input>,
}

/// A single input held by a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    kind: InputKind,
    markers: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputKind {
    Text(String),
    Checkbox { checked: bool, value: String },
}

impl Input {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Text(value.into()),
            markers: BTreeSet::new(),
        }
    }

    /// A checkbox whose value attribute is `"on"`.
    #[must_use]
    pub fn checkbox(checked: bool) -> Self {
        Self::checkbox_with_value(checked, "on")
    }

    #[must_use]
    pub fn checkbox_with_value(checked: bool, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Checkbox {
                checked,
                value: value.into(),
            },
            markers: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }
}

impl FieldState for Input {
    fn is_empty(&self) -> bool {
        match &self.kind {
            InputKind::Text(value) => value.is_empty(),
            InputKind::Checkbox { checked, .. } => !checked,
        }
    }

    fn raw_value(&self) -> &str {
        match &self.kind {
            InputKind::Text(value) | InputKind::Checkbox { value, .. } => value,
        }
    }

    fn is_checked(&self) -> bool {
        match &self.kind {
            InputKind::Text(_) => false,
            InputKind::Checkbox { checked, .. } => *checked,
        }
    }
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text input.
    #[must_use]
    pub fn text(mut self, id: &str, value: impl Into<String>) -> Self {
        self.insert(id, Input::text(value));
        self
    }

    /// Add a checkbox.
    #[must_use]
    pub fn checkbox(mut self, id: &str, checked: bool) -> Self {
        self.insert(id, Input::checkbox(checked));
        self
    }

    /// Insert or replace an input (mutable reference version).
    pub fn insert(&mut self, id: &str, input: Input) {
        self.inputs.insert(id.to_owned(), input);
    }

    /// Change the text of an existing input, keeping its markers.
    /// Returns `false` if there is no text input with that id.
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.inputs.get_mut(id).map(|input| &mut input.kind) {
            Some(InputKind::Text(current)) => {
                *current = value.into();
                true
            }
            _ => false,
        }
    }

    /// Change the checked state of an existing checkbox, keeping its markers.
    /// Returns `false` if there is no checkbox with that id.
    pub fn set_checked(&mut self, id: &str, state: bool) -> bool {
        match self.inputs.get_mut(id).map(|input| &mut input.kind) {
            Some(InputKind::Checkbox { checked, .. }) => {
                *checked = state;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Input> {
        self.inputs.get(id)
    }

    #[must_use]
    pub fn is_marked(&self, id: &str, marker: &str) -> bool {
        self.inputs
            .get(id)
            .is_some_and(|input| input.has_marker(marker))
    }

    /// Ids of every input carrying `marker`, sorted.
    #[must_use]
    pub fn marked(&self, marker: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .inputs
            .iter()
            .filter(|(_, input)| input.has_marker(marker))
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl FieldCollection for Form {
    type Field = Input;

    fn lookup(&self, id: &str) -> Option<&Input> {
        self.inputs.get(id)
    }

    fn mark_invalid(&mut self, id: &str, marker: &str) {
        if let Some(input) = self.inputs.get_mut(id) {
            input.markers.insert(marker.to_owned());
        }
    }

    fn clear_all_marked(&mut self, marker: &str) {
        for input in self.inputs.values_mut() {
            input.markers.remove(marker);
        }
    }
}
