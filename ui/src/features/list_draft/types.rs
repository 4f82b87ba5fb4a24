// Core types for the list draft - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::background::BackgroundPalette;
use super::validation::{validate_field, ValidationError};
use crate::services::client::Category;

/// In-progress list record shared by every step of the creation flow
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftList {
    pub title: String,
    pub description: String,
    /// Internal category code (never the display name)
    pub category: Option<String>,
    pub labels: Vec<String>,
    pub collaborator_ids: Vec<u64>,
    pub background_palette: BackgroundPalette,
    pub background_color: String,
    pub is_public: bool,
}

impl Default for DraftList {
    fn default() -> Self {
        let palette = BackgroundPalette::default();
        Self {
            title: String::new(),
            description: String::new(),
            category: None,
            labels: Vec::new(),
            collaborator_ids: Vec::new(),
            background_palette: palette,
            background_color: palette.default_color().to_string(),
            is_public: true,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ListField {
    Title,
    Description,
    Category,
    Labels,
    CollaboratorIds,
    BackgroundPalette,
    BackgroundColor,
    IsPublic,
}

const ALL_FIELDS: [ListField; 8] = [
    ListField::Title,
    ListField::Description,
    ListField::Category,
    ListField::Labels,
    ListField::CollaboratorIds,
    ListField::BackgroundPalette,
    ListField::BackgroundColor,
    ListField::IsPublic,
];

/// Per-field validation errors
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors(BTreeMap<ListField, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: ListField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn has(&self, field: ListField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn set(&mut self, field: ListField, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Action enum for draft mutations
#[derive(Clone, PartialEq, Debug)]
pub enum ListAction {
    SetTitle(String),
    SetDescription(String),
    SetCategory(Option<String>),
    SetLabels(Vec<String>),
    SetCollaboratorIds(Vec<u64>),
    SetBackground {
        palette: BackgroundPalette,
        color: String,
    },
    SetPublic(bool),
    /// Replace the whole draft, e.g. with a stored list in edit mode
    ResetDraft(DraftList),
}

impl ListAction {
    /// Selecting a category stores its internal code, never the display name
    pub fn select_category(category: &Category) -> Self {
        ListAction::SetCategory(Some(category.eng_name.clone()))
    }

    /// Fields whose validity must be recomputed after this action
    fn touched_fields(&self) -> &'static [ListField] {
        match self {
            ListAction::SetTitle(_) => &[ListField::Title],
            ListAction::SetDescription(_) => &[ListField::Description],
            ListAction::SetCategory(_) => &[ListField::Category],
            ListAction::SetLabels(_) => &[ListField::Labels],
            ListAction::SetCollaboratorIds(_) => &[ListField::CollaboratorIds],
            ListAction::SetBackground { .. } => {
                &[ListField::BackgroundPalette, ListField::BackgroundColor]
            }
            ListAction::SetPublic(_) => &[ListField::IsPublic],
            ListAction::ResetDraft(_) => &ALL_FIELDS,
        }
    }
}

/// Shared form-state container: field values plus their error map
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ListFormState {
    pub values: DraftList,
    pub errors: FieldErrors,
}

impl ListFormState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: ListAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Applies an action in place so Dioxus signal subscribers see a single write
    pub fn reduce_in_place(&mut self, action: ListAction) {
        let touched = action.touched_fields();
        match action {
            ListAction::SetTitle(title) => {
                self.values.title = title;
            }
            ListAction::SetDescription(description) => {
                self.values.description = description;
            }
            ListAction::SetCategory(category) => {
                self.values.category = category;
            }
            ListAction::SetLabels(labels) => {
                self.values.labels = labels;
            }
            ListAction::SetCollaboratorIds(ids) => {
                self.values.collaborator_ids = ids;
            }
            ListAction::SetBackground { palette, color } => {
                self.values.background_palette = palette;
                self.values.background_color = color;
            }
            ListAction::SetPublic(is_public) => {
                self.values.is_public = is_public;
            }
            ListAction::ResetDraft(draft) => {
                self.values = draft;
                self.errors.clear();
            }
        }

        for field in touched {
            self.errors.set(*field, validate_field(*field, &self.values));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::list_draft::is_next_enabled;

    #[test]
    fn test_default_draft() {
        let draft = DraftList::default();
        assert!(draft.title.is_empty());
        assert_eq!(draft.category, None);
        assert!(draft.is_public);
        assert!(draft.background_palette.contains(&draft.background_color));
    }

    #[test]
    fn test_setting_a_field_revalidates_only_that_field() {
        let state = ListFormState::default().reduce(ListAction::SetTitle("x".repeat(31)));
        assert!(state.errors.has(ListField::Title));
        assert!(!state.errors.has(ListField::Category));

        let state = state.reduce(ListAction::SetTitle("Best ramen in Seoul".to_string()));
        assert!(!state.errors.has(ListField::Title));
    }

    #[test]
    fn test_reset_draft_replaces_values_and_clears_errors() {
        let state = ListFormState::default().reduce(ListAction::SetTitle(String::new()));
        assert!(state.errors.has(ListField::Title));

        let stored = DraftList {
            title: "Stored".to_string(),
            category: Some("culture".to_string()),
            ..DraftList::default()
        };
        let state = state.reduce(ListAction::ResetDraft(stored.clone()));
        assert_eq!(state.values, stored);
        assert!(state.errors.is_empty());
        assert!(is_next_enabled(&state));
    }

    #[test]
    fn test_reset_draft_revalidates_stored_values() {
        let stored = DraftList {
            title: "x".repeat(40),
            category: Some("culture".to_string()),
            collaborator_ids: (1..=21).collect(),
            ..DraftList::default()
        };
        let state = ListFormState::default().reduce(ListAction::ResetDraft(stored));

        assert_eq!(state.values.collaborator_ids.len(), 21);
        assert_eq!(
            state.errors.get(ListField::Title),
            Some(&ValidationError::TooLong { max: 30 })
        );
        assert_eq!(
            state.errors.get(ListField::CollaboratorIds),
            Some(&ValidationError::TooMany { max: 20 })
        );
        assert!(!is_next_enabled(&state));
    }

    #[test]
    fn test_select_category_writes_internal_code() {
        let category = Category::new("1", "문화", "culture");
        let action = ListAction::select_category(&category);
        assert_eq!(action, ListAction::SetCategory(Some("culture".to_string())));

        let state = ListFormState::default().reduce(action);
        assert_eq!(state.values.category.as_deref(), Some("culture"));
        assert_ne!(state.values.category.as_deref(), Some("문화"));
        assert!(!state.errors.has(ListField::Category));
    }

    #[test]
    fn test_set_background_writes_both_fields() {
        let color = BackgroundPalette::Calm.colors()[1].to_string();
        let state = ListFormState::default().reduce(ListAction::SetBackground {
            palette: BackgroundPalette::Calm,
            color: color.clone(),
        });
        assert_eq!(state.values.background_palette, BackgroundPalette::Calm);
        assert_eq!(state.values.background_color, color);
        assert!(!state.errors.has(ListField::BackgroundColor));
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let value = serde_json::to_value(DraftList::default()).unwrap();
        assert!(value.get("collaboratorIds").is_some());
        assert!(value.get("backgroundPalette").is_some());
        assert_eq!(value["isPublic"], serde_json::json!(true));
    }
}
