use thiserror::Error;

use super::locale::Language;
use super::types::{DraftList, ListField, ListFormState};

pub const TITLE_MAX_CHARS: usize = 30;
pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const LABELS_MAX: usize = 3;
pub const LABEL_MAX_CHARS: usize = 10;
pub const COLLABORATORS_MAX: usize = 20;

/// Fields whose errors block the "next" action
pub const NEXT_GATED_FIELDS: [ListField; 5] = [
    ListField::Title,
    ListField::Category,
    ListField::Labels,
    ListField::CollaboratorIds,
    ListField::Description,
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field is required")]
    Required,

    #[error("must be at most {max} characters")]
    TooLong { max: usize },

    #[error("at most {max} entries allowed")]
    TooMany { max: usize },

    #[error("duplicate entry: {value}")]
    Duplicate { value: String },

    #[error("value {value} is not allowed here")]
    NotAllowed { value: String },
}

impl ValidationError {
    pub fn message(&self, language: Language) -> String {
        match (self, language) {
            (ValidationError::Required, Language::Ko) => "필수 항목이에요.".to_string(),
            (ValidationError::Required, Language::En) => "This field is required.".to_string(),
            (ValidationError::TooLong { max }, Language::Ko) => {
                format!("최대 {}자까지 입력할 수 있어요.", max)
            }
            (ValidationError::TooLong { max }, Language::En) => {
                format!("Use at most {} characters.", max)
            }
            (ValidationError::TooMany { max }, Language::Ko) => {
                format!("최대 {}개까지 추가할 수 있어요.", max)
            }
            (ValidationError::TooMany { max }, Language::En) => {
                format!("You can add up to {}.", max)
            }
            (ValidationError::Duplicate { value }, Language::Ko) => {
                format!("'{}'은(는) 이미 추가되었어요.", value)
            }
            (ValidationError::Duplicate { value }, Language::En) => {
                format!("'{}' has already been added.", value)
            }
            (ValidationError::NotAllowed { .. }, Language::Ko) => {
                "선택할 수 없는 값이에요.".to_string()
            }
            (ValidationError::NotAllowed { .. }, Language::En) => {
                "This value can't be selected.".to_string()
            }
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if char_len(label) > LABEL_MAX_CHARS {
        return Err(ValidationError::TooLong {
            max: LABEL_MAX_CHARS,
        });
    }
    Ok(())
}

/// Validates a single field of the draft
pub fn validate_field(field: ListField, draft: &DraftList) -> Option<ValidationError> {
    match field {
        ListField::Title => {
            if draft.title.trim().is_empty() {
                Some(ValidationError::Required)
            } else if char_len(&draft.title) > TITLE_MAX_CHARS {
                Some(ValidationError::TooLong {
                    max: TITLE_MAX_CHARS,
                })
            } else {
                None
            }
        }
        ListField::Description => (char_len(&draft.description) > DESCRIPTION_MAX_CHARS).then_some(
            ValidationError::TooLong {
                max: DESCRIPTION_MAX_CHARS,
            },
        ),
        ListField::Category => match draft.category.as_deref() {
            None | Some("") => Some(ValidationError::Required),
            Some(_) => None,
        },
        ListField::Labels => {
            if draft.labels.len() > LABELS_MAX {
                return Some(ValidationError::TooMany { max: LABELS_MAX });
            }
            for (i, label) in draft.labels.iter().enumerate() {
                if let Err(error) = validate_label(label) {
                    return Some(error);
                }
                if draft.labels[..i].contains(label) {
                    return Some(ValidationError::Duplicate {
                        value: label.clone(),
                    });
                }
            }
            None
        }
        ListField::CollaboratorIds => (draft.collaborator_ids.len() > COLLABORATORS_MAX)
            .then_some(ValidationError::TooMany {
                max: COLLABORATORS_MAX,
            }),
        ListField::BackgroundPalette => None,
        ListField::BackgroundColor => {
            if draft.background_palette.contains(&draft.background_color) {
                None
            } else {
                Some(ValidationError::NotAllowed {
                    value: draft.background_color.clone(),
                })
            }
        }
        ListField::IsPublic => None,
    }
}

/// Checks a label typed into the label input before it is appended.
/// Returns the trimmed label on success.
pub fn check_new_label(labels: &[String], candidate: &str) -> Result<String, ValidationError> {
    let label = candidate.trim().to_string();
    validate_label(&label)?;
    if labels.contains(&label) {
        return Err(ValidationError::Duplicate { value: label });
    }
    if labels.len() >= LABELS_MAX {
        return Err(ValidationError::TooMany { max: LABELS_MAX });
    }
    Ok(label)
}

/// Whether the "next" action is enabled for the current state
pub fn is_next_enabled(state: &ListFormState) -> bool {
    let values = &state.values;
    let title_present = !values.title.is_empty();
    let category_present = values.category.as_deref().is_some_and(|c| !c.is_empty());

    title_present
        && category_present
        && NEXT_GATED_FIELDS
            .iter()
            .all(|field| !state.errors.has(*field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::list_draft::types::ListAction;

    fn filled_state() -> ListFormState {
        ListFormState::default()
            .reduce(ListAction::SetTitle("Weekend reads".to_string()))
            .reduce(ListAction::SetCategory(Some("book".to_string())))
    }

    #[test]
    fn test_next_disabled_for_empty_draft() {
        assert!(!is_next_enabled(&ListFormState::default()));
    }

    #[test]
    fn test_next_requires_title_and_category() {
        let title_only =
            ListFormState::default().reduce(ListAction::SetTitle("Weekend reads".to_string()));
        assert!(!is_next_enabled(&title_only));

        let category_only =
            ListFormState::default().reduce(ListAction::SetCategory(Some("book".to_string())));
        assert!(!is_next_enabled(&category_only));

        assert!(is_next_enabled(&filled_state()));
    }

    #[test]
    fn test_next_disabled_by_each_gated_field_error() {
        let too_long_description = filled_state()
            .reduce(ListAction::SetDescription("a".repeat(DESCRIPTION_MAX_CHARS + 1)));
        assert!(!is_next_enabled(&too_long_description));

        let too_many_labels = filled_state().reduce(ListAction::SetLabels(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ]));
        assert!(!is_next_enabled(&too_many_labels));

        let too_many_collaborators =
            filled_state().reduce(ListAction::SetCollaboratorIds((1..=21).collect()));
        assert!(!is_next_enabled(&too_many_collaborators));

        let too_long_title = filled_state().reduce(ListAction::SetTitle("t".repeat(31)));
        assert!(!is_next_enabled(&too_long_title));
    }

    #[test]
    fn test_errors_on_ungated_fields_do_not_block_next() {
        let mut state = filled_state();
        state.values.background_color = "#000000".to_string();
        state.errors.set(
            ListField::BackgroundColor,
            validate_field(ListField::BackgroundColor, &state.values),
        );
        assert!(state.errors.has(ListField::BackgroundColor));
        assert!(is_next_enabled(&state));
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        let draft = DraftList {
            title: "가".repeat(TITLE_MAX_CHARS),
            ..DraftList::default()
        };
        assert_eq!(validate_field(ListField::Title, &draft), None);
    }

    #[test]
    fn test_whitespace_title_is_required_error() {
        let draft = DraftList {
            title: "   ".to_string(),
            ..DraftList::default()
        };
        assert_eq!(
            validate_field(ListField::Title, &draft),
            Some(ValidationError::Required)
        );
    }

    #[test]
    fn test_duplicate_labels_flagged() {
        let draft = DraftList {
            labels: vec!["cafe".to_string(), "cafe".to_string()],
            ..DraftList::default()
        };
        assert_eq!(
            validate_field(ListField::Labels, &draft),
            Some(ValidationError::Duplicate {
                value: "cafe".to_string()
            })
        );
    }

    #[test]
    fn test_check_new_label() {
        let labels = vec!["cafe".to_string(), "seoul".to_string()];
        assert_eq!(check_new_label(&labels, "  brunch "), Ok("brunch".to_string()));
        assert_eq!(
            check_new_label(&labels, "cafe"),
            Err(ValidationError::Duplicate {
                value: "cafe".to_string()
            })
        );
        assert_eq!(check_new_label(&labels, "   "), Err(ValidationError::Required));
        assert_eq!(
            check_new_label(&labels, "abcdefghijk"),
            Err(ValidationError::TooLong {
                max: LABEL_MAX_CHARS
            })
        );

        let full = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            check_new_label(&full, "d"),
            Err(ValidationError::TooMany { max: LABELS_MAX })
        );
    }
}
