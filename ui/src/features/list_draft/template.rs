//! Prefill of the draft from "create from template" query parameters.
//!
//! A list can be started from a template link carrying `title` and `category`
//! query parameters. The category parameter holds the Korean display name, so
//! the internal code can only be resolved once the category list has loaded.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::types::ListAction;
use crate::services::client::Category;

#[derive(Clone, PartialEq, Debug)]
pub struct TemplateParams {
    pub title: String,
    pub category: String,
}

impl TemplateParams {
    /// Both parameters must be present; otherwise this is not a template creation.
    pub fn from_query(title: Option<String>, category: Option<String>) -> Option<Self> {
        match (title, category) {
            (Some(title), Some(category)) if !title.is_empty() && !category.is_empty() => {
                Some(Self { title, category })
            }
            _ => None,
        }
    }
}

fn fingerprint(categories: &[Category]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for category in categories {
        category.code.hash(&mut hasher);
        category.kor_name.hash(&mut hasher);
        category.eng_name.hash(&mut hasher);
    }
    hasher.finish()
}

/// Applies the template prefill once per distinct categories payload.
/// Held by the flow next to the draft, so remounting the form does not re-apply it.
#[derive(Clone, PartialEq, Debug)]
pub struct TemplatePrefill {
    params: Option<TemplateParams>,
    applied_for: Option<u64>,
}

impl TemplatePrefill {
    pub fn new(params: Option<TemplateParams>) -> Self {
        Self {
            params,
            applied_for: None,
        }
    }

    /// Returns the draft mutations for newly arrived category data.
    /// Empty when this is not a template creation or the data was already applied.
    pub fn on_categories(&mut self, categories: &[Category]) -> Vec<ListAction> {
        let Some(params) = &self.params else {
            return Vec::new();
        };

        let print = fingerprint(categories);
        if self.applied_for == Some(print) {
            return Vec::new();
        }
        self.applied_for = Some(print);

        let code = categories
            .iter()
            .filter(|c| c.is_selectable())
            .find(|c| c.kor_name == params.category)
            .map(|c| c.eng_name.clone());

        if code.is_none() {
            tracing::debug!("No category named {} in template prefill", params.category);
        }

        vec![
            ListAction::SetTitle(params.title.clone()),
            ListAction::SetCategory(code),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::list_draft::ListFormState;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("0", "전체", "entire"),
            Category::new("1", "문화", "culture"),
            Category::new("2", "일상", "life"),
        ]
    }

    fn params() -> Option<TemplateParams> {
        TemplateParams::from_query(Some("My top 5 films".to_string()), Some("문화".to_string()))
    }

    #[test]
    fn test_requires_both_parameters() {
        assert!(TemplateParams::from_query(Some("a".to_string()), None).is_none());
        assert!(TemplateParams::from_query(None, Some("문화".to_string())).is_none());
        assert!(TemplateParams::from_query(Some(String::new()), Some("문화".to_string())).is_none());
        assert!(params().is_some());
    }

    #[test]
    fn test_prefill_writes_code_and_literal_title() {
        let mut prefill = TemplatePrefill::new(params());
        let actions = prefill.on_categories(&categories());
        assert_eq!(
            actions,
            vec![
                ListAction::SetTitle("My top 5 films".to_string()),
                ListAction::SetCategory(Some("culture".to_string())),
            ]
        );
    }

    #[test]
    fn test_prefill_applies_once_per_payload() {
        let mut prefill = TemplatePrefill::new(params());
        assert_eq!(prefill.on_categories(&categories()).len(), 2);
        assert!(prefill.on_categories(&categories()).is_empty());

        let mut changed = categories();
        changed.push(Category::new("3", "음식", "food"));
        assert_eq!(prefill.on_categories(&changed).len(), 2);
    }

    #[test]
    fn test_no_prefill_without_template_params() {
        let mut prefill = TemplatePrefill::new(None);
        assert!(prefill.on_categories(&categories()).is_empty());
    }

    #[test]
    fn test_user_edits_survive_a_second_pass_over_cached_categories() {
        let mut prefill = TemplatePrefill::new(params());
        let mut state = ListFormState::default();
        for action in prefill.on_categories(&categories()) {
            state.reduce_in_place(action);
        }
        state.reduce_in_place(ListAction::SetTitle("My own title".to_string()));
        state.reduce_in_place(ListAction::SetCategory(Some("life".to_string())));

        // Form remounts and sees the same cached payload again
        for action in prefill.on_categories(&categories()) {
            state.reduce_in_place(action);
        }
        assert_eq!(state.values.title, "My own title");
        assert_eq!(state.values.category.as_deref(), Some("life"));
    }

    #[test]
    fn test_all_pseudo_category_is_never_prefilled() {
        let mut prefill = TemplatePrefill::new(TemplateParams::from_query(
            Some("Everything".to_string()),
            Some("전체".to_string()),
        ));
        let actions = prefill.on_categories(&categories());
        assert_eq!(actions[1], ListAction::SetCategory(None));
    }

    #[test]
    fn test_unknown_category_clears_selection() {
        let mut prefill = TemplatePrefill::new(TemplateParams::from_query(
            Some("Title".to_string()),
            Some("Culture".to_string()),
        ));
        let actions = prefill.on_categories(&categories());
        assert_eq!(actions[1], ListAction::SetCategory(None));
    }
}
