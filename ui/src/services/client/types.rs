use serde::{Deserialize, Serialize};

use crate::features::list_draft::{BackgroundPalette, DraftList, Language};

/// Code of the "all categories" pseudo-category used by browse screens
pub const ALL_CATEGORY_CODE: &str = "0";

/// Category reference data
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub code: String,
    pub kor_name: String,
    /// Internal value stored on a list
    pub eng_name: String,
}

impl Category {
    pub fn new(code: &str, kor_name: &str, eng_name: &str) -> Self {
        Self {
            code: code.to_string(),
            kor_name: kor_name.to_string(),
            eng_name: eng_name.to_string(),
        }
    }

    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Ko => &self.kor_name,
            Language::En => &self.eng_name,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.code != ALL_CATEGORY_CODE
    }
}

/// Categories a list can be filed under, without the "all" pseudo-category
pub fn selectable_categories(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.is_selectable())
        .cloned()
        .collect()
}

/// Localized name of the category stored under `code`
pub fn category_display_name(
    categories: &[Category],
    code: &str,
    language: Language,
) -> Option<String> {
    categories
        .iter()
        .find(|c| c.eng_name == code)
        .map(|c| c.display_name(language).to_string())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: u64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FollowingList {
    #[serde(default)]
    pub followings: Vec<UserSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListLabel {
    pub name: String,
}

/// Stored list as returned by the list detail endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Internal category value
    pub category: String,
    #[serde(default)]
    pub labels: Vec<ListLabel>,
    #[serde(default)]
    pub collaborators: Vec<UserSummary>,
    pub background_palette: BackgroundPalette,
    pub background_color: String,
    pub is_public: bool,
}

impl From<ListDetail> for DraftList {
    fn from(detail: ListDetail) -> Self {
        DraftList {
            title: detail.title,
            description: detail.description.unwrap_or_default(),
            category: Some(detail.category).filter(|c| !c.is_empty()),
            labels: detail.labels.into_iter().map(|l| l.name).collect(),
            collaborator_ids: detail.collaborators.iter().map(|u| u.id).collect(),
            background_palette: detail.background_palette,
            background_color: detail.background_color,
            is_public: detail.is_public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_category_is_not_selectable() {
        let categories = vec![
            Category::new("0", "전체", "entire"),
            Category::new("1", "문화", "culture"),
            Category::new("2", "일상", "life"),
        ];
        let selectable = selectable_categories(&categories);
        assert_eq!(selectable.len(), 2);
        assert!(selectable.iter().all(|c| c.code != "0"));
    }

    #[test]
    fn test_display_name_resolves_stored_code() {
        let categories = vec![
            Category::new("1", "문화", "culture"),
            Category::new("2", "일상", "life"),
        ];
        assert_eq!(
            category_display_name(&categories, "life", Language::Ko).as_deref(),
            Some("일상")
        );
        assert_eq!(
            category_display_name(&categories, "life", Language::En).as_deref(),
            Some("life")
        );
        assert_eq!(category_display_name(&categories, "food", Language::Ko), None);
    }

    #[test]
    fn test_category_wire_format() {
        let category: Category = serde_json::from_value(json!({
            "code": "3",
            "korName": "음식",
            "engName": "food"
        }))
        .unwrap();
        assert_eq!(category.eng_name, "food");
        assert_eq!(category.display_name(Language::Ko), "음식");
        assert_eq!(category.display_name(Language::En), "food");
    }

    #[test]
    fn test_following_list_defaults_to_empty() {
        let list: FollowingList = serde_json::from_value(json!({})).unwrap();
        assert!(list.followings.is_empty());
    }

    #[test]
    fn test_list_detail_into_draft() {
        let detail: ListDetail = serde_json::from_value(json!({
            "id": 42,
            "title": "Seoul cafes",
            "description": null,
            "category": "place",
            "labels": [{ "name": "cafe" }, { "name": "seoul" }],
            "collaborators": [
                { "id": 7, "nickname": "mina", "profileImageUrl": null },
                { "id": 9, "nickname": "jun", "profileImageUrl": "https://img/9.png" }
            ],
            "backgroundPalette": "POP",
            "backgroundColor": "#FFE36E",
            "isPublic": false
        }))
        .unwrap();

        let draft = DraftList::from(detail);
        assert_eq!(draft.title, "Seoul cafes");
        assert_eq!(draft.description, "");
        assert_eq!(draft.category.as_deref(), Some("place"));
        assert_eq!(draft.labels, vec!["cafe", "seoul"]);
        assert_eq!(draft.collaborator_ids, vec![7, 9]);
        assert_eq!(draft.background_palette, BackgroundPalette::Pop);
        assert!(!draft.is_public);
    }
}
