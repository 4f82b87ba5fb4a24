//! Localized string tables for the list creation screen

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Maps a BCP 47 tag such as `en-US` to a supported language.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

pub struct ListLocale {
    pub create_list: &'static str,
    pub edit_list: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub close: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub label: &'static str,
    pub add_collaborator: &'static str,
    pub add_collaborator_error: &'static str,
    pub background_color: &'static str,
    pub public_setting: &'static str,
    pub public_message: &'static str,
    pub private_message: &'static str,
    pub required: &'static str,
    pub loading_categories: &'static str,
    pub loading_following: &'static str,
    pub loading_list: &'static str,
    pub fetch_failed: &'static str,
    pub no_following: &'static str,
    pub review_title: &'static str,
}

pub struct ListPlaceholder {
    pub title: &'static str,
    pub description: &'static str,
    pub label: &'static str,
    pub collaborator: &'static str,
}

const KO_LOCALE: ListLocale = ListLocale {
    create_list: "리스트 생성",
    edit_list: "리스트 수정",
    next: "다음",
    back: "이전",
    close: "닫기",
    title: "타이틀",
    description: "소개",
    category: "카테고리",
    label: "라벨",
    add_collaborator: "콜라보레이터 추가",
    add_collaborator_error: "콜라보레이터는 최대 20명까지 추가할 수 있어요.",
    background_color: "배경 색상",
    public_setting: "공개 설정",
    public_message: "모든 사람이 이 리스트를 볼 수 있어요.",
    private_message: "나만 이 리스트를 볼 수 있어요.",
    required: "필수",
    loading_categories: "카테고리를 불러오는 중...",
    loading_following: "팔로잉 목록을 불러오는 중...",
    loading_list: "리스트를 불러오는 중...",
    fetch_failed: "정보를 불러오지 못했어요. 잠시 후 다시 시도해 주세요.",
    no_following: "팔로잉한 사용자가 없어요.",
    review_title: "입력한 리스트 정보",
};

const EN_LOCALE: ListLocale = ListLocale {
    create_list: "Create List",
    edit_list: "Edit List",
    next: "Next",
    back: "Back",
    close: "Close",
    title: "Title",
    description: "Description",
    category: "Category",
    label: "Labels",
    add_collaborator: "Add Collaborators",
    add_collaborator_error: "You can add up to 20 collaborators.",
    background_color: "Background Color",
    public_setting: "Visibility",
    public_message: "Everyone can see this list.",
    private_message: "Only you can see this list.",
    required: "Required",
    loading_categories: "Loading categories...",
    loading_following: "Loading your following list...",
    loading_list: "Loading list...",
    fetch_failed: "Couldn't load this information. Please try again later.",
    no_following: "You are not following anyone yet.",
    review_title: "List details",
};

const KO_PLACEHOLDER: ListPlaceholder = ListPlaceholder {
    title: "리스트 타이틀을 작성해 주세요.",
    description: "리스트에 대한 소개를 작성해 주세요.",
    label: "라벨을 입력하고 엔터를 눌러 주세요.",
    collaborator: "닉네임으로 검색해 주세요.",
};

const EN_PLACEHOLDER: ListPlaceholder = ListPlaceholder {
    title: "Write a title for your list.",
    description: "Tell people what this list is about.",
    label: "Type a label and press Enter.",
    collaborator: "Search by nickname.",
};

pub fn list_locale(language: Language) -> &'static ListLocale {
    match language {
        Language::Ko => &KO_LOCALE,
        Language::En => &EN_LOCALE,
    }
}

pub fn list_placeholder(language: Language) -> &'static ListPlaceholder {
    match language {
        Language::Ko => &KO_PLACEHOLDER,
        Language::En => &EN_PLACEHOLDER,
    }
}
