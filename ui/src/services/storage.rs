use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::features::list_draft::Language;

const LANGUAGE_KEY: &str = "language";
const USER_KEY: &str = "user";

/// Signed-in user as stored by the login flow
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: u64,
    pub nickname: String,
}

pub struct PreferenceStore;

impl PreferenceStore {
    pub fn get_language() -> Result<Language, StorageError> {
        LocalStorage::get(LANGUAGE_KEY)
    }

    pub fn store_language(language: Language) -> Result<(), StorageError> {
        LocalStorage::set(LANGUAGE_KEY, language)
    }

    pub fn get_current_user() -> Result<CurrentUser, StorageError> {
        LocalStorage::get(USER_KEY)
    }
}
