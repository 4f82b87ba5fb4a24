//! Values the list creation flow shares with its screens through Dioxus context

use std::rc::Rc;

use dioxus::prelude::*;

use crate::features::list_draft::{ListAction, ListFormState, TemplatePrefill};
use crate::services::client::{
    Category, ClientResult, FollowingList, ListDetail, ListyApi, ListyClient, QueryClient,
    QueryKey,
};
use crate::services::config::AppConfig;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ListFormMode {
    Create,
    Edit { list_id: u64 },
}

impl ListFormMode {
    /// The stored list that still has to be loaded into the draft, given the
    /// id of the list loaded last.
    pub fn pending_list(&self, loaded: Option<u64>) -> Option<u64> {
        match self {
            ListFormMode::Edit { list_id } if loaded != Some(*list_id) => Some(*list_id),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FlowStep {
    ListInfo,
    Review,
}

/// Shared draft state plus the dispatcher every field writes through
#[derive(Clone, Copy, PartialEq)]
pub struct ListFormContext {
    pub state: Signal<ListFormState>,
    pub dispatch: EventHandler<ListAction>,
    /// Template prefill bookkeeping, owned alongside the draft
    pub prefill: Signal<TemplatePrefill>,
}

/// API access with the query cache in front of it
#[derive(Clone)]
pub struct ServiceContext {
    pub api: Rc<dyn ListyApi>,
    pub query: QueryClient,
}

impl PartialEq for ServiceContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && self.query == other.query
    }
}

impl ServiceContext {
    pub fn from_config(config: &AppConfig) -> ClientResult<Self> {
        let client = ListyClient::new(&config.api)?;
        Ok(Self {
            api: Rc::new(client),
            query: QueryClient::new(config.query.cache_capacity),
        })
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.query
            .fetch(QueryKey::Categories, || self.api.get_categories())
            .await
    }

    pub async fn following_list(&self, user_id: u64) -> ClientResult<FollowingList> {
        self.query
            .fetch(QueryKey::FollowingList(user_id), || {
                self.api.get_following_list(user_id)
            })
            .await
    }

    pub async fn list_detail(&self, list_id: u64) -> ClientResult<ListDetail> {
        self.query
            .fetch(QueryKey::ListDetail(list_id), || self.api.get_list_detail(list_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_never_loads() {
        assert_eq!(ListFormMode::Create.pending_list(None), None);
        assert_eq!(ListFormMode::Create.pending_list(Some(1)), None);
    }

    #[test]
    fn test_edit_mode_loads_each_new_list_id() {
        let first = ListFormMode::Edit { list_id: 1 };
        assert_eq!(first.pending_list(None), Some(1));
        assert_eq!(first.pending_list(Some(1)), None);

        // Same component, route moved on to another list
        let second = ListFormMode::Edit { list_id: 2 };
        assert_eq!(second.pending_list(Some(1)), Some(2));
    }
}
