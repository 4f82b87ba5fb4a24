use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::{Category, FollowingList, ListDetail};
use crate::services::config::ApiConfig;

/// Read-only reference data endpoints used by the list creation flow
#[async_trait(?Send)]
pub trait ListyApi {
    async fn get_categories(&self) -> ClientResult<Vec<Category>>;

    async fn get_following_list(&self, user_id: u64) -> ClientResult<FollowingList>;

    async fn get_list_detail(&self, list_id: u64) -> ClientResult<ListDetail>;
}

/// HTTP client for the list service API
#[derive(Clone)]
pub struct ListyClient {
    http_client: Client,
    base_url: String,
}

impl ListyClient {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        // Browsers own the User-Agent header, so none is set here
        let http_client = Client::builder()
            .build()
            .map_err(|e| ClientError::Setup {
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("GET {} failed: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("GET {} returned {}", url, status);
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<T>().await.map_err(|e| ClientError::Decode {
            message: format!("{}: {}", url, e),
        })
    }
}

#[async_trait(?Send)]
impl ListyApi for ListyClient {
    #[instrument(skip(self), err)]
    async fn get_categories(&self) -> ClientResult<Vec<Category>> {
        let categories: Vec<Category> = self.get_json("categories").await?;
        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    #[instrument(skip(self), err)]
    async fn get_following_list(&self, user_id: u64) -> ClientResult<FollowingList> {
        let list: FollowingList = self
            .get_json(&format!("users/{}/followings", user_id))
            .await?;
        info!(
            "Fetched {} followings for user {}",
            list.followings.len(),
            user_id
        );
        Ok(list)
    }

    #[instrument(skip(self), err)]
    async fn get_list_detail(&self, list_id: u64) -> ClientResult<ListDetail> {
        self.get_json(&format!("lists/{}", list_id)).await
    }
}
