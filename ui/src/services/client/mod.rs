// Client-side access to the list service API
//
// - typed reference data (categories, following list, list detail)
// - the `ListyApi` seam and its reqwest implementation
// - a keyed response cache for the screen's queries

pub mod errors;
pub mod listy_client;
pub mod query;
pub mod types;

pub use errors::{ClientError, ClientResult};
pub use listy_client::{ListyApi, ListyClient};
pub use query::{QueryClient, QueryKey};
pub use types::{
    category_display_name, selectable_categories, Category, FollowingList, ListDetail, ListLabel,
    UserSummary, ALL_CATEGORY_CODE,
};
