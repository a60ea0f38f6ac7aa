use yew::prelude::*;

use common::config::CatalogConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct PostsProps {
    /// REST base URL and initial page size.
    pub config: CatalogConfig,
}
