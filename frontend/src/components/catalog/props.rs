use yew::prelude::*;

use common::config::CatalogConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogProps {
    /// Where to load products from and the initial page size. Read once, when
    /// the component is created.
    pub config: CatalogConfig,
}
