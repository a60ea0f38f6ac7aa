use common::config::CatalogConfig;

/// Client configuration, with overrides baked in at build time
/// (`CATALOG_VARIANT`, `CATALOG_API_URL`, `CATALOG_PRODUCTS_URL`,
/// `CATALOG_PAGE_SIZE`, `CATALOG_OPEN_DETAIL_ON_CLICK`).
pub fn load() -> CatalogConfig {
    CatalogConfig::default().with_overrides(
        option_env!("CATALOG_VARIANT"),
        option_env!("CATALOG_API_URL"),
        option_env!("CATALOG_PRODUCTS_URL"),
        option_env!("CATALOG_PAGE_SIZE"),
    )
    .with_open_detail_on_click(option_env!("CATALOG_OPEN_DETAIL_ON_CLICK"))
}
