//! Client configuration shared by the frontend and the static host.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{DeleteMode, PageSize};

/// Which catalog the client shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Read-only product seed, session-local hard delete.
    #[default]
    Products,
    /// Posts and comments on a writable REST store, soft delete.
    Posts,
}

impl Variant {
    pub fn delete_mode(self) -> DeleteMode {
        match self {
            Variant::Products => DeleteMode::Hard,
            Variant::Posts => DeleteMode::Soft,
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "products" => Ok(Variant::Products),
            "posts" => Ok(Variant::Posts),
            other => Err(format!("unknown catalog variant: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub variant: Variant,
    /// Base URL of the REST store holding `posts` and `comments`.
    pub api_base_url: String,
    /// Where the product seed is fetched from.
    pub products_url: String,
    pub page_size: PageSize,
    /// Clicking a card opens its detail sheet. Card buttons never do.
    pub open_detail_on_click: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            api_base_url: "http://localhost:3000".to_string(),
            products_url: "./db.json".to_string(),
            page_size: PageSize::default(),
            open_detail_on_click: true,
        }
    }
}

impl CatalogConfig {
    /// Applies string overrides (as found in build or process environment).
    /// Unparsable values are reported and the default is kept.
    pub fn with_overrides(
        mut self,
        variant: Option<&str>,
        api_base_url: Option<&str>,
        products_url: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        if let Some(raw) = variant {
            match raw.parse() {
                Ok(variant) => self.variant = variant,
                Err(e) => log::warn!("{}", e),
            }
        }
        if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(url) = products_url.filter(|u| !u.trim().is_empty()) {
            self.products_url = url.trim().to_string();
        }
        if let Some(raw) = page_size {
            match raw
                .trim()
                .parse::<usize>()
                .map_err(|e| e.to_string())
                .and_then(PageSize::try_from)
            {
                Ok(size) => self.page_size = size,
                Err(e) => log::warn!("ignoring page size {:?}: {}", raw, e),
            }
        }
        self
    }

    pub fn with_open_detail_on_click(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.open_detail_on_click = true,
                "0" | "false" | "no" => self.open_detail_on_click = false,
                _ => log::warn!("ignoring open-detail-on-click value {:?}", raw),
            }
        }
        self
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.variant.delete_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"variant": "posts"}"#).unwrap();
        assert_eq!(config.variant, Variant::Posts);
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.delete_mode(), DeleteMode::Soft);
        assert!(config.open_detail_on_click);
    }

    #[test]
    fn card_click_can_be_turned_off() {
        let config = CatalogConfig::default().with_open_detail_on_click(Some(" False "));
        assert!(!config.open_detail_on_click);

        let config = config.with_open_detail_on_click(Some("sometimes"));
        assert!(!config.open_detail_on_click);
        assert!(CatalogConfig::default().with_open_detail_on_click(None).open_detail_on_click);

        let config: CatalogConfig =
            serde_json::from_str(r#"{"openDetailOnClick": false}"#).unwrap();
        assert!(!config.open_detail_on_click);
    }

    #[test]
    fn overrides_apply_and_bad_values_are_ignored() {
        let config = CatalogConfig::default().with_overrides(
            Some("POSTS"),
            Some("http://api.local:4000/"),
            None,
            Some("7"),
        );
        assert_eq!(config.variant, Variant::Posts);
        assert_eq!(config.api_base_url, "http://api.local:4000");
        assert_eq!(config.products_url, "./db.json");
        assert_eq!(config.page_size, PageSize::Ten);

        let config = CatalogConfig::default().with_overrides(None, None, None, Some("20"));
        assert_eq!(config.page_size, PageSize::Twenty);
    }
}
