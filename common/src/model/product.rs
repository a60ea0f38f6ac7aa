//! Product entries of the catalog variant.
//!
//! Products come from a static `db.json` seed and are removed outright on
//! delete. The optional `isDeleted` flag is carried through untouched so a seed
//! written for the soft-delete variant still loads.

use serde::{Deserialize, Deserializer, Serialize};

use super::record::{Listable, Record, RecordId, require_text};
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "price_from_number_or_text")]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

/// Form fields for creating or editing a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

impl Record for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    const COLLECTION: &'static str = "products";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted.unwrap_or(false)
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = Some(deleted);
    }

    fn validate(draft: &ProductDraft) -> Result<(), CatalogError> {
        require_text("name", &draft.name, "Please enter a product name")?;
        require_text(
            "description",
            &draft.description,
            "Please enter a product description",
        )?;
        if draft.price == 0.0 || !draft.price.is_finite() {
            return Err(CatalogError::validation("price", "Please enter a price"));
        }
        Ok(())
    }

    fn from_draft(id: RecordId, draft: &ProductDraft) -> Self {
        Product {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            price: draft.price,
            image: draft.image.trim().to_string(),
            is_deleted: None,
        }
    }

    fn patch_from_draft(draft: &ProductDraft) -> ProductPatch {
        ProductPatch {
            name: Some(draft.name.trim().to_string()),
            description: Some(draft.description.trim().to_string()),
            price: Some(draft.price),
            image: Some(draft.image.trim().to_string()),
            is_deleted: None,
        }
    }

    fn deletion_patch(deleted: bool) -> ProductPatch {
        ProductPatch {
            is_deleted: Some(deleted),
            ..ProductPatch::default()
        }
    }

    fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(deleted) = patch.is_deleted {
            self.is_deleted = Some(deleted);
        }
    }
}

impl Listable for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn magnitude(&self) -> f64 {
        self.price
    }
}

/// Accepts `19.99`, `"19.99"` and `"$19.99"`. Unparsable text becomes 0.
fn price_from_number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => n,
        RawPrice::Text(s) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse()
            .unwrap_or(0.0),
    })
}
