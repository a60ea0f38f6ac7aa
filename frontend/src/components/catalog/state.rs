//! Component state for the product catalog.
//!
//! The `Catalog` owns every piece of list state (store, filter, sort, pager,
//! edit session). The component only adds what is purely presentational: the
//! loading flag, the load error banner, which product the detail sheet shows,
//! and the raw strings of the create/edit form.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

use common::catalog::Catalog;
use common::model::{Product, ProductDraft, RecordId};

use super::messages::ProductField;
use crate::components::helpers::parse_price;
use crate::source::HttpSource;

pub struct CatalogComponent {
    pub catalog: Catalog<Product>,

    pub source: Rc<HttpSource<Product>>,

    /// A load is in flight. An empty catalog shows a full-area message, a
    /// loaded one keeps its cards under an inline indicator.
    pub loading: bool,

    /// Message of the last failed load. Replaces the content area until the
    /// next successful load.
    pub load_error: Option<String>,

    /// Product shown in the detail sheet.
    pub detail: Option<RecordId>,

    /// Clicking anywhere on a card opens its detail sheet.
    pub open_detail_on_click: bool,

    /// Open create/edit form.
    pub form: Option<ProductForm>,

    /// Document-level `keydown` handler (Escape closes sheets). Kept alive for
    /// as long as the component is mounted.
    pub key_listener: Option<Closure<dyn Fn(KeyboardEvent)>>,

    /// Guard for first-render initialization.
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Raw form inputs, parsed into a `ProductDraft` on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl ProductForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
        }
    }

    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }

    pub fn set(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Description => self.description = value,
            ProductField::Price => self.price = value,
            ProductField::Image => self.image = value,
        }
    }

    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: parse_price(&self.price),
            image: self.image.clone(),
        }
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.mode == FormMode::Edit(id.clone())
    }
}
