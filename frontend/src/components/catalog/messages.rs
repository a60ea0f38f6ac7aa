use common::catalog::Intent;
use common::model::{Product, ProductDraft, RecordId};
use common::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Image,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<Product>, CatalogError>),
    /// Search, sort, paging and other list intents, applied to the catalog as-is.
    Intent(Intent<ProductDraft>),
    ShowDetail(RecordId),
    CloseDetail,
    Escape,
    OpenCreate,
    OpenEdit(RecordId),
    EditField(ProductField, String),
    SubmitForm,
    CloseForm,
    RequestDelete(RecordId),
}
