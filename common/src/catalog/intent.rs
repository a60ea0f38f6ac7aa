//! Typed user intents and the single dispatcher that routes them.
//!
//! Renderers never call into the store directly: every click, keystroke or
//! selection becomes an `Intent` carrying at most a target id and, for forms, a
//! field bundle (`R::Draft`).

use super::{Catalog, PageSize, Renderer, SortKey};
use crate::error::CatalogError;
use crate::model::{Listable, RecordId};

#[derive(Debug, Clone, PartialEq)]
pub enum Intent<D> {
    Search(String),
    Sort(SortKey),
    SetPageSize(PageSize),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    BeginEdit(RecordId),
    CancelEdit,
    Create(D),
    SaveEdit(D),
    Delete { id: RecordId, confirmed: bool },
    Restore(RecordId),
}

impl<D> Intent<D> {
    /// True for intents that write to the record store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Intent::Create(_) | Intent::SaveEdit(_) | Intent::Delete { .. } | Intent::Restore(_)
        )
    }
}

impl<R: Listable> Catalog<R> {
    /// Applies `intent` locally. Every successful intent leaves the view
    /// refreshed; a failed one leaves state untouched.
    pub fn dispatch(&mut self, intent: Intent<R::Draft>) -> Result<(), CatalogError> {
        match intent {
            Intent::Search(term) => self.set_filter(term),
            Intent::Sort(key) => self.set_sort(key),
            Intent::SetPageSize(size) => self.set_page_size(size),
            Intent::NextPage => self.next_page(),
            Intent::PreviousPage => self.previous_page(),
            Intent::GoToPage(page) => self.go_to_page(page),
            Intent::BeginEdit(id) => {
                self.begin_edit(&id)?;
            }
            Intent::CancelEdit => self.cancel_edit(),
            Intent::Create(draft) => {
                self.create(&draft)?;
            }
            Intent::SaveEdit(draft) => {
                self.save_edit(&draft)?;
            }
            Intent::Delete { id, confirmed } => {
                self.delete(&id, confirmed)?;
            }
            Intent::Restore(id) => {
                self.restore(&id)?;
            }
        }
        Ok(())
    }

    /// Dispatches `intent` and, on success, notifies `renderer` with the fresh
    /// snapshot.
    pub fn dispatch_and_render(
        &mut self,
        intent: Intent<R::Draft>,
        renderer: &mut dyn Renderer<R>,
    ) -> Result<(), CatalogError> {
        self.dispatch(intent)?;
        self.render(renderer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogView, DeleteMode};
    use crate::model::{Product, ProductDraft};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, usize, Vec<String>)>,
    }

    impl Renderer<Product> for Recorder {
        fn render(&mut self, view: &CatalogView<'_, Product>) {
            self.frames.push((
                view.page,
                view.total_pages,
                view.items.iter().map(|p| p.name.clone()).collect(),
            ));
        }
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            description: "thing".into(),
            price: 5.0,
            image: String::new(),
        }
    }

    #[test]
    fn renderer_sees_every_successful_intent() {
        let mut catalog = Catalog::new(DeleteMode::Hard).with_page_size(PageSize::Five);
        let mut recorder = Recorder::default();

        for name in ["b", "a", "c"] {
            catalog
                .dispatch_and_render(Intent::Create(draft(name)), &mut recorder)
                .unwrap();
        }
        catalog
            .dispatch_and_render(Intent::Sort(SortKey::NameAsc), &mut recorder)
            .unwrap();

        assert_eq!(recorder.frames.len(), 4);
        assert_eq!(recorder.frames[3].2, ["a", "b", "c"]);
    }

    #[test]
    fn failed_intent_is_not_rendered() {
        let mut catalog: Catalog<Product> = Catalog::new(DeleteMode::Hard);
        let mut recorder = Recorder::default();
        let result = catalog.dispatch_and_render(Intent::Create(draft("")), &mut recorder);
        assert!(result.is_err());
        assert!(recorder.frames.is_empty());
    }

    #[test]
    fn only_store_writes_count_as_mutations() {
        assert!(Intent::<ProductDraft>::Restore(RecordId::from(1)).is_mutation());
        assert!(!Intent::<ProductDraft>::NextPage.is_mutation());
        assert!(!Intent::<ProductDraft>::BeginEdit(RecordId::from(1)).is_mutation());
    }
}
