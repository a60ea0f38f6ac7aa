//! Mutation controller: create, edit, delete and restore.
//!
//! At most one record is open for editing at a time. Opening another one
//! silently replaces the previous target; saving or cancelling returns to
//! `Idle`.
//!
//! Each operation comes in two halves. `prepare_*` validates and computes what
//! would be written without touching the store; the plain method applies it
//! locally and refreshes. The posts board (see `source::board`) sends the
//! prepared record or patch to the data source and reloads instead.

use log::debug;

use super::{Catalog, DeleteMode, not_found};
use crate::error::CatalogError;
use crate::model::{Listable, Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(RecordId),
}

impl EditSession {
    pub fn target(&self) -> Option<&RecordId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.target() == Some(id)
    }
}

/// How a confirmed delete reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletePlan<P> {
    /// Drop the record; nothing is written to the data source.
    Remove(RecordId),
    /// Write the deletion flag.
    Flag(RecordId, P),
}

impl<R: Listable> Catalog<R> {
    /// Opens `id` in the edit form, replacing any record already open.
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<&R, CatalogError> {
        self.require(id)?;
        if let Some(previous) = self.edit.target() {
            debug!("edit of {} #{} replaced by #{}", R::COLLECTION, previous, id);
        }
        self.edit = EditSession::Editing(id.clone());
        self.refresh();
        self.require(id)
    }

    pub fn cancel_edit(&mut self) {
        if self.edit != EditSession::Idle {
            self.edit = EditSession::Idle;
            self.refresh();
        }
    }

    /// Validates `draft` and builds the record a create would append.
    pub fn prepare_create(&self, draft: &R::Draft) -> Result<R, CatalogError> {
        R::validate(draft)?;
        Ok(R::from_draft(self.store.next_id()?, draft))
    }

    pub fn create(&mut self, draft: &R::Draft) -> Result<RecordId, CatalogError> {
        let record = self.prepare_create(draft)?;
        let id = self.store.insert(record)?;
        self.refresh();
        Ok(id)
    }

    /// Validates `draft` against the open edit session and returns the patch.
    pub fn prepare_save(&self, draft: &R::Draft) -> Result<(RecordId, R::Patch), CatalogError> {
        let id = self.edit.target().ok_or(CatalogError::NoEditSession)?;
        R::validate(draft)?;
        self.require(id)?;
        Ok((id.clone(), R::patch_from_draft(draft)))
    }

    /// Applies the edit form to the open record and closes the session.
    pub fn save_edit(&mut self, draft: &R::Draft) -> Result<RecordId, CatalogError> {
        let (id, patch) = self.prepare_save(draft)?;
        self.store.update(&id, &patch);
        self.edit = EditSession::Idle;
        self.refresh();
        Ok(id)
    }

    pub fn prepare_delete(&self, id: &RecordId) -> Result<DeletePlan<R::Patch>, CatalogError> {
        self.require(id)?;
        Ok(match self.delete_mode {
            DeleteMode::Hard => DeletePlan::Remove(id.clone()),
            DeleteMode::Soft => DeletePlan::Flag(id.clone(), R::deletion_patch(true)),
        })
    }

    /// Deletes `id` once the user confirmed. Returns false when the user
    /// declined or when a soft-deleted record was already flagged.
    pub fn delete(&mut self, id: &RecordId, confirmed: bool) -> Result<bool, CatalogError> {
        if !confirmed {
            return Ok(false);
        }
        let changed = match self.prepare_delete(id)? {
            DeletePlan::Remove(id) => self.store.remove(&id).is_some(),
            DeletePlan::Flag(id, _) => self.store.set_deleted(&id, true).unwrap_or(false),
        };
        if self.edit.is_editing(id) {
            self.edit = EditSession::Idle;
        }
        self.refresh();
        Ok(changed)
    }

    pub fn prepare_restore(&self, id: &RecordId) -> Result<R::Patch, CatalogError> {
        if self.delete_mode != DeleteMode::Soft {
            return Err(CatalogError::SoftDeleteDisabled);
        }
        self.require(id)?;
        Ok(R::deletion_patch(false))
    }

    /// Clears the deletion flag. Restoring a live record changes nothing.
    pub fn restore(&mut self, id: &RecordId) -> Result<bool, CatalogError> {
        self.prepare_restore(id)?;
        let changed = self
            .store
            .set_deleted(id, false)
            .ok_or_else(|| not_found::<R>(id))?;
        self.refresh();
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Post, PostDraft};

    fn board(n: u64) -> Catalog<Post> {
        let mut catalog = Catalog::new(DeleteMode::Soft);
        catalog.load(
            (1..=n)
                .map(|id| Post {
                    id: Post::make_id(id),
                    title: format!("Post {}", id),
                    views: id * 10,
                    is_deleted: false,
                })
                .collect(),
        );
        catalog
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            views: 1,
        }
    }

    #[test]
    fn create_with_blank_title_changes_nothing() {
        let mut catalog = board(2);
        let revision = catalog.revision();
        let err = catalog.create(&draft("  ")).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { field: "title", .. }));
        assert_eq!(catalog.store().len(), 2);
        assert_eq!(catalog.revision(), revision);
    }

    #[test]
    fn create_appends_with_next_id() {
        let mut catalog = board(2);
        let id = catalog.create(&draft("Third")).unwrap();
        assert_eq!(id, RecordId::from("3"));
        assert_eq!(catalog.visible().last().map(|p| p.title.as_str()), Some("Third"));
    }

    #[test]
    fn create_fails_when_ids_are_exhausted() {
        let mut catalog = Catalog::new(DeleteMode::Soft);
        catalog.load(vec![Post {
            id: RecordId::Int(u64::MAX),
            title: "Last".into(),
            views: 0,
            is_deleted: false,
        }]);
        assert_eq!(
            catalog.create(&draft("Next")),
            Err(CatalogError::IdsExhausted { collection: "posts" })
        );
        assert_eq!(catalog.store().len(), 1);
    }

    #[test]
    fn save_requires_an_open_session() {
        let mut catalog = board(1);
        assert_eq!(
            catalog.save_edit(&draft("x")),
            Err(CatalogError::NoEditSession)
        );
    }

    #[test]
    fn opening_a_second_edit_replaces_the_first() {
        let mut catalog = board(3);
        catalog.begin_edit(&RecordId::from("1")).unwrap();
        catalog.begin_edit(&RecordId::from("2")).unwrap();
        catalog.save_edit(&draft("Renamed")).unwrap();

        assert_eq!(catalog.edit_session(), &EditSession::Idle);
        assert_eq!(catalog.get(&RecordId::from("1")).unwrap().title, "Post 1");
        assert_eq!(catalog.get(&RecordId::from("2")).unwrap().title, "Renamed");
    }

    #[test]
    fn invalid_save_keeps_the_session_open() {
        let mut catalog = board(1);
        catalog.begin_edit(&RecordId::from("1")).unwrap();
        assert!(catalog.save_edit(&draft("")).is_err());
        assert!(catalog.edit_session().is_editing(&RecordId::from("1")));
    }

    #[test]
    fn begin_edit_of_missing_record_is_not_found() {
        let mut catalog = board(1);
        assert!(matches!(
            catalog.begin_edit(&RecordId::from("9")),
            Err(CatalogError::NotFound { collection: "posts", .. })
        ));
        assert_eq!(catalog.edit_session(), &EditSession::Idle);
    }

    #[test]
    fn soft_delete_and_restore_are_idempotent() {
        let mut catalog = board(2);
        let id = RecordId::from("2");

        assert_eq!(catalog.delete(&id, false), Ok(false));
        assert!(!catalog.get(&id).unwrap().is_deleted);

        assert_eq!(catalog.delete(&id, true), Ok(true));
        assert_eq!(catalog.delete(&id, true), Ok(false));
        assert_eq!(catalog.filtered_count(), 2);

        assert_eq!(catalog.restore(&id), Ok(true));
        assert_eq!(catalog.restore(&id), Ok(false));
        assert!(!catalog.get(&id).unwrap().is_deleted);
    }

    #[test]
    fn deleting_the_edit_target_closes_the_session() {
        let mut catalog = board(2);
        let id = RecordId::from("1");
        catalog.begin_edit(&id).unwrap();
        catalog.delete(&id, true).unwrap();
        assert_eq!(catalog.edit_session(), &EditSession::Idle);
    }

    #[test]
    fn restore_needs_soft_delete_mode() {
        let mut catalog: Catalog<Post> = Catalog::new(DeleteMode::Hard);
        assert_eq!(
            catalog.restore(&RecordId::from("1")),
            Err(CatalogError::SoftDeleteDisabled)
        );
    }
}
