//! Posts together with their comments.
//!
//! Posts form a soft-delete `Catalog`; comments are a second record store
//! linked to posts through `postId`. Comments are never removed (posts are
//! never hard-deleted in this variant, so there are no orphans to clean up).

use log::debug;

use super::mutation::EditSession;
use super::store::RecordStore;
use super::{Catalog, DeleteMode, not_found};
use crate::error::CatalogError;
use crate::model::{Comment, CommentDraft, CommentPatch, Post, Record, RecordId};

pub struct PostBoard {
    posts: Catalog<Post>,
    comments: RecordStore<Comment>,
    comment_edit: EditSession,
}

impl Default for PostBoard {
    fn default() -> Self {
        Self::new(Catalog::new(DeleteMode::Soft))
    }
}

impl PostBoard {
    pub fn new(posts: Catalog<Post>) -> Self {
        Self {
            posts,
            comments: RecordStore::new(),
            comment_edit: EditSession::Idle,
        }
    }

    pub fn posts(&self) -> &Catalog<Post> {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut Catalog<Post> {
        &mut self.posts
    }

    pub fn comments(&self) -> &RecordStore<Comment> {
        &self.comments
    }

    pub fn comment_edit_session(&self) -> &EditSession {
        &self.comment_edit
    }

    /// Replaces both collections, as one load.
    pub fn load(&mut self, posts: Vec<Post>, comments: Vec<Comment>) {
        self.comments.load(comments);
        self.posts.load(posts);
    }

    /// Comments of `post_id`, deleted ones included, in store order.
    pub fn comments_for(&self, post_id: &RecordId) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| &c.post_id == post_id)
            .collect()
    }

    /// The "N comments" figure: comments of `post_id` not flagged as deleted.
    pub fn active_comment_count(&self, post_id: &RecordId) -> usize {
        self.comments
            .iter()
            .filter(|c| &c.post_id == post_id && !c.is_deleted)
            .count()
    }

    /// Validates a new comment and builds it under the next comment id.
    pub fn prepare_comment(&self, post_id: &RecordId, text: &str) -> Result<Comment, CatalogError> {
        let draft = CommentDraft {
            post_id: post_id.clone(),
            text: text.to_string(),
        };
        Comment::validate(&draft)?;
        self.posts.require(post_id)?;
        Ok(Comment::from_draft(self.comments.next_id()?, &draft))
    }

    pub fn add_comment(&mut self, post_id: &RecordId, text: &str) -> Result<RecordId, CatalogError> {
        let comment = self.prepare_comment(post_id, text)?;
        let id = self.comments.insert(comment)?;
        self.posts.refresh();
        Ok(id)
    }

    pub fn begin_comment_edit(&mut self, id: &RecordId) -> Result<&Comment, CatalogError> {
        if !self.comments.contains(id) {
            return Err(not_found::<Comment>(id));
        }
        if let Some(previous) = self.comment_edit.target() {
            debug!("edit of comment #{} replaced by #{}", previous, id);
        }
        self.comment_edit = EditSession::Editing(id.clone());
        self.posts.refresh();
        self.comments.get(id).ok_or_else(|| not_found::<Comment>(id))
    }

    pub fn cancel_comment_edit(&mut self) {
        if self.comment_edit != EditSession::Idle {
            self.comment_edit = EditSession::Idle;
            self.posts.refresh();
        }
    }

    pub fn prepare_comment_save(&self, text: &str) -> Result<(RecordId, CommentPatch), CatalogError> {
        let id = self
            .comment_edit
            .target()
            .ok_or(CatalogError::NoEditSession)?;
        let comment = self.comments.get(id).ok_or_else(|| not_found::<Comment>(id))?;
        let draft = CommentDraft {
            post_id: comment.post_id.clone(),
            text: text.to_string(),
        };
        Comment::validate(&draft)?;
        Ok((id.clone(), Comment::patch_from_draft(&draft)))
    }

    pub fn save_comment_edit(&mut self, text: &str) -> Result<RecordId, CatalogError> {
        let (id, patch) = self.prepare_comment_save(text)?;
        self.comments.update(&id, &patch);
        self.comment_edit = EditSession::Idle;
        self.posts.refresh();
        Ok(id)
    }

    /// Patch flipping a comment's deletion flag, once its existence is checked.
    pub fn prepare_comment_flag(
        &self,
        id: &RecordId,
        deleted: bool,
    ) -> Result<CommentPatch, CatalogError> {
        if !self.comments.contains(id) {
            return Err(not_found::<Comment>(id));
        }
        Ok(Comment::deletion_patch(deleted))
    }

    pub fn delete_comment(&mut self, id: &RecordId, confirmed: bool) -> Result<bool, CatalogError> {
        if !confirmed {
            return Ok(false);
        }
        self.set_comment_deleted(id, true)
    }

    pub fn restore_comment(&mut self, id: &RecordId) -> Result<bool, CatalogError> {
        self.set_comment_deleted(id, false)
    }

    fn set_comment_deleted(&mut self, id: &RecordId, deleted: bool) -> Result<bool, CatalogError> {
        self.prepare_comment_flag(id, deleted)?;
        let changed = self
            .comments
            .set_deleted(id, deleted)
            .ok_or_else(|| not_found::<Comment>(id))?;
        if deleted && self.comment_edit.is_editing(id) {
            self.comment_edit = EditSession::Idle;
        }
        self.posts.refresh();
        Ok(changed)
    }
}
