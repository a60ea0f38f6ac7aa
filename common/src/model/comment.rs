use serde::{Deserialize, Serialize};

use super::record::{Record, RecordId, require_text};
use crate::error::CatalogError;

/// A comment attached to a post through `postId`. Comments are never removed,
/// only flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: RecordId,
    pub post_id: RecordId,
    pub text: String,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub post_id: RecordId,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

impl Record for Comment {
    type Draft = CommentDraft;
    type Patch = CommentPatch;

    const COLLECTION: &'static str = "comments";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn make_id(seq: u64) -> RecordId {
        RecordId::Text(seq.to_string())
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }

    fn validate(draft: &CommentDraft) -> Result<(), CatalogError> {
        require_text("text", &draft.text, "Please enter a comment")
    }

    fn from_draft(id: RecordId, draft: &CommentDraft) -> Self {
        Comment {
            id,
            post_id: draft.post_id.clone(),
            text: draft.text.trim().to_string(),
            is_deleted: false,
        }
    }

    // The parent link is fixed at creation; edits only touch the text.
    fn patch_from_draft(draft: &CommentDraft) -> CommentPatch {
        CommentPatch {
            text: Some(draft.text.trim().to_string()),
            is_deleted: None,
        }
    }

    fn deletion_patch(deleted: bool) -> CommentPatch {
        CommentPatch {
            text: None,
            is_deleted: Some(deleted),
        }
    }

    fn apply(&mut self, patch: &CommentPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(deleted) = patch.is_deleted {
            self.is_deleted = deleted;
        }
    }
}
