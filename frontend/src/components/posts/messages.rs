use common::catalog::Intent;
use common::model::{Comment, Post, PostDraft, RecordId};
use common::source::BoardWrite;
use common::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Views,
}

pub enum Msg {
    Load,
    Loaded {
        seq: u64,
        result: Result<(Vec<Post>, Vec<Comment>), CatalogError>,
    },
    /// Search, sort and paging. Writes go through the dedicated messages below.
    Intent(Intent<PostDraft>),
    Escape,

    NewPostField(PostField, String),
    AddPost,
    BeginEdit(RecordId),
    EditField(PostField, String),
    SaveEdit,
    CancelEdit,
    Delete(RecordId),
    Restore(RecordId),

    CommentInput(RecordId, String),
    AddComment(RecordId),
    BeginCommentEdit(RecordId),
    CommentEditText(String),
    SaveComment,
    CancelCommentEdit,
    DeleteComment(RecordId),
    RestoreComment(RecordId),

    /// Sends a validated write, then reloads.
    Submit(BoardWrite),
    Written {
        write: BoardWrite,
        result: Result<(), CatalogError>,
    },
}
