//! Writes of the posts board against its two data sources.
//!
//! A `BoardWrite` is built from the board's `prepare_*` half, so building one
//! never touches local state. The caller sends it with `BoardSources::apply`;
//! only once the source accepted it does the caller `settle` the edit sessions
//! and reload both collections with `BoardSources::fetch`. A failed write
//! leaves the board exactly as it was.
//!
//! Constructors returning `None` mean there is nothing to write: the record is
//! already in the requested state.

use log::info;

use super::DataSource;
use crate::catalog::mutation::DeletePlan;
use crate::catalog::PostBoard;
use crate::error::CatalogError;
use crate::model::{Comment, CommentPatch, Post, PostDraft, PostPatch, RecordId};

/// A validated change, ready to be sent to its collection.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardWrite {
    CreatePost(Post),
    /// Edit form of the open post.
    SavePost(RecordId, PostPatch),
    /// Soft delete or restore of a post.
    FlagPost(RecordId, PostPatch),
    CreateComment(Comment),
    SaveComment(RecordId, CommentPatch),
    FlagComment(RecordId, CommentPatch),
}

impl BoardWrite {
    pub fn create_post(board: &PostBoard, draft: &PostDraft) -> Result<Self, CatalogError> {
        board.posts().prepare_create(draft).map(BoardWrite::CreatePost)
    }

    pub fn save_post(board: &PostBoard, draft: &PostDraft) -> Result<Self, CatalogError> {
        let (id, patch) = board.posts().prepare_save(draft)?;
        Ok(BoardWrite::SavePost(id, patch))
    }

    pub fn delete_post(board: &PostBoard, id: &RecordId) -> Result<Option<Self>, CatalogError> {
        match board.posts().prepare_delete(id)? {
            DeletePlan::Flag(_, _) if post_deleted(board, id) => Ok(None),
            DeletePlan::Flag(id, patch) => Ok(Some(BoardWrite::FlagPost(id, patch))),
            DeletePlan::Remove(id) => Err(CatalogError::Mutation(format!(
                "post #{} cannot be removed from the board",
                id
            ))),
        }
    }

    pub fn restore_post(board: &PostBoard, id: &RecordId) -> Result<Option<Self>, CatalogError> {
        let patch = board.posts().prepare_restore(id)?;
        Ok(post_deleted(board, id).then(|| BoardWrite::FlagPost(id.clone(), patch)))
    }

    pub fn add_comment(
        board: &PostBoard,
        post_id: &RecordId,
        text: &str,
    ) -> Result<Self, CatalogError> {
        board
            .prepare_comment(post_id, text)
            .map(BoardWrite::CreateComment)
    }

    pub fn save_comment(board: &PostBoard, text: &str) -> Result<Self, CatalogError> {
        let (id, patch) = board.prepare_comment_save(text)?;
        Ok(BoardWrite::SaveComment(id, patch))
    }

    /// Flags (`deleted = true`) or restores a comment.
    pub fn flag_comment(
        board: &PostBoard,
        id: &RecordId,
        deleted: bool,
    ) -> Result<Option<Self>, CatalogError> {
        let patch = board.prepare_comment_flag(id, deleted)?;
        let current = board.comments().get(id).map(|c| c.is_deleted);
        Ok((current != Some(deleted)).then(|| BoardWrite::FlagComment(id.clone(), patch)))
    }

    /// Local follow-up once the source accepted the write: a saved form closes,
    /// and so does a form whose target was just deleted.
    pub fn settle(&self, board: &mut PostBoard) {
        match self {
            BoardWrite::SavePost(_, _) => board.posts_mut().cancel_edit(),
            BoardWrite::FlagPost(id, patch) => {
                if patch.is_deleted == Some(true) && board.posts().edit_session().is_editing(id) {
                    board.posts_mut().cancel_edit();
                }
            }
            BoardWrite::SaveComment(_, _) => board.cancel_comment_edit(),
            BoardWrite::FlagComment(id, patch) => {
                if patch.is_deleted == Some(true) && board.comment_edit_session().is_editing(id) {
                    board.cancel_comment_edit();
                }
            }
            BoardWrite::CreatePost(_) | BoardWrite::CreateComment(_) => {}
        }
    }

    /// Success message shown to the user, for the writes that have one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            BoardWrite::SavePost(_, _) => Some("Post updated successfully!"),
            BoardWrite::SaveComment(_, _) => Some("Comment updated successfully!"),
            _ => None,
        }
    }
}

fn post_deleted(board: &PostBoard, id: &RecordId) -> bool {
    board.posts().get(id).is_some_and(|post| post.is_deleted)
}

/// Data sources of the posts board.
pub struct BoardSources<P, C> {
    pub posts: P,
    pub comments: C,
}

impl<P, C> BoardSources<P, C>
where
    P: DataSource<Post>,
    C: DataSource<Comment>,
{
    /// Fetches both collections. Either failing fails the whole load.
    pub async fn fetch(&self) -> Result<(Vec<Post>, Vec<Comment>), CatalogError> {
        let posts = self.posts.fetch_all().await?;
        let comments = self.comments.fetch_all().await?;
        Ok((posts, comments))
    }

    pub async fn apply(&self, write: &BoardWrite) -> Result<(), CatalogError> {
        match write {
            BoardWrite::CreatePost(post) => {
                self.posts.create(post).await?;
                info!("created post #{}", post.id);
            }
            BoardWrite::SavePost(id, patch) | BoardWrite::FlagPost(id, patch) => {
                self.posts.patch(id, patch).await?;
            }
            BoardWrite::CreateComment(comment) => {
                self.comments.create(comment).await?;
                info!("created comment #{} on post #{}", comment.id, comment.post_id);
            }
            BoardWrite::SaveComment(id, patch) | BoardWrite::FlagComment(id, patch) => {
                self.comments.patch(id, patch).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> PostBoard {
        let mut board = PostBoard::default();
        board.load(
            vec![
                Post {
                    id: RecordId::from("1"),
                    title: "Live".into(),
                    views: 0,
                    is_deleted: false,
                },
                Post {
                    id: RecordId::from("2"),
                    title: "Gone".into(),
                    views: 0,
                    is_deleted: true,
                },
            ],
            vec![Comment {
                id: RecordId::from("1"),
                post_id: RecordId::from("1"),
                text: "hi".into(),
                is_deleted: false,
            }],
        );
        board
    }

    #[test]
    fn writes_already_in_place_are_skipped() {
        let board = board();
        assert_eq!(BoardWrite::delete_post(&board, &RecordId::from("2")), Ok(None));
        assert_eq!(BoardWrite::restore_post(&board, &RecordId::from("1")), Ok(None));
        assert_eq!(
            BoardWrite::flag_comment(&board, &RecordId::from("1"), false),
            Ok(None)
        );
        assert!(matches!(
            BoardWrite::delete_post(&board, &RecordId::from("1")),
            Ok(Some(BoardWrite::FlagPost(_, _)))
        ));
    }

    #[test]
    fn settle_closes_only_the_affected_form() {
        let mut board = board();
        board.posts_mut().begin_edit(&RecordId::from("1")).unwrap();
        board.begin_comment_edit(&RecordId::from("1")).unwrap();

        let restore_other = BoardWrite::FlagPost(RecordId::from("1"), PostPatch {
            is_deleted: Some(false),
            ..PostPatch::default()
        });
        restore_other.settle(&mut board);
        assert!(board.posts().edit_session().is_editing(&RecordId::from("1")));

        let flag = BoardWrite::flag_comment(&board, &RecordId::from("1"), true)
            .unwrap()
            .unwrap();
        flag.settle(&mut board);
        assert!(board.comment_edit_session().target().is_none());
        assert!(board.posts().edit_session().is_editing(&RecordId::from("1")));

        let save = BoardWrite::save_post(&board, &PostDraft {
            title: "Renamed".into(),
            views: 1,
        })
        .unwrap();
        assert_eq!(save.notice(), Some("Post updated successfully!"));
        save.settle(&mut board);
        assert!(board.posts().edit_session().target().is_none());
    }
}
