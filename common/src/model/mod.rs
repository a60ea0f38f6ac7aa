//! Record models shared by every crate in the workspace.
//!
//! - `record`: the `RecordId` type and the `Record` / `Listable` traits the
//!   catalog core is generic over.
//! - `product`: catalog entries of the products variant (hard delete).
//! - `post` / `comment`: entries of the posts variant (soft delete) and their
//!   child comments, linked by `postId`.

pub mod comment;
pub mod post;
pub mod product;
pub mod record;

pub use comment::{Comment, CommentDraft, CommentPatch};
pub use post::{Post, PostDraft, PostPatch};
pub use product::{Product, ProductDraft, ProductPatch};
pub use record::{Listable, Record, RecordId};
