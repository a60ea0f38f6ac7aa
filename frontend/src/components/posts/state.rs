use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

use common::catalog::PostBoard;
use common::model::{Comment, Post, PostDraft, RecordId};
use common::source::BoardSources;

use crate::components::helpers::parse_count;
use crate::source::HttpSource;

pub struct PostsComponent {
    pub board: PostBoard,

    pub sources: Rc<PostSources>,

    pub loading: bool,
    pub load_error: Option<String>,

    /// Sequence number of the latest load. Responses carrying an older number
    /// are dropped, so the last load started is the one that lands.
    pub load_seq: u64,

    /// "New post" inputs above the list.
    pub new_post: PostForm,

    /// Open post edit sheet. The board's edit session names the target.
    pub post_form: Option<PostForm>,

    /// Open comment edit sheet text.
    pub comment_form: Option<String>,

    /// Per-post "add a comment" inputs.
    pub comment_inputs: HashMap<RecordId, String>,

    /// A write is in flight; buttons that would start another one are disabled.
    pub saving: bool,

    pub key_listener: Option<Closure<dyn Fn(KeyboardEvent)>>,
    pub loaded: bool,
}

/// Remote collections behind the board.
pub type PostSources = BoardSources<HttpSource<Post>, HttpSource<Comment>>;

pub fn post_sources(api_base_url: &str) -> PostSources {
    BoardSources {
        posts: HttpSource::for_collection(api_base_url),
        comments: HttpSource::for_collection(api_base_url),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub views: String,
}

impl PostForm {
    pub fn new_post() -> Self {
        Self {
            title: String::new(),
            views: "0".to_string(),
        }
    }

    pub fn edit(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            views: post.views.to_string(),
        }
    }

    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_string(),
            views: parse_count(&self.views),
        }
    }
}
