//! Posts board: posts with per-post comments on a writable REST store.
//!
//! Deletes are soft (an `isDeleted` flag) and every write is followed by a
//! reload of both collections.

use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use common::catalog::{Catalog, PostBoard};

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PostsProps;
pub use state::PostsComponent;

use crate::collation::IntlCollation;
use crate::components::helpers::{listen_for_escape, stop_listening};
use state::{post_sources, PostForm};

impl Component for PostsComponent {
    type Message = Msg;
    type Properties = PostsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let posts = Catalog::new(config.delete_mode())
            .with_collation(IntlCollation::new())
            .with_page_size(config.page_size);
        PostsComponent {
            board: PostBoard::new(posts),
            sources: Rc::new(post_sources(&config.api_base_url)),
            loading: false,
            load_error: None,
            load_seq: 0,
            new_post: PostForm::new_post(),
            post_form: None,
            comment_form: None,
            comment_inputs: HashMap::new(),
            saving: false,
            key_listener: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.key_listener = listen_for_escape(ctx.link().callback(|_| Msg::Escape));
            ctx.link().send_message(Msg::Load);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(listener) = self.key_listener.take() {
            stop_listening(listener);
        }
    }
}
