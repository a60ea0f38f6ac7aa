//! Product catalog: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Mutations on products are applied to the session only; the seed behind
//! `products_url` is read-only, so a reload brings deleted products back.

use std::rc::Rc;

use yew::prelude::*;

use common::catalog::Catalog;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CatalogProps;
pub use state::CatalogComponent;

use crate::collation::IntlCollation;
use crate::components::helpers::{listen_for_escape, stop_listening};
use crate::source::HttpSource;

impl Component for CatalogComponent {
    type Message = Msg;
    type Properties = CatalogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        CatalogComponent {
            catalog: Catalog::new(config.delete_mode())
                .with_collation(IntlCollation::new())
                .with_page_size(config.page_size),
            source: Rc::new(HttpSource::new(config.products_url.clone())),
            loading: false,
            load_error: None,
            detail: None,
            open_detail_on_click: config.open_detail_on_click,
            form: None,
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
