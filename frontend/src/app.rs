use common::config::{CatalogConfig, Variant};
use yew::{html, Component, Context, Html};

use crate::components::catalog::CatalogComponent;
use crate::components::posts::PostsComponent;

/// Root component: mounts the catalog the build was configured for.
pub struct App {
    config: CatalogConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = crate::config::load();
        log::info!("starting {:?} catalog", config.variant);
        Self { config }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let config = self.config.clone();
        html! {
            <div class="container">
                {
                    match config.variant {
                        Variant::Products => html! { <CatalogComponent {config} /> },
                        Variant::Posts => html! { <PostsComponent {config} /> },
                    }
                }
            </div>
        }
    }
}
