use crate::app::App;

mod app;
mod collation;
mod components;
mod config;
mod logger;
mod source;

fn main() {
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
