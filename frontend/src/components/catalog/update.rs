use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::catalog::Intent;
use common::source::DataSource;

use super::messages::Msg;
use super::state::{CatalogComponent, FormMode, ProductForm};
use crate::components::helpers::{confirm, report, show_toast};

pub fn update(component: &mut CatalogComponent, ctx: &Context<CatalogComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let source = component.source.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = source.fetch_all().await;
                link.send_message(Msg::Loaded(result));
            });
            true
        }

        Msg::Loaded(Ok(products)) => {
            log::info!("loaded {} products", products.len());
            component.loading = false;
            component.load_error = None;
            component.catalog.load(products);
            true
        }

        Msg::Loaded(Err(error)) => {
            log::error!("failed to load products: {}", error);
            component.loading = false;
            component.load_error = Some(error.to_string());
            true
        }

        Msg::Intent(intent) => match component.catalog.dispatch(intent) {
            Ok(()) => true,
            Err(error) => {
                report(&error);
                false
            }
        },

        Msg::ShowDetail(id) => {
            if component.catalog.get(&id).is_none() {
                log::error!("product not found: {}", id);
                return false;
            }
            component.detail = Some(id);
            true
        }

        Msg::CloseDetail => {
            component.detail = None;
            true
        }

        Msg::Escape => {
            if component.form.take().is_some() {
                component.catalog.cancel_edit();
                true
            } else {
                component.detail.take().is_some()
            }
        }

        Msg::OpenCreate => {
            component.catalog.cancel_edit();
            component.form = Some(ProductForm::create());
            true
        }

        Msg::OpenEdit(id) => match component.catalog.begin_edit(&id) {
            Ok(product) => {
                let form = ProductForm::edit(product);
                component.form = Some(form);
                component.detail = None;
                true
            }
            Err(error) => {
                report(&error);
                false
            }
        },

        Msg::EditField(field, value) => match component.form.as_mut() {
            Some(form) => {
                form.set(field, value);
                true
            }
            None => false,
        },

        Msg::SubmitForm => {
            let Some(form) = component.form.as_ref() else {
                return false;
            };
            let draft = form.draft();
            let (intent, notice) = match form.mode {
                FormMode::Create => (Intent::Create(draft), "Product added"),
                FormMode::Edit(_) => (Intent::SaveEdit(draft), "Product updated"),
            };
            match component.catalog.dispatch(intent) {
                Ok(()) => {
                    component.form = None;
                    show_toast(notice);
                    true
                }
                Err(error) => {
                    report(&error);
                    false
                }
            }
        }

        Msg::CloseForm => {
            component.form = None;
            component.catalog.cancel_edit();
            true
        }

        Msg::RequestDelete(id) => {
            let confirmed = confirm("Are you sure you want to delete this product?");
            if !confirmed {
                return false;
            }
            match component.catalog.dispatch(Intent::Delete { id: id.clone(), confirmed }) {
                Ok(()) => {
                    if component.detail.as_ref() == Some(&id) {
                        component.detail = None;
                    }
                    if component.form.as_ref().is_some_and(|form| form.is_editing(&id)) {
                        component.form = None;
                    }
                    true
                }
                Err(error) => {
                    report(&error);
                    false
                }
            }
        }
    }
}
