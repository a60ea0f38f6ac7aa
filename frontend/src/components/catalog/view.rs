//! View rendering for the product catalog.
//!
//! Layout, top to bottom: a control bar (search, sort, page size, add button),
//! the content area (loading, load error, empty state or the card grid) and
//! the pagination bar. The detail and edit sheets render over everything when
//! open.

use yew::html::Scope;
use yew::prelude::*;

use common::catalog::Intent;
use common::model::Product;
use common::CatalogView;

use super::messages::{Msg, ProductField};
use super::state::{CatalogComponent, FormMode, ProductForm};
use crate::components::controls::{
    page_size_select, pagination, search_box, sort_select, PaginationCallbacks,
};
use crate::components::helpers::{
    format_price, input_value, load_indicator, refreshing_banner, textarea_value, LoadIndicator,
};
use crate::components::sheet::Sheet;

pub fn view(component: &CatalogComponent, ctx: &Context<CatalogComponent>) -> Html {
    let link = ctx.link();
    let snapshot = component.catalog.snapshot();

    html! {
        <div class="catalog-root">
            { build_controls(&snapshot, link) }
            { build_content(component, &snapshot, link) }
            { pagination(snapshot.page, snapshot.total_pages, pagination_callbacks(link)) }
            { build_detail_sheet(component, link) }
            { build_form_sheet(component.form.as_ref(), link) }
        </div>
    }
}

fn build_controls(snapshot: &CatalogView<'_, Product>, link: &Scope<CatalogComponent>) -> Html {
    html! {
        <div class="controls">
            { search_box(
                snapshot.filter_term,
                "Search products...",
                link.callback(|term| Msg::Intent(Intent::Search(term))),
            ) }
            { sort_select(
                snapshot.sort_key,
                "Price",
                link.callback(|key| Msg::Intent(Intent::Sort(key))),
            ) }
            { page_size_select(
                snapshot.page_size,
                link.callback(|size| Msg::Intent(Intent::SetPageSize(size))),
            ) }
            <button class="add-btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                { "Add Product" }
            </button>
        </div>
    }
}

fn build_content(
    component: &CatalogComponent,
    snapshot: &CatalogView<'_, Product>,
    link: &Scope<CatalogComponent>,
) -> Html {
    let indicator = load_indicator(component.loading, snapshot.is_store_empty());
    if indicator == LoadIndicator::FullArea {
        return html! { <div class="loading">{ "Loading products..." }</div> };
    }
    let reloading = refreshing_banner(indicator);
    if let Some(error) = &component.load_error {
        return html! {
            <div class="error">
                { reloading }
                <p>{ format!("Could not load products: {}", error) }</p>
                <button onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
            </div>
        };
    }
    if snapshot.is_store_empty() {
        return html! { <div class="empty">{ "No products available." }</div> };
    }
    if snapshot.is_filtered_out() {
        return html! {
            <>
                { reloading }
                <div class="empty">{ "No products match your search." }</div>
            </>
        };
    }

    let open_on_click = component.open_detail_on_click;
    html! {
        <>
            { reloading }
            <div class="products-grid">
                { for snapshot.items.iter().map(|product| build_card(product, open_on_click, link)) }
            </div>
        </>
    }
}

/// Card buttons stop the click from reaching the card, so a button never also
/// opens the detail sheet.
fn build_card(product: &Product, open_on_click: bool, link: &Scope<CatalogComponent>) -> Html {
    let id = product.id.clone();
    let on_card = link.batch_callback(move |_: MouseEvent| {
        open_on_click.then(|| Msg::ShowDetail(id.clone()))
    });
    let id = product.id.clone();
    let on_details = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::ShowDetail(id.clone())
    });
    let id = product.id.clone();
    let on_edit = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::OpenEdit(id.clone())
    });
    let id = product.id.clone();
    let on_delete = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::RequestDelete(id.clone())
    });

    html! {
        <div class="product-card" key={product.id.to_string()} onclick={on_card}>
            { product_image(product) }
            <div class="product-info">
                <h3>{ product.name.clone() }</h3>
                <p class="description">{ product.description.clone() }</p>
                <p class="price">{ format_price(product.price) }</p>
                <div class="card-actions">
                    <button class="details-btn" onclick={on_details}>{ "View Details" }</button>
                    <button class="edit-btn" onclick={on_edit}>{ "Edit" }</button>
                    <button class="delete-btn" onclick={on_delete}>{ "Delete" }</button>
                </div>
            </div>
        </div>
    }
}

fn product_image(product: &Product) -> Html {
    if product.image.is_empty() {
        html! { <div class="product-image placeholder"></div> }
    } else {
        html! { <img class="product-image" src={product.image.clone()} alt={product.name.clone()} /> }
    }
}

fn pagination_callbacks(link: &Scope<CatalogComponent>) -> PaginationCallbacks {
    PaginationCallbacks {
        previous: link.callback(|_| Msg::Intent(Intent::PreviousPage)),
        next: link.callback(|_| Msg::Intent(Intent::NextPage)),
        go_to: link.callback(|page| Msg::Intent(Intent::GoToPage(page))),
    }
}

fn build_detail_sheet(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let Some(product) = component
        .detail
        .as_ref()
        .and_then(|id| component.catalog.get(id))
    else {
        return html! {};
    };

    html! {
        <Sheet open={true} title={product.name.clone()} on_close={link.callback(|_| Msg::CloseDetail)}>
            <div class="product-detail">
                { product_image(product) }
                <p>{ product.description.clone() }</p>
                <p class="price">{ format_price(product.price) }</p>
                <p class="product-id">{ format!("Product ID: #{}", product.id) }</p>
            </div>
        </Sheet>
    }
}

fn build_form_sheet(form: Option<&ProductForm>, link: &Scope<CatalogComponent>) -> Html {
    let Some(form) = form else {
        return html! {};
    };
    let (title, submit) = match form.mode {
        FormMode::Create => ("Add Product", "Add"),
        FormMode::Edit(_) => ("Edit Product", "Save"),
    };
    let field = |field: ProductField| {
        link.callback(move |e: InputEvent| Msg::EditField(field, input_value(&e)))
    };
    let on_description =
        link.callback(|e: InputEvent| Msg::EditField(ProductField::Description, textarea_value(&e)));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitForm
    });

    html! {
        <Sheet open={true} title={title} on_close={link.callback(|_| Msg::CloseForm)}>
            <form class="product-form" {onsubmit}>
                <label>{ "Name" }
                    <input type="text" value={form.name.clone()} oninput={field(ProductField::Name)} />
                </label>
                <label>{ "Description" }
                    <textarea value={form.description.clone()} oninput={on_description} />
                </label>
                <label>{ "Price" }
                    <input type="text" inputmode="decimal" value={form.price.clone()} oninput={field(ProductField::Price)} />
                </label>
                <label>{ "Image URL" }
                    <input type="text" value={form.image.clone()} oninput={field(ProductField::Image)} />
                </label>
                <div class="form-actions">
                    <button type="submit">{ submit }</button>
                    <button type="button" onclick={link.callback(|_| Msg::CloseForm)}>{ "Cancel" }</button>
                </div>
            </form>
        </Sheet>
    }
}
