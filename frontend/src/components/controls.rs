//! List controls shared by the product and post views: search box, sort and
//! page-size selectors, pagination bar. Each takes a callback and knows nothing
//! about the component it lives in.

use yew::prelude::*;

use common::catalog::{PageSize, SortKey};

use super::helpers::{input_value, select_value};

pub fn search_box(term: &str, placeholder: &str, on_search: Callback<String>) -> Html {
    let oninput = on_search.reform(|e: InputEvent| input_value(&e));
    html! {
        <input
            class="search-input"
            type="search"
            placeholder={placeholder.to_string()}
            value={term.to_string()}
            {oninput}
        />
    }
}

/// `magnitude` names the numeric sort field ("Price", "Views").
pub fn sort_select(current: SortKey, magnitude: &str, on_sort: Callback<SortKey>) -> Html {
    let onchange = Callback::from(move |e: Event| match select_value(&e).parse::<SortKey>() {
        Ok(key) => on_sort.emit(key),
        Err(error) => log::warn!("{}", error),
    });
    html! {
        <select class="sort-select" {onchange}>
            { for SortKey::ALL.into_iter().map(|key| html! {
                <option value={key.as_str()} selected={key == current}>
                    { sort_label(key, magnitude) }
                </option>
            }) }
        </select>
    }
}

fn sort_label(key: SortKey, magnitude: &str) -> String {
    match key {
        SortKey::None => "Sort by".to_string(),
        SortKey::NameAsc => "Name (A-Z)".to_string(),
        SortKey::NameDesc => "Name (Z-A)".to_string(),
        SortKey::PriceAsc => format!("{}: Low to High", magnitude),
        SortKey::PriceDesc => format!("{}: High to Low", magnitude),
    }
}

pub fn page_size_select(current: PageSize, on_change: Callback<PageSize>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let parsed = select_value(&e)
            .parse::<usize>()
            .map_err(|e| e.to_string())
            .and_then(PageSize::try_from);
        match parsed {
            Ok(size) => on_change.emit(size),
            Err(error) => log::warn!("{}", error),
        }
    });
    html! {
        <select class="page-size-select" {onchange}>
            { for PageSize::ALL.into_iter().map(|size| html! {
                <option value={size.to_string()} selected={size == current}>
                    { format!("{} per page", size) }
                </option>
            }) }
        </select>
    }
}

pub struct PaginationCallbacks {
    pub previous: Callback<()>,
    pub next: Callback<()>,
    pub go_to: Callback<usize>,
}

/// Previous / numbered / next buttons. Hidden when everything fits one page.
pub fn pagination(page: usize, total_pages: usize, callbacks: PaginationCallbacks) -> Html {
    if total_pages <= 1 {
        return html! {};
    }
    let PaginationCallbacks { previous, next, go_to } = callbacks;

    html! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled={page <= 1}
                onclick={previous.reform(|_: MouseEvent| ())}
            >
                { "Previous" }
            </button>
            { for (1..=total_pages).map(|n| {
                let go_to = go_to.clone();
                html! {
                    <button
                        class={classes!("page-btn", (n == page).then_some("active"))}
                        onclick={Callback::from(move |_: MouseEvent| go_to.emit(n))}
                    >
                        { n }
                    </button>
                }
            }) }
            <button
                class="page-btn"
                disabled={page >= total_pages}
                onclick={next.reform(|_: MouseEvent| ())}
            >
                { "Next" }
            </button>
        </div>
    }
}
