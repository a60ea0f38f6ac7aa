//! Utility functions shared by the catalog components.
//!
//! - **User feedback**: blocking `alert`/`confirm` dialogs for validation and
//!   write errors, and self-dismissing toasts for success notices.
//! - **Form parsing**: turning raw input strings into typed draft fields.
//! - **Formatting**: prices and counts with thousands separators.
//! - **Loading**: whether a load in flight replaces the content or sits above it.
//! - **Event plumbing**: reading the value out of input/select events, and the
//!   document-level Escape handler that closes sheets.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent,
};
use yew::prelude::*;

use common::CatalogError;

/// Shows a blocking message.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Asks the user to confirm an action. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reports a failed operation the way its error kind asks for.
///
/// Blocking errors (validation, failed writes) get an `alert`; the rest are
/// only logged, since the target has simply disappeared under the user.
pub fn report(error: &CatalogError) {
    match error {
        CatalogError::Validation { .. } => alert(&error.to_string()),
        _ if error.is_blocking() => alert(&format!("Error: {}", error)),
        _ => log::warn!("{}", error),
    }
}

/// Displays a temporary notification at the bottom of the screen that removes
/// itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let toast: HtmlElement = toast.unchecked_into();
    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Registers a document-level `keydown` handler that emits `on_escape` when
/// Escape is pressed. The returned closure must be kept alive for as long as
/// the handler should fire, then passed to `stop_listening`.
pub fn listen_for_escape(on_escape: Callback<()>) -> Option<Closure<dyn Fn(KeyboardEvent)>> {
    let document = web_sys::window()?.document()?;
    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            on_escape.emit(());
        }
    });
    match document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
        Ok(()) => Some(listener),
        Err(error) => {
            log::warn!("could not listen for Escape: {:?}", error);
            None
        }
    }
}

pub fn stop_listening(listener: Closure<dyn Fn(KeyboardEvent)>) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document
            .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .ok();
    }
}

/// How a load in flight shows in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadIndicator {
    Hidden,
    /// Nothing loaded yet: the message replaces the content area.
    FullArea,
    /// Records already on screen stay, with a small banner above them.
    Inline,
}

pub fn load_indicator(loading: bool, store_empty: bool) -> LoadIndicator {
    match (loading, store_empty) {
        (false, _) => LoadIndicator::Hidden,
        (true, true) => LoadIndicator::FullArea,
        (true, false) => LoadIndicator::Inline,
    }
}

/// The inline banner, present only while `indicator` asks for it.
pub fn refreshing_banner(indicator: LoadIndicator) -> Option<Html> {
    (indicator == LoadIndicator::Inline)
        .then(|| html! { <div class="loading-inline">{ "Refreshing..." }</div> })
}

/// Parses a price field. Blank or malformed input becomes 0, which the
/// product validation then rejects.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

/// Parses a view counter. Anything that is not a non-negative integer is 0.
pub fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// `1234.5` -> `"$1,234.50"`.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let sign = if price < 0.0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

pub fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_parse_leniently() {
        assert_eq!(parse_price(" 12.5 "), 12.5);
        assert_eq!(parse_price("$1,000"), 1000.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("many"), 0);
    }

    #[test]
    fn reloads_keep_records_under_an_inline_indicator() {
        assert_eq!(load_indicator(true, true), LoadIndicator::FullArea);
        assert_eq!(load_indicator(true, false), LoadIndicator::Inline);
        assert_eq!(load_indicator(false, false), LoadIndicator::Hidden);
        assert_eq!(load_indicator(false, true), LoadIndicator::Hidden);
        assert!(refreshing_banner(LoadIndicator::Inline).is_some());
        assert!(refreshing_banner(LoadIndicator::FullArea).is_none());
    }

    #[test]
    fn prices_format_with_separators() {
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-2.25), "-$2.25");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
