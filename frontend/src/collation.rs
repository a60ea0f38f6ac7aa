//! Locale-aware name ordering backed by the browser's `Intl.Collator`.

use std::cmp::Ordering;

use common::catalog::Collation;
use js_sys::{Array, Function, Intl, Object};
use wasm_bindgen::JsValue;

pub struct IntlCollation {
    compare: Function,
}

impl IntlCollation {
    /// Collator for the user's default locale.
    pub fn new() -> Self {
        let collator = Intl::Collator::new(&Array::new(), &Object::new());
        Self {
            compare: collator.compare(),
        }
    }
}

impl Collation for IntlCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let result = self
            .compare
            .call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()
            .and_then(|value| value.as_f64());
        match result {
            Some(n) if n < 0.0 => Ordering::Less,
            Some(n) if n > 0.0 => Ordering::Greater,
            Some(_) => Ordering::Equal,
            // Collator unavailable; fall back to plain lower-case ordering.
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}
