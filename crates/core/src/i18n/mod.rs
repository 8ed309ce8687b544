//! Translation lookup for the two supported languages.
//!
//! Tables are static, built once, and never mutated at runtime; which table is
//! "current" is governed by the persisted language preference. Lookup never
//! fails: a key missing from the active table falls back to English, and a key
//! missing from both is returned verbatim so the miss is visible on screen.

mod en;
mod tr;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::language::Language;

pub(crate) type Table = HashMap<&'static str, &'static str>;

fn table_for(lang: Language) -> &'static Table {
    static EN: OnceLock<Table> = OnceLock::new();
    static TR: OnceLock<Table> = OnceLock::new();
    match lang {
        Language::En => EN.get_or_init(en::table),
        Language::Tr => TR.get_or_init(tr::table),
    }
}

/// Look up `key` in the table for `lang`, falling back to the
/// [`Language::FALLBACK`] table, then to the key itself.
#[must_use]
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    if let Some(&value) = table_for(lang).get(key) {
        return value;
    }
    if let Some(&value) = table_for(Language::FALLBACK).get(key) {
        return value;
    }
    key
}
