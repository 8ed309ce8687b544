// ═══════════════════════════════════════════════════════════════════
// Translation Lookup Tests — per-language tables and fallback chain
// ═══════════════════════════════════════════════════════════════════

use cost_in_hours_core::i18n::translate;
use cost_in_hours_core::models::language::Language;
use cost_in_hours_core::models::time_unit::TimeUnit;

#[test]
fn english_lookup() {
    assert_eq!(translate(Language::En, "calculate"), "Calculate");
    assert_eq!(translate(Language::En, "history"), "History");
    assert_eq!(translate(Language::En, "unnamedProduct"), "Unnamed product");
}

#[test]
fn turkish_lookup() {
    assert_eq!(translate(Language::Tr, "calculate"), "Hesapla");
    assert_eq!(translate(Language::Tr, "history"), "Geçmiş");
    assert_eq!(translate(Language::Tr, "unnamedProduct"), "İsimsiz ürün");
}

#[test]
fn missing_key_returns_the_key_itself() {
    // Missing in both tables: the raw key becomes the visible fallback.
    assert_eq!(translate(Language::En, "noSuchKey"), "noSuchKey");
    assert_eq!(translate(Language::Tr, "noSuchKey"), "noSuchKey");
}

#[test]
fn lookup_never_fails_on_odd_input() {
    assert_eq!(translate(Language::Tr, ""), "");
    assert_eq!(translate(Language::En, "  spaced key  "), "  spaced key  ");
}

#[test]
fn unit_label_keys_resolve_in_both_languages() {
    for unit in TimeUnit::ALL {
        for lang in Language::ALL {
            assert!(!translate(lang, unit.singular_key()).is_empty());
            assert!(!translate(lang, unit.plural_key()).is_empty());
        }
    }
}

#[test]
fn turkish_units_have_no_plural_suffix() {
    // Turkish uses the same word for one or many.
    assert_eq!(translate(Language::Tr, "hour"), "saat");
    assert_eq!(translate(Language::Tr, "hours"), "saat");
    assert_eq!(translate(Language::En, "hour"), "hour");
    assert_eq!(translate(Language::En, "hours"), "hours");
}
