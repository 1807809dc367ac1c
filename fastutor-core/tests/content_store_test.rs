//! Built-in content completeness

use fastutor_core::{ContentStore, FasError, Language, StandardId};

#[test]
fn every_standard_has_content_in_both_languages() {
    let store = ContentStore::builtin();

    for id in StandardId::ALL {
        let standard = store.get_standard(id.as_str()).unwrap();
        let example = store.get_example(id.as_str()).unwrap();
        assert_eq!(standard.id, id);
        assert_eq!(example.id, id);

        for language in Language::ALL {
            assert!(!standard.title.get(language).trim().is_empty(), "{id} title");
            assert!(!standard.description.get(language).trim().is_empty(), "{id} description");
            assert!(!example.title.get(language).trim().is_empty(), "{id} example title");
            assert!(!example.scenario.get(language).trim().is_empty(), "{id} scenario");
        }
    }
}

#[test]
fn standards_iterate_in_canonical_order() {
    let ids: Vec<&str> = ContentStore::builtin()
        .standards()
        .map(|standard| standard.id.as_str())
        .collect();
    assert_eq!(ids, ["FAS 4", "FAS 7", "FAS 10", "FAS 28", "FAS 32"]);
}

#[test]
fn unknown_identifier_is_not_found() {
    let store = ContentStore::builtin();
    for id in ["FAS 99", "", "IFRS 16", "fas"] {
        assert!(matches!(store.get_standard(id), Err(FasError::NotFound(_))), "{id:?}");
        assert!(matches!(store.get_example(id), Err(FasError::NotFound(_))), "{id:?}");
    }
}

#[test]
fn glossary_has_five_defined_terms_per_language() {
    let store = ContentStore::builtin();

    for language in Language::ALL {
        let glossary = store.get_glossary(language);
        assert_eq!(glossary.len(), 5);
        assert!(glossary.values().all(|definition| !definition.trim().is_empty()));

        let terms: Vec<&str> = glossary.keys().copied().collect();
        assert_eq!(terms, ["Ijarah", "Murabaha", "Wakala", "Istisna'a", "Sukuk"]);
    }
}

#[test]
fn arabic_glossary_differs_from_english() {
    let store = ContentStore::builtin();
    let english = store.get_glossary(Language::English);
    let arabic = store.get_glossary(Language::Arabic);
    assert_ne!(english["Sukuk"], arabic["Sukuk"]);
}
