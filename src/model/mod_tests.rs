//! Tests for the document model.

use super::*;
use crate::error::Error;

fn document_with(sections: &[&str]) -> Document {
    let mut doc = Document::default();
    for name in sections {
        doc.add_section(name).unwrap();
    }
    doc
}

mod sections {
    use super::*;

    #[test]
    fn names_keep_insertion_order() {
        let doc = document_with(&["zeta", "Alpha", "mid"]);
        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn original_spelling_is_kept() {
        let doc = document_with(&["  Server "]);
        assert_eq!(doc.section("server").unwrap().name(), "Server");
    }

    #[test]
    fn duplicate_under_normalization_is_rejected() {
        let mut doc = document_with(&["server"]);
        let result = doc.add_section("SERVER");
        assert!(matches!(
            result,
            Err(Error::DuplicateSection { section }) if section == "SERVER"
        ));
    }

    #[test]
    fn reserved_default_name_is_rejected() {
        let mut doc = Document::default();
        assert!(matches!(
            doc.add_section("default"),
            Err(Error::DuplicateSection { .. })
        ));
        assert_eq!(doc.section_names().count(), 0);
    }

    #[test]
    fn exact_policy_distinguishes_case() {
        let mut doc = Document::new(NamePolicy::Exact);
        doc.add_section("Server").unwrap();
        doc.add_section("server").unwrap();
        assert_eq!(doc.section_names().count(), 2);
        assert!(!doc.has_section("SERVER"));
    }

    #[test]
    fn remove_reports_existence() {
        let mut doc = document_with(&["a", "b", "c"]);
        assert!(doc.remove_section("B"));
        assert!(!doc.remove_section("b"));
        assert!(!doc.remove_section("DEFAULT"));
        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn repeated_headers_merge() {
        let mut doc = Document::default();
        doc.section_for_header("Server", 1);
        doc.set("server", "host", "a".to_owned());
        doc.section_for_header("SERVER", 10);
        doc.set("server", "port", "1".to_owned());

        let section = doc.section("server").unwrap();
        assert_eq!(section.line(), Some(1));
        assert_eq!(section.keys().collect::<Vec<_>>(), vec!["host", "port"]);
    }
}

mod options {
    use super::*;

    #[test]
    fn set_into_missing_section_fails() {
        let mut doc = Document::default();
        assert!(!doc.set("nope", "k", "v".to_owned()));
    }

    #[test]
    fn replacing_keeps_position_and_spelling() {
        let mut doc = document_with(&["s"]);
        doc.set("s", "First", "1".to_owned());
        doc.set("s", "second", "2".to_owned());
        doc.set("s", "FIRST", "one".to_owned());

        let section = doc.section("s").unwrap();
        let entries: Vec<_> = section.iter().map(|(k, e)| (k, e.name(), e.value())).collect();
        assert_eq!(
            entries,
            vec![("first", "First", "one"), ("second", "second", "2")]
        );
    }

    #[test]
    fn removing_shifts_the_rest() {
        let mut doc = document_with(&["s"]);
        for key in ["a", "b", "c"] {
            doc.set("s", key, key.to_owned());
        }
        let section = doc.section_mut("s").unwrap();
        assert!(section.remove("b").is_some());
        assert!(section.remove("b").is_none());
        assert_eq!(section.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn default_name_targets_defaults() {
        let mut doc = Document::default();
        assert!(doc.set("DEFAULT", "port", "8080".to_owned()));
        assert_eq!(doc.defaults().get("port"), Some("8080"));
        assert_eq!(doc.section_names().count(), 0);
    }
}

mod views {
    use super::*;

    fn sample() -> Document {
        let mut doc = document_with(&["server"]);
        doc.set("DEFAULT", "port", "8080".to_owned());
        doc.set("DEFAULT", "host", "fallback".to_owned());
        doc.set("server", "host", "localhost".to_owned());
        doc.set("server", "path", "/".to_owned());
        doc
    }

    #[test]
    fn local_value_shadows_default() {
        let doc = sample();
        let view = doc.view("Server").unwrap();
        assert_eq!(view.get("HOST"), Some("localhost"));
        assert_eq!(view.get("port"), Some("8080"));
        assert_eq!(view.get("missing"), None);
    }

    #[test]
    fn missing_section_has_no_view() {
        assert!(sample().view("client").is_none());
    }

    #[test]
    fn default_view_sees_only_defaults() {
        let doc = sample();
        let view = doc.view("default").unwrap();
        assert!(view.local().is_none());
        assert_eq!(view.name(), DEFAULT_SECTION);
        assert_eq!(view.get("host"), Some("fallback"));
        assert_eq!(view.get("path"), None);
    }

    #[test]
    fn merged_lists_local_then_unshadowed_defaults() {
        let doc = sample();
        let merged: Vec<_> = doc
            .view("server")
            .unwrap()
            .merged()
            .into_iter()
            .map(|(k, e)| (k, e.value()))
            .collect();

        assert_eq!(
            merged,
            vec![("host", "localhost"), ("path", "/"), ("port", "8080")]
        );
    }

    #[test]
    fn local_keys_exclude_defaults() {
        let doc = sample();
        assert_eq!(doc.view("server").unwrap().local_keys(), vec!["host", "path"]);
    }
}
