//! Tests for adding, setting, and removing sections and options.

use super::*;

mod sections {
    use super::*;

    #[test]
    fn add_section_rejects_duplicates() {
        let mut parser = ConfigParser::default();
        parser.add_section("Server").unwrap();

        assert!(matches!(
            parser.add_section("server"),
            Err(Error::DuplicateSection { section }) if section == "server"
        ));
    }

    #[test]
    fn add_section_rejects_reserved_name() {
        let mut parser = ConfigParser::default();
        assert!(matches!(
            parser.add_section("DEFAULT"),
            Err(Error::DuplicateSection { .. })
        ));
        assert!(matches!(
            parser.add_section("default"),
            Err(Error::DuplicateSection { .. })
        ));
    }

    #[test]
    fn remove_section_reports_presence() {
        let mut parser = parse("[a]\nx = 1\n[b]\n");

        assert!(parser.remove_section("A"));
        assert!(!parser.remove_section("a"));
        assert!(!parser.remove_section("DEFAULT"));
        assert_eq!(parser.sections(), ["b"]);
    }
}

mod options {
    use super::*;

    #[test]
    fn set_requires_existing_section() {
        let mut parser = ConfigParser::default();
        assert!(matches!(
            parser.set("nowhere", "k", "v"),
            Err(Error::NoSection { .. })
        ));
    }

    #[test]
    fn set_on_default_reaches_every_section() {
        let mut parser = parse("[a]\n[b]\n");
        parser.set("DEFAULT", "shared", "yes").unwrap();

        assert_eq!(parser.get("a", "shared").unwrap(), "yes");
        assert_eq!(parser.get("b", "shared").unwrap(), "yes");
    }

    #[test]
    fn set_replaces_in_place() {
        let mut parser = parse("[s]\na = 1\nb = 2\n");
        parser.set("s", "A", "10").unwrap();

        assert_eq!(parser.options("s").unwrap(), ["a", "b"]);
        assert_eq!(parser.get("s", "a").unwrap(), "10");
    }

    #[test]
    fn remove_option_reports_presence() {
        let mut parser = parse("[DEFAULT]\nd = 1\n[s]\na = 1\n");

        assert!(parser.remove_option("s", "A").unwrap());
        assert!(!parser.remove_option("s", "a").unwrap());
        assert!(parser.remove_option("DEFAULT", "d").unwrap());
        assert!(!parser.has_option("s", "d"));
    }

    #[test]
    fn remove_option_requires_existing_section() {
        let mut parser = ConfigParser::default();
        assert!(matches!(
            parser.remove_option("nowhere", "k"),
            Err(Error::NoSection { .. })
        ));
    }
}

mod set_display {
    use super::*;

    fn strict() -> ConfigParser {
        let mut parser = ConfigParser::new(ParserOptions::new().with_strict_values(true));
        parser.add_section("s").unwrap();
        parser
    }

    #[test]
    fn non_text_is_rendered_when_lenient() {
        let mut parser = parse("[s]\n");
        parser.set_display("s", "n", &42).unwrap();
        parser.set_display("s", "f", &1.5).unwrap();

        assert_eq!(parser.get("s", "n").unwrap(), "42");
        assert_eq!(parser.get("s", "f").unwrap(), "1.5");
    }

    #[test]
    fn non_text_is_rejected_when_strict() {
        let mut parser = strict();
        match parser.set_display("s", "n", &42_i32) {
            Err(Error::NonStringValue {
                section,
                option,
                type_name,
            }) => {
                assert_eq!(section, "s");
                assert_eq!(option, "n");
                assert_eq!(type_name, "i32");
            }
            other => panic!("expected non-string error, got {other:?}"),
        }
        assert!(!parser.has_option("s", "n"));
    }

    #[test]
    fn text_is_accepted_when_strict() {
        let mut parser = strict();
        parser.set_display("s", "a", "text").unwrap();
        parser.set_display("s", "b", &String::from("owned")).unwrap();

        assert_eq!(parser.get("s", "a").unwrap(), "text");
        assert_eq!(parser.get("s", "b").unwrap(), "owned");
    }

    #[test]
    fn plain_set_is_unaffected_by_strict() {
        let mut parser = strict();
        parser.set("s", "k", 7.to_string()).unwrap();
        assert_eq!(parser.get("s", "k").unwrap(), "7");
    }
}
