//! Tests for retrieval, fallback to defaults, and interpolation.

use crate::error::InterpolationError;
use crate::interpolate::{Interpolation, Overrides};
use crate::model::NamePolicy;

use super::*;

mod get {
    use super::*;

    #[test]
    fn interpolates_from_section_and_defaults() {
        let parser = parse(SERVER_INI);
        assert_eq!(parser.get("server", "url").unwrap(), "http://localhost:8080");
    }

    #[test]
    fn raw_skips_interpolation() {
        let parser = parse(SERVER_INI);
        assert_eq!(
            parser.get_raw("server", "url").unwrap(),
            "http://%(host)s:%(port)s"
        );
        assert_eq!(
            parser.get_with("server", "url", true, None).unwrap(),
            "http://%(host)s:%(port)s"
        );
    }

    #[test]
    fn names_are_case_insensitive_by_default() {
        let parser = parse(SERVER_INI);
        assert_eq!(parser.get("SERVER", "HOST").unwrap(), "localhost");
    }

    #[test]
    fn falls_back_to_defaults() {
        let parser = parse(SERVER_INI);
        assert_eq!(parser.get("server", "port").unwrap(), "8080");
    }

    #[test]
    fn default_section_is_addressable() {
        let parser = parse(SERVER_INI);
        assert_eq!(parser.get("DEFAULT", "port").unwrap(), "8080");
        assert!(matches!(
            parser.get("DEFAULT", "host"),
            Err(Error::NoOption { .. })
        ));
    }

    #[test]
    fn escaped_percent_becomes_literal() {
        let parser = parse("[s]\nratio = 100%%\n");
        assert_eq!(parser.get("s", "ratio").unwrap(), "100%");
        assert_eq!(parser.get_raw("s", "ratio").unwrap(), "100%%");
    }

    #[test]
    fn missing_section_is_an_error() {
        let parser = parse(SERVER_INI);
        assert!(matches!(
            parser.get("client", "url"),
            Err(Error::NoSection { section }) if section == "client"
        ));
    }

    #[test]
    fn missing_option_is_an_error() {
        let parser = parse(SERVER_INI);
        assert!(matches!(
            parser.get("server", "path"),
            Err(Error::NoOption { section, option }) if section == "server" && option == "path"
        ));
    }

    #[test]
    fn missing_reference_names_the_key() {
        let parser = parse("[s]\na = %(missing)s\n");
        match parser.get("s", "a") {
            Err(Error::Interpolation(InterpolationError::MissingOption {
                section,
                option,
                raw,
                reference,
            })) => {
                assert_eq!(section, "s");
                assert_eq!(option, "a");
                assert_eq!(raw, "%(missing)s");
                assert_eq!(reference, "missing");
            }
            other => panic!("expected missing option, got {other:?}"),
        }
    }

    #[test]
    fn depth_bound_is_ten() {
        let mut text = String::from("[chain]\n");
        for i in 0..11 {
            text.push_str(&format!("k{i} = %(k{})s\n", i + 1));
        }
        text.push_str("k11 = leaf\n");
        let parser = parse(&text);

        assert_eq!(parser.get("chain", "k1").unwrap(), "leaf");
        assert!(matches!(
            parser.get("chain", "k0"),
            Err(Error::Interpolation(InterpolationError::Depth { .. }))
        ));
    }

    #[test]
    fn no_interpolation_returns_raw() {
        let options = ParserOptions::new().with_interpolation(Interpolation::None);
        let parser = parse_with(options, "[s]\na = %(b)s 50%\n");
        assert_eq!(parser.get("s", "a").unwrap(), "%(b)s 50%");
    }

    #[test]
    fn dollar_mode_expands_dollar_references() {
        let options = ParserOptions::new().with_interpolation(Interpolation::Dollar);
        let parser = parse_with(options, "[p]\nroot = /srv\ndata = ${root}/data\ncost = $$5\n");
        assert_eq!(parser.get("p", "data").unwrap(), "/srv/data");
        assert_eq!(parser.get("p", "cost").unwrap(), "$5");
    }
}

mod overrides {
    use super::*;

    #[test]
    fn override_wins_for_the_option_itself() {
        let parser = parse(SERVER_INI);
        let vars = Overrides::new().with("host", "example.org");

        assert_eq!(
            parser.get_with("server", "host", false, Some(&vars)).unwrap(),
            "example.org"
        );
    }

    #[test]
    fn override_feeds_interpolation() {
        let parser = parse(SERVER_INI);
        let vars = Overrides::new().with("Port", "443");

        assert_eq!(
            parser.get_with("server", "url", false, Some(&vars)).unwrap(),
            "http://localhost:443"
        );
    }

    #[test]
    fn override_can_supply_an_undefined_option() {
        let parser = parse(SERVER_INI);
        let vars = Overrides::new().with("scheme", "https");

        assert_eq!(
            parser.get_with("server", "scheme", true, Some(&vars)).unwrap(),
            "https"
        );
    }
}

mod has_option {
    use super::*;

    #[test]
    fn local_and_default_options_are_found() {
        let parser = parse(SERVER_INI);
        assert!(parser.has_option("server", "host"));
        assert!(parser.has_option("server", "port"));
        assert!(!parser.has_option("server", "path"));
    }

    #[test]
    fn default_section_checks_defaults_only() {
        let parser = parse(SERVER_INI);
        assert!(parser.has_option("DEFAULT", "port"));
        assert!(!parser.has_option("DEFAULT", "host"));
    }

    #[test]
    fn absent_section_is_false() {
        let parser = parse(SERVER_INI);
        assert!(!parser.has_option("client", "port"));
    }
}

mod listing {
    use super::*;

    #[test]
    fn sections_exclude_defaults() {
        let parser = parse("[DEFAULT]\nx = 1\n[b]\n[a]\n");
        assert_eq!(parser.sections(), ["b", "a"]);
        assert!(!parser.has_section("DEFAULT"));
        assert!(parser.has_section("B"));
    }

    #[test]
    fn options_lists_own_names_only() {
        let parser = parse(SERVER_INI);
        assert_eq!(parser.options("server").unwrap(), ["host", "url"]);
    }

    #[test]
    fn options_of_default_is_no_section() {
        let parser = parse(SERVER_INI);
        assert!(matches!(
            parser.options("DEFAULT"),
            Err(Error::NoSection { .. })
        ));
    }

    #[test]
    fn items_put_local_first_then_unshadowed_defaults() {
        let parser = parse("[DEFAULT]\nz = dz\nhost = dh\n\n[s]\nhost = sh\na = %(z)s\n");
        assert_eq!(
            parser.items("s").unwrap(),
            [
                ("host".to_owned(), "sh".to_owned()),
                ("a".to_owned(), "dz".to_owned()),
                ("z".to_owned(), "dz".to_owned()),
            ]
        );
    }

    #[test]
    fn items_raw_and_with_overrides() {
        let parser = parse("[s]\na = %(who)s\n");
        let vars = Overrides::new().with("who", "me");

        assert_eq!(
            parser.items_with("s", true, None).unwrap(),
            [("a".to_owned(), "%(who)s".to_owned())]
        );
        assert_eq!(
            parser.items_with("s", false, Some(&vars)).unwrap(),
            [("a".to_owned(), "me".to_owned())]
        );
    }

    #[test]
    fn items_of_default_lists_defaults() {
        let parser = parse(SERVER_INI);
        assert_eq!(
            parser.items("DEFAULT").unwrap(),
            [("port".to_owned(), "8080".to_owned())]
        );
    }

    #[test]
    fn case_sensitive_policy_keeps_distinct_names() {
        let options = ParserOptions::new().with_name_policy(NamePolicy::Exact);
        let parser = parse_with(options, "[S]\nKey = upper\nkey = lower\n");

        assert_eq!(parser.options("S").unwrap(), ["Key", "key"]);
        assert!(!parser.has_section("s"));
        assert_eq!(parser.get("S", "Key").unwrap(), "upper");
    }
}
