//! Tests for INI rendering.

use super::*;
use crate::model::NamePolicy;

fn sample() -> Document {
    let mut doc = Document::default();
    doc.add_section("Server").unwrap();
    doc.set("server", "Host", "localhost".to_owned());
    doc.set("server", "url", "http://%(host)s:%(port)s".to_owned());
    doc.set("DEFAULT", "port", "8080".to_owned());
    doc
}

#[test]
fn defaults_first_then_sections_in_order() {
    let mut doc = sample();
    doc.add_section("client").unwrap();
    doc.set("client", "retries", "3".to_owned());

    assert_eq!(
        to_ini_string(&doc, Interpolation::Percent),
        "[DEFAULT]\nport = 8080\n\n\
         [Server]\nHost = localhost\nurl = http://%(host)s:%(port)s\n\n\
         [client]\nretries = 3\n\n"
    );
}

#[test]
fn empty_defaults_are_omitted() {
    let mut doc = Document::new(NamePolicy::Exact);
    doc.add_section("only").unwrap();

    assert_eq!(to_ini_string(&doc, Interpolation::Percent), "[only]\n\n");
}

#[test]
fn multi_line_values_are_indented() {
    let mut doc = Document::default();
    doc.add_section("s").unwrap();
    doc.set("s", "lines", "one\ntwo\nthree".to_owned());

    assert_eq!(
        to_ini_string(&doc, Interpolation::None),
        "[s]\nlines = one\n    two\n    three\n\n"
    );
}

#[test]
fn stray_percent_is_escaped_in_percent_mode_only() {
    let mut doc = Document::default();
    doc.add_section("s").unwrap();
    doc.set("s", "ratio", "50% of 100%%".to_owned());

    assert!(to_ini_string(&doc, Interpolation::Percent).contains("ratio = 50%% of 100%%\n"));
    assert!(to_ini_string(&doc, Interpolation::None).contains("ratio = 50% of 100%%\n"));
}

#[test]
fn stray_dollar_is_escaped_in_dollar_mode() {
    let mut doc = Document::default();
    doc.add_section("s").unwrap();
    doc.set("s", "price", "$5 for ${item}".to_owned());

    assert!(to_ini_string(&doc, Interpolation::Dollar).contains("price = $$5 for ${item}\n"));
}

#[test]
fn comments_and_metadata_are_re_emitted() {
    let mut doc = Document::default();
    doc.push_preamble("; top of file".to_owned());
    let section = doc.section_for_header("s", 2);
    section.push_comment("# about s".to_owned());
    section.insert(
        "k".to_owned(),
        OptionEntry::new("k", "v")
            .with_line(4)
            .with_inline_comment(Some("why".to_owned())),
    );
    section.entry_mut("k").unwrap().push_comment("# after k".to_owned());

    assert_eq!(
        to_ini_string(&doc, Interpolation::Percent),
        "; top of file\n[s]\n# about s\nk = v ; why\n# after k\n\n"
    );
}

#[test]
fn write_document_streams_into_any_fmt_writer() {
    let mut out = String::new();
    write_document(&sample(), Interpolation::Percent, &mut out).unwrap();
    assert!(out.starts_with("[DEFAULT]\n"));
}

mod writable {
    use super::*;

    #[test]
    fn accepts_values_the_scanner_reads_back() {
        for value in ["", "plain", "a;b", "#x", "\nfirst line empty", "x\ny ;z", "k=v:w"] {
            assert_eq!(check_writable(value), Ok(()), "{value:?}");
        }
    }

    #[test]
    fn rejects_inline_comment_on_first_line() {
        assert!(check_writable("a ;b").is_err());
        assert!(check_writable(";b").is_err());
    }

    #[test]
    fn rejects_empty_continuation_line() {
        assert!(check_writable("x\n\ny").is_err());
        assert!(check_writable("x\n").is_err());
    }

    #[test]
    fn rejects_comment_like_continuation_line() {
        assert!(check_writable("x\n#y").is_err());
        assert!(check_writable("x\n;y").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(check_writable("  pad  ").is_err());
        assert!(check_writable("x\n  y").is_err());
        assert!(check_writable("x\ny\t").is_err());
    }
}
