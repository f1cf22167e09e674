//! Tests for the parser façade.

use super::ConfigParser;
use crate::error::Error;
use crate::options::ParserOptions;

/// The server/url document used across lookup tests.
const SERVER_INI: &str = "\
[DEFAULT]
port = 8080

[Server]
Host = localhost
url = http://%(host)s:%(port)s
";

/// Helper to parse text with default options
fn parse(text: &str) -> ConfigParser {
    parse_with(ParserOptions::default(), text)
}

/// Helper to parse text with the given options
fn parse_with(options: ParserOptions, text: &str) -> ConfigParser {
    let mut parser = ConfigParser::new(options);
    parser.read_str(text, "<test>").unwrap();
    parser
}

mod lookup_tests;
mod mutation_tests;
