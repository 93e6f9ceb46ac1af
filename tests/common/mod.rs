#![allow(dead_code)]

use express_authorize::application::authorize::ExpressAuthorizeRequest;
use express_authorize::domain::card::Card;
use express_authorize::domain::params::AuthorizeParams;
use express_authorize::domain::response::ReplyFields;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

/// A request carrying only the three required parameters.
pub fn minimal_request() -> ExpressAuthorizeRequest {
    ExpressAuthorizeRequest::new(AuthorizeParams {
        amount: Some(dec!(10)),
        return_url: Some("https://r".to_string()),
        cancel_url: Some("https://c".to_string()),
        ..Default::default()
    })
}

pub fn full_card() -> Card {
    Card {
        name: Some("Grace Hopper".to_string()),
        address1: Some("1 Navy Yard".to_string()),
        address2: Some("Building 4".to_string()),
        city: Some("Arlington".to_string()),
        state: Some("VA".to_string()),
        country: Some("US".to_string()),
        postcode: Some("22202".to_string()),
        phone: Some("555-0100".to_string()),
        email: Some("grace@example.com".to_string()),
    }
}

pub fn reply(pairs: &[(&str, &str)]) -> ReplyFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}
