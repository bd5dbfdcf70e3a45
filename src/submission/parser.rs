use std::collections::HashMap;

use derive_getters::Getters;
use rocket::http::RawStr;

/// Raw transport input as the host hands it over: an url-encoded body plus
/// optional path and query parameter maps.
#[derive(Debug, Default, Getters)]
pub struct TransportEvent {
    body: Option<String>,
    path_parameters: Option<HashMap<String, String>>,
    query_string_parameters: Option<HashMap<String, String>>,
}

impl TransportEvent {
    pub fn new(
        body: Option<String>,
        path_parameters: Option<HashMap<String, String>>,
        query_string_parameters: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            body,
            path_parameters,
            query_string_parameters,
        }
    }
}

/// Flattens a transport event into a single field mapping.
/// On key collision, later sources win: body < path parameters < query
/// parameters. Absent sources contribute nothing; parsing never fails.
pub fn parse(event: &TransportEvent) -> HashMap<String, String> {
    let mut fields = parse_url_encoded_body(event.body().as_deref().unwrap_or_default());
    if let Some(path_parameters) = event.path_parameters() {
        fields.extend(path_parameters.clone());
    }
    if let Some(query_string_parameters) = event.query_string_parameters() {
        fields.extend(query_string_parameters.clone());
    }

    fields
}

fn parse_url_encoded_body(body: &str) -> HashMap<String, String> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .map(|(key, value)| (url_decode(key), url_decode(value)))
        .collect()
}

fn url_decode(input: &str) -> String {
    RawStr::new(input).url_decode_lossy().into_owned()
}
