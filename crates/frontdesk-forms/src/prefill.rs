// File: src/prefill.rs
// Purpose: Initial field values from URL query parameters

use std::collections::HashMap;

use frontdesk_validation_core::normalize_time;

use crate::schema::{FieldKind, FormSchema};

/// Decoded query parameters. The first occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Parse a bare query string (`a=1&b=2`), a `?`-prefixed one, or a full
    /// or hash-routed URL (`https://host/#/visitor?email=...`).
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None if input.contains('=') => input,
            None => "",
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut params = HashMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params
                .entry(decode(key))
                .or_insert_with(|| decode(value));
        }
        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `+` means space in query strings; malformed escapes are kept verbatim
fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Values to seed a form with, keyed by field name. Fields without a
/// matching parameter are absent. Time fields are reduced to `HH:MM`.
pub fn initial_values(schema: &FormSchema, params: &QueryParams) -> Vec<(String, String)> {
    schema
        .fields
        .iter()
        .filter(|spec| !spec.kind.is_file())
        .filter_map(|spec| {
            let raw = params.get(spec.param_name())?;
            let value = match spec.kind {
                FieldKind::Time => normalize_time(raw),
                _ => raw.to_string(),
            };
            Some((spec.name.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hash_route() {
        let params = QueryParams::parse(
            "http://localhost:3000/#/theme/colors/VisitorForm?email=jane%40example.com&time=10%3A00%20AM&date=2099-01-01",
        );
        assert_eq!(params.get("email"), Some("jane@example.com"));
        assert_eq!(params.get("time"), Some("10:00 AM"));
        assert_eq!(params.get("date"), Some("2099-01-01"));
    }

    #[test]
    fn test_parse_bare_query_and_plus() {
        let params = QueryParams::parse("firstName=Mary+Ann&lastName=Doe&flag");
        assert_eq!(params.get("firstName"), Some("Mary Ann"));
        assert_eq!(params.get("flag"), Some(""));
        assert!(QueryParams::parse("no-query-here").is_empty());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = QueryParams::parse("?a=1&a=2");
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_visitor_initial_values() {
        let params = QueryParams::parse(
            "?firstName=Jane&lastName=Doe&date=2099-01-01&time=10:00:00&email=jane@example.com&photo=x",
        );
        let values = initial_values(&presets::visitor(), &params);
        assert_eq!(
            values,
            vec![
                ("firstName".to_string(), "Jane".to_string()),
                ("lastName".to_string(), "Doe".to_string()),
                ("date".to_string(), "2099-01-01".to_string()),
                ("allocatedTime".to_string(), "10:00".to_string()),
                ("email".to_string(), "jane@example.com".to_string()),
            ]
        );
    }
}
