//! Raw, multi-valued request parameters.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Untrusted query parameters as received, plus request-scoped attributes.
///
/// Any name may repeat; values keep request order.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    params: BTreeMap<String, Vec<String>>,
    attributes: HashMap<String, Value>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut raw = Self::new();
        for (name, value) in pairs {
            raw.add(name, value);
        }
        raw
    }

    /// Append one value for `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// First value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of `name`, empty when absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parameters whose name starts with `prefix`, keyed by the remainder.
    pub fn strip_prefixed(&self, prefix: &str) -> BTreeMap<String, Vec<String>> {
        self.params
            .iter()
            .filter_map(|(name, values)| {
                name.strip_prefix(prefix)
                    .map(|suffix| (suffix.to_string(), values.clone()))
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_values_keep_order() {
        let raw = RawParams::from_query("ex_q=extra1&q=rust&ex_q=extra2");
        assert_eq!(raw.get_all("ex_q"), ["extra1", "extra2"]);
        assert_eq!(raw.get("ex_q"), Some("extra1"));
        assert_eq!(raw.get("q"), Some("rust"));
        assert!(raw.get_all("missing").is_empty());
    }

    #[test]
    fn test_percent_decoding() {
        let raw = RawParams::from_query("q=%E3%83%86%E3%82%B9%E3%83%88+query&callback=a%28b%29");
        assert_eq!(raw.get("q"), Some("テスト query"));
        assert_eq!(raw.get("callback"), Some("a(b)"));
    }

    #[test]
    fn test_strip_prefixed() {
        let raw = RawParams::from_query(
            "fields.title=x&fields.content=y1&fields.content=y2&as.filetype=pdf&fieldsX=z",
        );
        let fields = raw.strip_prefixed("fields.");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["title"], ["x"]);
        assert_eq!(fields["content"], ["y1", "y2"]);
    }

    #[test]
    fn test_attributes() {
        let mut raw = RawParams::new();
        raw.set_attribute("request_id", "abc");
        assert_eq!(raw.attribute("request_id"), Some(&Value::from("abc")));
        assert_eq!(raw.attribute("missing"), None);
    }
}
