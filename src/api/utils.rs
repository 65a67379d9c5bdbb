//! Utility functions for API operations

use crate::types::api::Params;
use serde_json::Value;

/// Join a base URL and a relative path with exactly one `/` between them
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else if !base_url.ends_with('/') && !path.starts_with('/') {
        format!("{}/{}", base_url, path)
    } else {
        format!("{}{}", base_url, path)
    }
}

/// Render a parameter value the way it appears in a query string
///
/// Strings are used verbatim, everything else uses its JSON text (`true`, `1440`).
pub fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Serialize the present parameters as `key=value` pairs joined by `&`
///
/// Absent parameters are skipped. Returns an empty string when nothing is left.
pub fn build_query_string(params: &Params) -> String {
    params
        .present()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&query_value(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append the query string of `params` to `url`, if there is one
pub fn with_query(mut url: String, params: Option<&Params>) -> String {
    if let Some(params) = params {
        let query = build_query_string(params);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.btse.com/", "spot/api/v3.2/price"),
            "https://api.btse.com/spot/api/v3.2/price"
        );
        assert_eq!(
            join_url("https://api.btse.com/", "/spot/api/v3.2/price"),
            "https://api.btse.com/spot/api/v3.2/price"
        );
        assert_eq!(
            join_url("http://127.0.0.1:8080", "spot/api/v3.2/price"),
            "http://127.0.0.1:8080/spot/api/v3.2/price"
        );
    }

    #[test]
    fn test_query_string_skips_absent_values() {
        let params = Params::new()
            .with("symbol", "BTSE-USDT")
            .with("resolution", 1440)
            .with_opt::<i64>("start", None)
            .with_opt("end", Some(1591337420_i64));

        assert_eq!(
            build_query_string(&params),
            "symbol=BTSE-USDT&resolution=1440&end=1591337420"
        );
    }

    #[test]
    fn test_query_values_are_stringified() {
        let params = Params::new()
            .with("count", 50)
            .with("includeOld", false)
            .with("depth", "10");
        assert_eq!(
            build_query_string(&params),
            "count=50&includeOld=false&depth=10"
        );
    }

    #[test]
    fn test_with_query_omits_question_mark_when_empty() {
        let params = Params::new().with_opt::<String>("symbol", None);
        assert_eq!(with_query("u".to_string(), Some(&params)), "u");
        assert_eq!(with_query("u".to_string(), None), "u");
        assert_eq!(
            with_query("u".to_string(), Some(&Params::new().with("a", 1))),
            "u?a=1"
        );
    }
}
