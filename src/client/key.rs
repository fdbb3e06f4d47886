//! Request Key Module
//!
//! Derives cache keys from request signatures.

use url::form_urlencoded::byte_serialize;

/// Builds the cache key for a GET of `path` with `query` parameters.
///
/// Path segments, query names and query values are each form-urlencoded
/// before joining, so `:`, `&` and `=` in the key only ever come from the
/// separators and two different requests never share a key. Segments are
/// joined with `:`, and sorted `name=value` pairs follow after one more `:`.
/// `("/products", [("page", "0")])` becomes `"products:page=0"`. The root
/// path maps to `"/"` so keys are never empty.
pub fn request_key(path: &str, query: &[(String, String)]) -> String {
    let trimmed = path.trim_matches('/');
    let mut key = if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.split('/').map(encode).collect::<Vec<_>>().join(":")
    };

    if !query.is_empty() {
        let mut pairs: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect();
        pairs.sort();
        key.push(':');
        key.push_str(&pairs.join("&"));
    }

    key
}

fn encode(part: &str) -> String {
    byte_serialize(part.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_path_with_query() {
        assert_eq!(
            request_key("/products", &pairs(&[("page", "0")])),
            "products:page=0"
        );
    }

    #[test]
    fn test_nested_path_without_query() {
        assert_eq!(
            request_key("/vehicles/vin/1HGCM82633A004352/", &[]),
            "vehicles:vin:1HGCM82633A004352"
        );
    }

    #[test]
    fn test_query_order_does_not_matter() {
        let a = request_key("parts", &pairs(&[("make", "honda"), ("year", "2003")]));
        let b = request_key("parts", &pairs(&[("year", "2003"), ("make", "honda")]));
        assert_eq!(a, b);
        assert_eq!(a, "parts:make=honda&year=2003");
    }

    #[test]
    fn test_root_path_is_not_empty() {
        assert_eq!(request_key("/", &[]), "/");
        assert_eq!(request_key("", &pairs(&[("q", "x")])), "/:q=x");
    }

    #[test]
    fn test_distinct_params_give_distinct_keys() {
        assert_ne!(
            request_key("products", &pairs(&[("page", "0")])),
            request_key("products", &pairs(&[("page", "1")]))
        );
    }

    #[test]
    fn test_separators_inside_query_values_are_escaped() {
        let one_param = request_key("products", &pairs(&[("page", "0&sort=x")]));
        let two_params = request_key("products", &pairs(&[("page", "0"), ("sort", "x")]));

        assert_ne!(one_param, two_params);
        assert_eq!(one_param, "products:page=0%26sort%3Dx");
        assert_eq!(two_params, "products:page=0&sort=x");
    }

    #[test]
    fn test_colon_in_path_segment_differs_from_query() {
        let in_path = request_key("/products:page=0", &[]);
        let in_query = request_key("/products", &pairs(&[("page", "0")]));

        assert_ne!(in_path, in_query);
        assert_eq!(in_path, "products%3Apage%3D0");
    }

    #[test]
    fn test_colon_in_segment_differs_from_nested_path() {
        assert_ne!(request_key("/a:b", &[]), request_key("/a/b", &[]));
    }

    #[test]
    fn test_space_and_plus_stay_distinct() {
        assert_ne!(
            request_key("parts", &pairs(&[("q", "oil filter")])),
            request_key("parts", &pairs(&[("q", "oil+filter")]))
        );
    }
}
