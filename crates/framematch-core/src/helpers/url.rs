// crates/framematch-core/src/helpers/url.rs
//
// Endpoint URL helpers. The service hands back paths like "/output/x.mp4"
// that are relative to its own origin.

use url::Url;

/// `{endpoint}/upload/`, keeping any path prefix on the endpoint.
///
/// ```
/// use framematch_core::helpers::url::upload_url;
/// assert_eq!(upload_url("http://127.0.0.1:8000"),  "http://127.0.0.1:8000/upload/");
/// assert_eq!(upload_url("http://host/api/"),       "http://host/api/upload/");
/// ```
pub fn upload_url(endpoint: &str) -> String {
    format!("{}/upload/", endpoint.trim().trim_end_matches('/'))
}

/// Resolve a path from a response against the service. Absolute URLs are
/// returned unchanged. If `base` does not parse, the path is returned as is.
pub fn resolve(base: &str, path: &str) -> String {
    if let Ok(abs) = Url::parse(path) {
        return abs.to_string();
    }
    match Url::parse(base.trim()).and_then(|b| b.join(path)) {
        Ok(u)  => u.to_string(),
        Err(_) => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_against_origin() {
        assert_eq!(resolve("http://127.0.0.1:8000", "/f5.jpg"), "http://127.0.0.1:8000/f5.jpg");
        assert_eq!(
            resolve("http://127.0.0.1:8000/", "/output/a_processed.mp4"),
            "http://127.0.0.1:8000/output/a_processed.mp4",
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(resolve("http://a:1", "https://cdn.example/f.jpg"), "https://cdn.example/f.jpg");
    }

    #[test]
    fn bad_base_returns_path() {
        assert_eq!(resolve("not a url", "/f.jpg"), "/f.jpg");
    }
}
