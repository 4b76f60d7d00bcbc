//! Suffix-to-header mapping for precompressed runtime assets
//!
//! The Unity loader fetches `.gz`/`.gzip` artifacts directly and relies on
//! the server declaring `Content-Encoding: gzip` with the right content
//! type; wrong headers and the runtime fails to initialize. The mapping is
//! kept as a pure function so it is testable without IO.

/// Build artifacts are immutable per deployment
pub const LONG_LIVED_CACHE: &str = "public, max-age=31536000";

/// Response headers for a runtime asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetHeaders {
    pub content_type: &'static str,
    pub content_encoding: Option<&'static str>,
    pub cache_control: &'static str,
}

/// Header mapping for a runtime build artifact, by path suffix
///
/// `None` for paths outside the known suffixes; callers fall back to MIME
/// guessing with no cache or encoding headers.
pub fn headers_for(path: &str) -> Option<AssetHeaders> {
    if path.ends_with(".framework.js.gz") {
        Some(AssetHeaders {
            content_type: "text/javascript",
            content_encoding: Some("gzip"),
            cache_control: LONG_LIVED_CACHE,
        })
    } else if path.ends_with(".data.gz")
        || path.ends_with(".data.gzip")
        || path.ends_with(".wasm.gz")
        || path.ends_with(".wasm.gzip")
    {
        Some(AssetHeaders {
            content_type: "application/octet-stream",
            content_encoding: Some("gzip"),
            cache_control: LONG_LIVED_CACHE,
        })
    } else if path.ends_with(".loader.js") {
        Some(AssetHeaders {
            content_type: "application/javascript",
            content_encoding: None,
            cache_control: LONG_LIVED_CACHE,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn framework_bundle_is_gzip_javascript() {
        let headers = headers_for("medashooter.framework.js.gz").unwrap();
        assert_eq!(headers.content_type, "text/javascript");
        assert_eq!(headers.content_encoding, Some("gzip"));
        assert_eq!(headers.cache_control, LONG_LIVED_CACHE);
    }

    #[test]
    fn data_and_wasm_are_gzip_octet_streams() {
        for path in [
            "medashooter.data.gz",
            "medashooter.data.gzip",
            "medashooter.wasm.gz",
            "medashooter.wasm.gzip",
        ] {
            let headers = headers_for(path).unwrap();
            assert_eq!(headers.content_type, "application/octet-stream", "{path}");
            assert_eq!(headers.content_encoding, Some("gzip"), "{path}");
        }
    }

    #[test]
    fn loader_is_plain_javascript_without_encoding() {
        let headers = headers_for("medashooter.loader.js").unwrap();
        assert_eq!(headers.content_type, "application/javascript");
        assert_eq!(headers.content_encoding, None);
        assert_eq!(headers.cache_control, LONG_LIVED_CACHE);
    }

    #[test]
    fn unknown_suffixes_fall_through() {
        for path in [
            "index.html",
            "medashooter.wasm",
            "medashooter.framework.js",
            "style.css",
        ] {
            assert_eq!(headers_for(path), None, "{path}");
        }
    }
}
