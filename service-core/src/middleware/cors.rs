use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Marker accepted in an origin allow-list meaning "every origin".
pub const ANY_ORIGIN: &str = "*";

/// Cross-origin allow-list, parsed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated allow-list such as `"https://a.com, https://b.com"`.
    ///
    /// Unset, blank or `*` means any origin. Entries are trimmed and empty
    /// entries dropped; a `*` entry anywhere in the list also means any origin.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return AllowedOrigins::Any;
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        if origins.iter().any(|o| o == ANY_ORIGIN) {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// CORS policy with credentials and any method/header.
///
/// Credentials rule out the literal `*` wildcard, so "any" is expressed by
/// mirroring the request's origin, method and headers.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::mirror_request(),
        AllowedOrigins::List(list) => AllowOrigin::list(list.iter().filter_map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| {
                    tracing::error!("Invalid CORS origin '{}': {}. Dropping it.", o, e);
                })
                .ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_blank_and_wildcard_allow_any_origin() {
        assert_eq!(AllowedOrigins::parse(None), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some("")), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some("   ")), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some("*")), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some(" * ")), AllowedOrigins::Any);
        assert_eq!(
            AllowedOrigins::parse(Some("https://a.com,*")),
            AllowedOrigins::Any
        );
    }

    #[test]
    fn list_is_trimmed_and_drops_empty_entries() {
        assert_eq!(
            AllowedOrigins::parse(Some("https://a.com, ,https://b.com ,")),
            AllowedOrigins::List(vec![
                "https://a.com".to_string(),
                "https://b.com".to_string()
            ])
        );
    }

    #[test]
    fn only_separators_yields_empty_list() {
        assert_eq!(
            AllowedOrigins::parse(Some(" , ,")),
            AllowedOrigins::List(Vec::new())
        );
    }
}
