use gloo_net::http::Request;
use gloo_storage::Storage;

/// Creates a request with Authorization header from localStorage
pub fn authenticated_request(method: &str, url: &str) -> gloo_net::http::RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url), // Default to GET
    };

    // Attach Authorization header for all authenticated requests
    if let Ok(session_id) = gloo_storage::LocalStorage::get::<String>("session_id") {
        req = req.header("Authorization", &format!("Bearer {}", session_id));
    }

    req
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> gloo_net::http::RequestBuilder {
    authenticated_request("GET", url)
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> gloo_net::http::RequestBuilder {
    authenticated_request("POST", url)
}

/// Strips the collection prefix from a document id for use in URL paths.
/// Backend routes take the bare key ("player/42" -> "42").
pub fn document_key(id: &str) -> &str {
    id.split('/').nth(1).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_key_strips_collection_prefix() {
        assert_eq!(document_key("player/42"), "42");
        assert_eq!(document_key("match/abc123"), "abc123");
    }

    #[test]
    fn test_document_key_passes_bare_keys_through() {
        assert_eq!(document_key("42"), "42");
        assert_eq!(document_key(""), "");
    }
}
