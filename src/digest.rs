use std::collections::HashMap;

/// Scheme prefix of a Digest `Authorization` header value.
pub const DIGEST_PREFIX: &str = "Digest ";

/// The parameters extracted from a Digest header.
pub const DIGEST_FIELDS: [&str; 9] = [
    "username", "nonce", "nc", "cnonce", "response", "uri", "realm", "qop", "algorithm",
];

/// The parsed parameters of an HTTP Digest `Authorization` header.
///
/// A successfully recognised header also carries `type = "Digest"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigestAuth(pub HashMap<String, String>);

impl DigestAuth {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Parses an `Authorization` header value.
    ///
    /// Values that do not start with `Digest ` produce an empty map. Each of
    /// [`DIGEST_FIELDS`] present in the header is copied into the map. A
    /// quoted value ends at the next `"` with no escape handling, and an
    /// unquoted value ends at the next `,`. Either runs to the end of the
    /// header if its terminator is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use webutil::digest::DigestAuth;
    ///
    /// let auth = DigestAuth::parse(r#"Digest username="bob", nonce="xyz", nc=00000001"#);
    /// assert_eq!(auth.get("username"), Some("bob"));
    /// assert_eq!(auth.get("nc"), Some("00000001"));
    /// assert!(DigestAuth::parse("Basic Ym9iOnNlY3JldA==").is_empty());
    /// ```
    pub fn parse(header: &str) -> Self {
        let mut auth = DigestAuth::new();
        let Some(params) = header.strip_prefix(DIGEST_PREFIX) else {
            tracing::trace!("authorization header is not a Digest header");
            return auth;
        };
        auth.0.insert("type".to_string(), "Digest".to_string());
        for field in DIGEST_FIELDS {
            if let Some(value) = extract_field(params, field) {
                auth.0.insert(field.to_string(), value.to_string());
            }
        }
        auth
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the authentication scheme, `Some("Digest")` for any parsed header.
    pub fn scheme(&self) -> Option<&str> {
        self.get("type")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl From<DigestAuth> for HashMap<String, String> {
    fn from(auth: DigestAuth) -> Self {
        auth.0
    }
}

/// Parses a Digest `Authorization` header into a field map.
///
/// See [`DigestAuth::parse`].
pub fn parse_digest_auth(header: &str) -> DigestAuth {
    DigestAuth::parse(header)
}

/// Finds `name=` at a parameter boundary and returns its value.
fn extract_field<'a>(params: &'a str, name: &str) -> Option<&'a str> {
    let value_start = find_key(params, name)?;
    let rest = &params[value_start..];
    match rest.strip_prefix('"') {
        Some(quoted) => Some(quoted.split_once('"').map_or(quoted, |(value, _)| value)),
        None => Some(rest.split_once(',').map_or(rest, |(value, _)| value)),
    }
}

/// Byte offset just past `name=`, where `name` starts the parameter list
/// or follows a space, tab or comma.
fn find_key(params: &str, name: &str) -> Option<usize> {
    let key = format!("{name}=");
    let bytes = params.as_bytes();
    params.match_indices(&key).find_map(|(i, _)| {
        let at_boundary = i == 0 || matches!(bytes[i - 1], b' ' | b'\t' | b',');
        at_boundary.then_some(i + key.len())
    })
}
