//! Session cookie reading and writing.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

/// Attributes of the cookie that carries the session key.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub max_age_seconds: i64,
}

impl SessionCookie {
    /// Extracts the session key from the request `Cookie` headers.
    ///
    /// Multiple `Cookie` headers and multiple pairs per header are accepted;
    /// the first pair with a matching name and a non-empty value wins.
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookie_str| cookie_str.split(';'))
            .find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(name), Some(value)) if name == self.name && !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
    }

    /// `Set-Cookie` value storing `key`.
    pub fn set(&self, key: &str) -> HeaderValue {
        self.header(key, self.max_age_seconds)
    }

    /// `Set-Cookie` value removing the cookie from the client.
    pub fn clear(&self) -> HeaderValue {
        self.header("", 0)
    }

    fn header(&self, value: &str, max_age: i64) -> HeaderValue {
        let mut cookie = format!(
            "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
            self.name, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }

        // Names are validated at startup and keys are alphanumeric.
        HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}
