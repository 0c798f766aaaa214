use wasm_bindgen::JsCast;

/// The backend sets this cookie after a successful login. Its presence, with
/// any value, is the whole authentication signal.
pub const AUTH_COOKIE: &str = "auth";

const EXPIRY_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Narrow seam over the browser cookie store. The guard only reads; logout
/// additionally rewrites cookies to an already-expired timestamp.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;

    fn names(&self) -> Vec<String>;

    fn set_expired(&self, name: &str) -> anyhow::Result<()>;
}

pub fn is_authenticated(jar: &impl CookieJar) -> bool {
    jar.get(AUTH_COOKIE).is_some()
}

pub struct BrowserCookies;

fn html_document() -> Option<web_sys::HtmlDocument> {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            return document.dyn_into::<web_sys::HtmlDocument>().ok();
        }
    }
    None
}

fn raw_cookies() -> Option<String> {
    html_document().and_then(|document| document.cookie().ok())
}

impl CookieJar for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let raw = raw_cookies()?;
        parse_cookie_header(&raw)
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    fn names(&self) -> Vec<String> {
        let Some(raw) = raw_cookies() else {
            return Vec::new();
        };
        parse_cookie_header(&raw).into_iter().map(|(key, _)| key).collect()
    }

    fn set_expired(&self, name: &str) -> anyhow::Result<()> {
        let Some(document) = html_document() else {
            anyhow::bail!("document not available");
        };

        let Ok(_) = document.set_cookie(&expired_cookie(name)) else {
            anyhow::bail!("failed to expire cookie {name}");
        };

        Ok(())
    }
}

/// Splits a `document.cookie` string into pairs. Browsers join cookies with
/// "; " and never escape '=' in values, so only the first '=' separates.
pub(crate) fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|part| {
            let part = part.trim_start();
            if part.is_empty() {
                return None;
            }
            match part.split_once('=') {
                Some((name, value)) => Some((name.to_owned(), value.to_owned())),
                None => Some((part.to_owned(), String::new())),
            }
        })
        .collect()
}

/// Cookie string that rewrites `name` to an empty value already expired at the
/// Unix epoch, on path "/" so it shadows the original wherever it was set.
pub(crate) fn expired_cookie(name: &str) -> String {
    let epoch = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH;
    format!("{name}=; expires={}; path=/", epoch.format(EXPIRY_FORMAT))
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::CookieJar;

    /// Deterministic jar for tests; expiring a cookie drops it, the way an
    /// expired cookie vanishes from `document.cookie`.
    #[derive(Default)]
    pub(crate) struct MemoryJar {
        cookies: RefCell<BTreeMap<String, String>>,
    }

    impl MemoryJar {
        pub(crate) fn with(pairs: &[(&str, &str)]) -> Self {
            Self {
                cookies: RefCell::new(
                    pairs
                        .iter()
                        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                        .collect(),
                ),
            }
        }
    }

    impl CookieJar for MemoryJar {
        fn get(&self, name: &str) -> Option<String> {
            self.cookies.borrow().get(name).cloned()
        }

        fn names(&self) -> Vec<String> {
            self.cookies.borrow().keys().cloned().collect()
        }

        fn set_expired(&self, name: &str) -> anyhow::Result<()> {
            self.cookies.borrow_mut().remove(name);
            Ok(())
        }
    }
}
