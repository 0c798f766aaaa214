use crate::router::Route;
use crate::session::cookies::CookieJar;

/// Ends the session by expiring every cookie the jar can enumerate, the
/// authentication cookie included, and names the route to land on afterwards.
/// Already-expired cookies are not enumerable, so running this twice is a
/// no-op.
pub fn terminate(jar: &impl CookieJar) -> anyhow::Result<Route> {
    for name in jar.names() {
        jar.set_expired(&name)?;
    }

    Ok(Route::Home {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::cookies::{self, memory::MemoryJar};

    #[test]
    fn expires_every_cookie_and_lands_on_home() {
        let jar = MemoryJar::with(&[("auth", "1"), ("foo", "2")]);

        let landing = terminate(&jar).unwrap();

        assert_eq!(landing, Route::Home {});
        assert_eq!(jar.get("auth"), None);
        assert_eq!(jar.get("foo"), None);
        assert!(jar.names().is_empty());
        assert!(!cookies::is_authenticated(&jar));
    }

    #[test]
    fn terminating_twice_is_harmless() {
        let jar = MemoryJar::with(&[("auth", "1")]);

        terminate(&jar).unwrap();
        let landing = terminate(&jar).unwrap();

        assert_eq!(landing, Route::Home {});
        assert!(jar.names().is_empty());
    }

    #[test]
    fn an_empty_jar_still_lands_on_home() {
        assert_eq!(terminate(&MemoryJar::default()).unwrap(), Route::Home {});
    }
}
