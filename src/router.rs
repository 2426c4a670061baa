//! Path routing with the session guard.

use std::fmt;

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Home => "/home",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Landing),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/home" => Some(Route::Home),
            _ => None,
        }
    }

    /// Whether the route needs a confirmed session.
    pub fn is_guarded(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    /// Go to `to` instead. `from` is the guarded route that was refused, so
    /// login can send the user back to it.
    Redirect { to: Route, from: Option<Route> },
}

pub fn resolve(path: &str, session: &Session) -> Resolution {
    let Some(route) = Route::from_path(path) else {
        tracing::debug!(%path, "unknown path");
        return Resolution::Redirect {
            to: Route::Landing,
            from: None,
        };
    };

    if route.is_guarded() && !session.is_authenticated() {
        return Resolution::Redirect {
            to: Route::Login,
            from: Some(route),
        };
    }

    Resolution::Render(route)
}

/// Where to go after a successful login.
pub fn after_login(from: Option<Route>) -> Route {
    match from {
        Some(route) if route.is_guarded() => route,
        _ => Route::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AccessToken;

    fn sessions() -> (tempfile::TempDir, Session, Session) {
        let dir = tempfile::tempdir().unwrap();
        let anonymous = Session::load(dir.path().join("a.json"));
        let mut signed_in = Session::load(dir.path().join("b.json"));
        signed_in.store_token(AccessToken::new("tok")).unwrap();
        (dir, anonymous, signed_in)
    }

    #[test]
    fn test_public_routes_render() {
        let (_dir, anonymous, _) = sessions();
        assert_eq!(resolve("/", &anonymous), Resolution::Render(Route::Landing));
        assert_eq!(resolve("/login", &anonymous), Resolution::Render(Route::Login));
        assert_eq!(resolve("/signup/", &anonymous), Resolution::Render(Route::Signup));
    }

    #[test]
    fn test_home_is_guarded() {
        let (_dir, anonymous, signed_in) = sessions();
        assert_eq!(
            resolve("/home", &anonymous),
            Resolution::Redirect {
                to: Route::Login,
                from: Some(Route::Home),
            }
        );
        assert_eq!(resolve("/home", &signed_in), Resolution::Render(Route::Home));
    }

    #[test]
    fn test_unverified_token_is_not_enough() {
        let (dir, _, _) = sessions();
        let reloaded = Session::load(dir.path().join("b.json"));
        assert!(reloaded.has_token());
        assert!(matches!(resolve("/home", &reloaded), Resolution::Redirect { .. }));
    }

    #[test]
    fn test_unknown_paths_redirect_to_landing() {
        let (_dir, _, signed_in) = sessions();
        assert_eq!(
            resolve("/nowhere", &signed_in),
            Resolution::Redirect {
                to: Route::Landing,
                from: None,
            }
        );
    }

    #[test]
    fn test_after_login() {
        assert_eq!(after_login(Some(Route::Home)), Route::Home);
        assert_eq!(after_login(Some(Route::Signup)), Route::Home);
        assert_eq!(after_login(None), Route::Home);
    }
}
