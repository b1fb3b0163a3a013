//! Client routes known to the auth flow.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Every route the UI can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Private,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Private => "/private",
        }
    }

    /// Match a location path. A trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/private" => Some(Self::Private),
            _ => None,
        }
    }

    /// Only the private view is gated on a token.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Private)
    }
}
