/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated visitors land when they open a login/register page.
pub const LANDING_PATH: &str = "/dashboard";

/// Static route classification consulted by the session guard.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    pub public_prefixes: &'static [&'static str],
    pub protected_prefix: &'static str,
    /// The guard never runs for these: static assets and our own API namespace.
    pub excluded_prefixes: &'static [&'static str],
}

impl RouteTable {
    pub const STANDARD: RouteTable = RouteTable {
        public_prefixes: &["/login", "/register"],
        protected_prefix: "/dashboard",
        excluded_prefixes: &["/api", "/static", "/favicon.ico"],
    };

    pub fn is_guarded(&self, path: &str) -> bool {
        !self
            .excluded_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }

    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(self.protected_prefix)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
