//! Page route classification and the guard's redirect decision.
//!
//! The guard sees only two inputs per request: the path and whether a valid
//! session is present. Everything here is pure so the decision table can be
//! tested without a server.

/// Landing page for authenticated users leaving an auth-only page.
pub const DEFAULT_AUTHENTICATED_LANDING: &str = "/dashboard";

/// Where anonymous users are sent from protected pages.
pub const LOGIN_PATH: &str = "/login";

pub const DEFAULT_PROTECTED_ROUTES: &[&str] = &[
    "/dashboard",
    "/income",
    "/expenses",
    "/budget",
    "/reports",
    "/profile",
];
pub const DEFAULT_PUBLIC_ROUTES: &[&str] = &["/login", "/signup", "/"];
pub const DEFAULT_AUTH_ROUTES: &[&str] = &["/login", "/signup"];

/// Path prefixes the guard never inspects (API calls, health, static assets).
const UNGUARDED_PREFIXES: &[&str] = &["/api", "/health", "/assets", "/_next"];

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a valid session.
    Protected,
    /// Only meaningful without a session (login, signup).
    AuthOnly,
    /// Explicitly listed as public.
    Public,
    /// Anything else.
    Other,
}

/// What the guard does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// The three configured route lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub protected: Vec<String>,
    pub public: Vec<String>,
    pub auth_only: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            protected: to_owned_list(DEFAULT_PROTECTED_ROUTES),
            public: to_owned_list(DEFAULT_PUBLIC_ROUTES),
            auth_only: to_owned_list(DEFAULT_AUTH_ROUTES),
        }
    }
}

impl RouteTable {
    /// Classify `path` into exactly one [`RouteClass`].
    ///
    /// Protected and auth-only routes match on segment-aligned prefixes;
    /// public routes match exactly. Protected takes precedence.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.protected.iter().any(|r| matches_prefix(path, r)) {
            RouteClass::Protected
        } else if self.auth_only.iter().any(|r| matches_prefix(path, r)) {
            RouteClass::AuthOnly
        } else if self.public.iter().any(|r| r == path) {
            RouteClass::Public
        } else {
            RouteClass::Other
        }
    }

    /// Classify and decide in one step.
    pub fn decide(&self, path: &str, has_session: bool) -> GuardDecision {
        decide(self.classify(path), has_session)
    }
}

/// The guard's transition table.
pub fn decide(class: RouteClass, has_session: bool) -> GuardDecision {
    match (class, has_session) {
        (RouteClass::Protected, false) => GuardDecision::Redirect(LOGIN_PATH.to_string()),
        (RouteClass::AuthOnly, true) => {
            GuardDecision::Redirect(DEFAULT_AUTHENTICATED_LANDING.to_string())
        }
        _ => GuardDecision::Allow,
    }
}

/// Whether the guard should run for `path` at all.
pub fn is_guarded_path(path: &str) -> bool {
    if UNGUARDED_PREFIXES.iter().any(|p| matches_prefix(path, p)) {
        return false;
    }
    !path.ends_with(".png")
}

/// Parse a comma-separated route list, dropping blanks.
pub fn parse_route_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `/dashboard` matches `/dashboard` and `/dashboard/...` but not `/dashboardx`.
fn matches_prefix(path: &str, route: &str) -> bool {
    if route == "/" {
        return path == "/";
    }
    match path.strip_prefix(route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn to_owned_list(routes: &[&str]) -> Vec<String> {
    routes.iter().map(|r| (*r).to_string()).collect()
}
