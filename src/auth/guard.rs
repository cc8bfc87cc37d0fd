//! Route guard — pure render/redirect decision per navigation.

use serde::{Deserialize, Serialize};

use crate::prefs::AuthFlags;

/// Per-route guard configuration. Protected screens use the defaults; public
/// screens (login/signup) set `require_auth = false`, and the onboarding
/// screen sets `require_onboarding = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    pub require_auth: bool,
    pub require_onboarding: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            require_onboarding: true,
        }
    }
}

impl RouteConfig {
    /// A public-only route (login/signup).
    pub fn public() -> Self {
        Self {
            require_auth: false,
            require_onboarding: false,
        }
    }

    /// Requires auth but not a completed onboarding (the onboarding screen).
    pub fn auth_only() -> Self {
        Self {
            require_auth: true,
            require_onboarding: false,
        }
    }
}

/// Navigation targets the guard can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    Login,
    Onboarding,
    Home,
}

impl NavTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Onboarding => "/onboarding",
            Self::Home => "/",
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested screen.
    Render,
    /// Redirect instead. `from` carries the originally requested location for
    /// post-login/post-onboarding return; redirects away from public screens
    /// replace the location and carry nothing.
    Redirect {
        to: NavTarget,
        from: Option<String>,
    },
}

/// Decide whether a navigation may render, purely from the flags and the
/// route's config. Rules are checked in order:
///
/// 1. auth required, not logged in → login (carrying the requested location);
/// 2. auth + onboarding required, logged in but not onboarded → onboarding;
/// 3. public-only route while logged in → home if onboarded, else onboarding;
/// 4. otherwise render.
///
/// No side effects; callers read the flags fresh for every evaluation.
pub fn evaluate(flags: AuthFlags, config: RouteConfig, requested: &str) -> RouteDecision {
    if config.require_auth && !flags.is_logged_in {
        return RouteDecision::Redirect {
            to: NavTarget::Login,
            from: Some(requested.to_string()),
        };
    }

    if config.require_auth
        && config.require_onboarding
        && flags.is_logged_in
        && !flags.has_completed_onboarding
    {
        return RouteDecision::Redirect {
            to: NavTarget::Onboarding,
            from: Some(requested.to_string()),
        };
    }

    if !config.require_auth && flags.is_logged_in {
        let to = if flags.has_completed_onboarding {
            NavTarget::Home
        } else {
            NavTarget::Onboarding
        };
        return RouteDecision::Redirect { to, from: None };
    }

    RouteDecision::Render
}
