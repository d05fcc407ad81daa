// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Route guard — the redirect policy keeping the app surface behind sign-in.
//
// The decision is a pure function of the auth state and the current
// location, so the embedding shell can re-evaluate it whenever either input
// changes, independent of any rendering framework.

use crate::store::AuthState;

/// First path segment of the authentication area.
pub const AUTH_SEGMENT: &str = "auth";
/// Where unauthenticated users are sent.
pub const LOGIN_ROUTE: &str = "/auth/login";
/// Where authenticated users are sent when they wander into the auth area.
pub const HOME_ROUTE: &str = "/home";

/// Current navigation location, split into path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// Parse a path like "/auth/login" into segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Whether this location is inside the authentication area.
    pub fn in_auth_area(&self) -> bool {
        self.segments.first().is_some_and(|s| s == AUTH_SEGMENT)
    }
}

/// A forced navigation issued by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// To the login entry point.
    Login,
    /// To the authenticated home entry point.
    Home,
}

impl Redirect {
    /// Navigation target path.
    pub fn target(self) -> &'static str {
        match self {
            Self::Login => LOGIN_ROUTE,
            Self::Home => HOME_ROUTE,
        }
    }
}

/// Evaluate the guard for a state/location pair.
///
/// No redirect is ever issued before the startup session restore resolves
/// (`Unknown`) or while a transition is in flight (`Loading`).
pub fn evaluate(state: &AuthState, location: &Location) -> Option<Redirect> {
    match state {
        AuthState::Unknown | AuthState::Loading => None,
        AuthState::Unauthenticated if !location.in_auth_area() => Some(Redirect::Login),
        AuthState::Authenticated(_) if location.in_auth_area() => Some(Redirect::Home),
        _ => None,
    }
}
