// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cahier-session — Authenticated-session state machine and route guard.
//
// The session store owns the signed-in user: it restores the identity from
// key-value storage at startup, accepts sign-in/sign-up/sign-out, and the
// guard module decides which forced navigation (if any) keeps the rest of
// the app behind authentication.

pub mod guard;
pub mod store;

pub use guard::{Location, Redirect};
pub use store::{AuthBackend, AuthState, SessionStore};
