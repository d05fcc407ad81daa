// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cahier-app — Application layer for the Cahier specification composer.
//
// Wires the platform bridge, remote store, session store, and document
// pipeline together for the embedding UI shell. The shell owns rendering and
// navigation; everything stateful lives behind the services in this crate.

pub mod logging;
pub mod services;
pub mod state;

pub use services::app_services::AppServices;
pub use services::preview::PreviewService;
pub use state::PreviewState;
