// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cahier-store — Remote persistence for specification records.

pub mod client;

pub use client::{HttpSpecificationStore, SpecificationStore};
