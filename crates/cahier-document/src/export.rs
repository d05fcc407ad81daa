// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export file naming.

use chrono::{DateTime, Utc};

/// Derive the export file name for a specification.
///
/// Whitespace runs in the project name collapse to single underscores, and a
/// timestamp token keeps repeated exports of the same project from
/// colliding.
pub fn export_file_name(project_name: &str, exported_at: DateTime<Utc>) -> String {
    let base: String = project_name.split_whitespace().collect::<Vec<_>>().join("_");
    let base = if base.is_empty() {
        "specification".to_string()
    } else {
        base
    };
    format!("{}_{}.pdf", base, exported_at.format("%Y%m%d%H%M%S"))
}
