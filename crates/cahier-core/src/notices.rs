// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing notices for failed operations.
//
// Failures never navigate the user away from the current screen; they are
// shown as a lightweight inline notice. This module maps every technical
// error to plain language with a clear suggestion.

use crate::error::CahierError;

/// An inline notice with a plain-language message and an actionable
/// suggestion.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Plain-language summary (shown as the notice heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether trying the same action again can reasonably succeed.
    pub retriable: bool,
}

/// Convert a `CahierError` into the notice shown on the current screen.
pub fn notice_for(err: &CahierError) -> Notice {
    match err {
        CahierError::Store(detail) => {
            if detail.contains("timed out") || detail.contains("connect") {
                Notice {
                    message: "We couldn't reach the specification server.".into(),
                    suggestion: "Check your connection, then try again.".into(),
                    retriable: true,
                }
            } else {
                Notice {
                    message: "The specification server had a problem.".into(),
                    suggestion: format!("Try again in a moment. ({detail})"),
                    retriable: true,
                }
            }
        }

        CahierError::Pdf(_) => Notice {
            message: "The PDF couldn't be generated.".into(),
            suggestion: "Go back, check the form content, and try again.".into(),
            retriable: false,
        },

        CahierError::Export(_) => Notice {
            message: "The document couldn't be saved to your device.".into(),
            suggestion: "Your storage may be full. Free up some space and try again.".into(),
            retriable: true,
        },

        CahierError::SessionStorage(_) => Notice {
            message: "Your session couldn't be stored.".into(),
            suggestion: "You may need to sign in again next time you open the app.".into(),
            retriable: true,
        },

        CahierError::Registration(_) => Notice {
            message: "Failed to sign up. Please try again.".into(),
            suggestion: "Check the details you entered and your connection.".into(),
            retriable: true,
        },

        CahierError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                Notice {
                    message: "The app doesn't have permission to write that file.".into(),
                    suggestion: "Check the app's storage permissions, then try again.".into(),
                    retriable: false,
                }
            } else {
                Notice {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                }
            }
        }

        CahierError::Serialization(_) => Notice {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
        },

        CahierError::PlatformUnavailable => Notice {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Sharing and printing need platform support that this device lacks.".into(),
            retriable: false,
        },
    }
}
