// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the content-building boundary.

/// Errors produced while building toast content.
///
/// Lifecycle operations never fail: racing events (a tap and a timer in the
/// same tick, a second hide) resolve to no-ops. The only recoverable failure is
/// asking for a toast with nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ToastError {
    /// Message, title, and image were all absent.
    #[error("toast has no message, title, or image")]
    MissingContent,
}
