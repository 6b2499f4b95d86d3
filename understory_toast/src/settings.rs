// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manager-wide defaults and policies.

use core::time::Duration;

use crate::position::Position;
use crate::style::Style;

/// Defaults and policies shared by every host of a [`Toaster`](crate::Toaster).
///
/// The toaster reads these at the moment each operation runs. Changing a
/// setting affects the next operation only: a toast already on screen keeps
/// the duration it was requested with and the timer it already armed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Style used when a request does not carry its own, and for all fades.
    pub style: Style,
    /// Attach a tap recognizer to new toasts; a tap hides the toast.
    pub tap_to_dismiss: bool,
    /// Show one toast at a time per host, queueing the rest in FIFO order.
    ///
    /// When off, toasts are shown immediately and may overlap.
    pub queue_enabled: bool,
    /// Time a toast stays fully visible when the request leaves it unset.
    pub duration: Duration,
    /// Position used when the request leaves it unset.
    pub position: Position,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: Style::default(),
            tap_to_dismiss: true,
            queue_enabled: false,
            duration: Duration::from_secs(3),
            position: Position::Bottom,
        }
    }
}
