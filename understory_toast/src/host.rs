// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between the toaster and the UI toolkit that hosts it.
//!
//! ## Overview
//!
//! A [`Host`] is one container that can show toasts: it knows its bounds and
//! safe area, attaches and detaches overlay views, runs opacity tweens, and
//! runs one-shot timers. It does not know anything about queues or dismissal.
//!
//! ## Event delivery
//!
//! Long-running work is never awaited. When the toaster starts a fade or arms
//! a timer it hands the host a token ([`Transition`] or [`DismissTimer`]) that
//! names exactly one toast or activity overlay. When the work completes, the
//! toolkit's event loop passes the token back:
//!
//! - fade finished → [`Toaster::animation_finished`](crate::Toaster::animation_finished)
//! - timer expired → [`Toaster::timer_fired`](crate::Toaster::timer_fired)
//! - tap recognized on a [`OverlayFlags::TAPPABLE`] view → [`Toaster::toast_tapped`](crate::Toaster::toast_tapped)
//!
//! Tokens are single-use. A token whose target has moved on (cancelled timer,
//! toast already hidden, host forgotten) is ignored, so the event loop may
//! deliver them late or twice without harm.
//!
//! Callbacks must be delivered from the event loop, never from inside a
//! [`Host`] method: the toaster is mutably borrowed for the duration of every
//! call into the host.

use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Insets, Point, Rect};

use crate::store::{ActivityId, ToastId};

/// Stable identity of a host container.
///
/// The toaster keeps per-host state keyed by this value; two hosts must never
/// report the same id while both are alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostId(pub u64);

bitflags::bitflags! {
    /// How an overlay view should behave once attached.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct OverlayFlags: u8 {
        /// Install a tap recognizer and report taps via `Toaster::toast_tapped`.
        const TAPPABLE = 0b0000_0001;
        /// The view is an activity indicator; it ignores user interaction.
        const ACTIVITY = 0b0000_0010;
    }
}

/// Completion token for an opacity tween started with [`Host::fade`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// A toast finished fading in.
    ToastIn(ToastId),
    /// A toast finished fading out.
    ToastOut(ToastId),
    /// An activity overlay finished fading in.
    ActivityIn(ActivityId),
    /// An activity overlay finished fading out.
    ActivityOut(ActivityId),
}

/// Token of a one-shot dismissal timer; each toast arms at most one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DismissTimer(pub(crate) ToastId);

impl DismissTimer {
    /// The toast this timer dismisses.
    pub fn toast(self) -> ToastId {
        self.0
    }
}

/// A container that can present overlay views.
pub trait Host {
    /// Toolkit handle of a view. Copyable and comparable so the toaster can
    /// find toasts by view.
    type View: Copy + Eq + Debug;

    /// Identity of this container.
    fn id(&self) -> HostId;

    /// Bounds of the container in its own coordinate space.
    fn bounds(&self) -> Rect;

    /// Safe-area exclusion zones. Hosts without a safe area keep the default.
    fn safe_area(&self) -> Insets {
        Insets::ZERO
    }

    /// Attach `view` centered on `center`, fully transparent, on top of existing content.
    fn attach(&mut self, view: Self::View, center: Point, flags: OverlayFlags);

    /// Detach `view`. Detaching a view that is not attached does nothing.
    fn detach(&mut self, view: Self::View);

    /// Start tweening `view`'s opacity to `to` over `duration`.
    ///
    /// When the tween ends, deliver `transition` to
    /// [`Toaster::animation_finished`](crate::Toaster::animation_finished).
    fn fade(&mut self, view: Self::View, to: f64, duration: Duration, transition: Transition);

    /// Arm a one-shot timer.
    ///
    /// After `delay`, deliver `timer` to [`Toaster::timer_fired`](crate::Toaster::timer_fired).
    /// A zero delay fires on a later turn of the event loop, never synchronously.
    fn start_timer(&mut self, delay: Duration, timer: DismissTimer);

    /// Cancel a timer. Cancelling a timer that already fired or was already
    /// cancelled does nothing.
    fn cancel_timer(&mut self, timer: DismissTimer);
}
