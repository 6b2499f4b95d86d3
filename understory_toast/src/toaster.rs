// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation lifecycle and per-host queues.
//!
//! ## Lifecycle
//!
//! Every toast moves through [`Phase`]s:
//!
//! ```text
//!   request ──► Pending ──(queue head, blocker gone)──┐
//!      │                                              ▼
//!      └──────────(shown immediately)──────────► Appearing ──fade-in done──► Visible
//!                                                     │                         │
//!                                   hide / tap ───────┴──── hide / tap / timer ─┘
//!                                                     ▼
//!                                               Disappearing ──fade-out done──► detached,
//!                                                                               completion,
//!                                                                               queue advances
//! ```
//!
//! ## Dismissal
//!
//! Three independent events can dismiss a toast: its timer, a tap, and an
//! explicit hide. All three go through one internal hide step whose first
//! action is to cancel the armed timer and leave `Visible`. Whichever event
//! arrives second finds the toast already `Disappearing` and does nothing, so
//! the completion runs exactly once.
//!
//! ## Queueing
//!
//! With [`Settings::queue_enabled`], a request that arrives while the host
//! has any active toast waits in a FIFO queue. The head is promoted only from
//! the fade-out completion of a toast, so toast N+1 never starts fading in
//! before toast N is detached.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use kurbo::Point;
use log::{debug, trace, warn};

use crate::activity::ActivityOverlay;
use crate::content::{self, ContentBuilder, ContentNode};
use crate::error::ToastError;
use crate::host::{DismissTimer, Host, HostId, OverlayFlags, Transition};
use crate::position::{Placement, Position};
use crate::settings::Settings;
use crate::store::{Completion, Phase, Store, Toast, ToastId};
use crate::style::Style;

/// Per-host presentation state, created on first use.
#[derive(Debug)]
pub(crate) struct HostState<V> {
    /// Attached toasts in the order they became active.
    pub(crate) active: Vec<ToastId>,
    /// Requests waiting for the host to go idle.
    pub(crate) queue: VecDeque<ToastId>,
    pub(crate) activity: Option<ActivityOverlay<V>>,
}

impl<V> Default for HostState<V> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            queue: VecDeque::new(),
            activity: None,
        }
    }
}

/// How to present an already-built view.
///
/// Unset fields take the toaster's [`Settings`] at the time of the request.
#[derive(Default)]
pub struct ShowOptions {
    /// How long the toast stays visible after fading in.
    pub duration: Option<Duration>,
    /// Where to center the toast.
    pub placement: Option<Placement>,
    completion: Option<Completion>,
}

impl Debug for ShowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShowOptions")
            .field("duration", &self.duration)
            .field("placement", &self.placement)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

impl ShowOptions {
    /// Options that defer everything to the settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visible duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Center on a symbolic position or an explicit point.
    #[must_use]
    pub fn at(mut self, placement: impl Into<Placement>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Run `completion` once the toast has been dismissed and detached.
    ///
    /// The argument is `true` when the toast was dismissed by a tap.
    /// A toast dropped from the queue by [`Toaster::clear_toast_queue`] never
    /// displays and never runs its completion.
    #[must_use]
    pub fn on_completion(mut self, completion: impl FnOnce(bool) + 'static) -> Self {
        self.completion = Some(alloc::boxed::Box::new(completion));
        self
    }
}

/// A request to build and show a toast.
///
/// ```
/// use core::time::Duration;
/// use understory_toast::{Position, ToastRequest};
///
/// let request: ToastRequest<()> = ToastRequest::message("Saved")
///     .title("Export")
///     .position(Position::Top)
///     .duration(Duration::from_secs(1));
/// # let _ = request;
/// ```
pub struct ToastRequest<I> {
    message: Option<String>,
    title: Option<String>,
    image: Option<I>,
    style: Option<Style>,
    options: ShowOptions,
}

impl<I> Default for ToastRequest<I> {
    fn default() -> Self {
        Self {
            message: None,
            title: None,
            image: None,
            style: None,
            options: ShowOptions::default(),
        }
    }
}

impl<I> Debug for ToastRequest<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToastRequest")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("has_image", &self.image.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<I> ToastRequest<I> {
    /// An empty request. Showing it fails with [`ToastError::MissingContent`]
    /// unless a message, title, or image is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request carrying `message`.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the image.
    #[must_use]
    pub fn image(mut self, image: I) -> Self {
        self.image = Some(image);
        self
    }

    /// Style this toast's card instead of using the settings' style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the visible duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.options = self.options.duration(duration);
        self
    }

    /// Center on a symbolic position.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.options = self.options.at(position);
        self
    }

    /// Center on an explicit point in host coordinates.
    #[must_use]
    pub fn point(mut self, point: Point) -> Self {
        self.options = self.options.at(point);
        self
    }

    /// See [`ShowOptions::on_completion`].
    #[must_use]
    pub fn on_completion(mut self, completion: impl FnOnce(bool) + 'static) -> Self {
        self.options = self.options.on_completion(completion);
        self
    }
}

/// Presents toasts and activity overlays on any number of hosts.
///
/// `V` is the toolkit's view handle ([`Host::View`]). One toaster is normally
/// shared by every host of an application so they all see the same
/// [`Settings`]; per-host state is kept in a side table keyed by [`HostId`].
///
/// All methods run on the UI thread. Methods taking a host call into it
/// synchronously; completions from the host come back through
/// [`Toaster::animation_finished`], [`Toaster::timer_fired`], and
/// [`Toaster::toast_tapped`].
pub struct Toaster<V> {
    settings: Settings,
    toasts: Store<V>,
    pub(crate) hosts: BTreeMap<HostId, HostState<V>>,
    pub(crate) next_activity: u64,
}

impl<V> Default for Toaster<V> {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl<V> Debug for Toaster<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Toaster")
            .field("settings", &self.settings)
            .field("toasts", &self.toasts)
            .field("hosts", &self.hosts.len())
            .finish_non_exhaustive()
    }
}

impl<V> Toaster<V> {
    /// Create a toaster with default [`Settings`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toaster with explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            toasts: Store::default(),
            hosts: BTreeMap::new(),
            next_activity: 0,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings. Changes apply from the next operation on.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

impl<V: Copy + Eq + Debug> Toaster<V> {
    /// Build a toast card and show it. See [`Toaster::show_toast`].
    ///
    /// Returns the new view, or `None` when the request had no message, title,
    /// or image. That case is logged and otherwise ignored.
    pub fn make_toast<H>(&mut self, host: &mut H, request: ToastRequest<H::Image>) -> Option<V>
    where
        H: ContentBuilder<View = V>,
    {
        match self.try_make_toast(host, request) {
            Ok(view) => Some(view),
            Err(err) => {
                warn!("toast not shown on {:?}: {err}", host.id());
                None
            }
        }
    }

    /// Like [`Toaster::make_toast`], but reports missing content to the caller.
    pub fn try_make_toast<H>(
        &mut self,
        host: &mut H,
        request: ToastRequest<H::Image>,
    ) -> Result<V, ToastError>
    where
        H: ContentBuilder<View = V>,
    {
        let ToastRequest {
            message,
            title,
            image,
            style,
            options,
        } = request;
        let style = style.unwrap_or(self.settings.style);
        let node = content::build(host, message, title, image, &style)?;
        self.show_toast(host, node, options);
        Ok(node.view)
    }

    /// Show an already-built view.
    ///
    /// The completion is registered right away, whether the toast is shown now
    /// or queued. With queueing enabled and a toast already active on `host`,
    /// the request joins the back of the host's queue; otherwise the view is
    /// attached and starts fading in immediately.
    ///
    /// The anchor is resolved now, against the host's current bounds and the
    /// settings' vertical padding. Showing a view that is already active or
    /// queued on `host` does nothing.
    pub fn show_toast<H>(&mut self, host: &mut H, node: ContentNode<V>, options: ShowOptions)
    where
        H: Host<View = V>,
    {
        let host_id = host.id();
        if self.find(host_id, node.view).is_some() {
            trace!("{:?} is already presented on {host_id:?}", node.view);
            return;
        }
        let ShowOptions {
            duration,
            placement,
            completion,
        } = options;
        let duration = duration.unwrap_or(self.settings.duration);
        let anchor = placement
            .unwrap_or(Placement::Position(self.settings.position))
            .anchor(
                node.size,
                host.bounds(),
                host.safe_area(),
                self.settings.style.vertical_padding,
            );
        let id = self.toasts.insert(Toast {
            host: host_id,
            view: node.view,
            anchor,
            duration,
            phase: Phase::Pending,
            tappable: false,
            timer: None,
            completion,
            tapped: false,
        });

        let state = self.hosts.entry(host_id).or_default();
        if self.settings.queue_enabled && !state.active.is_empty() {
            state.queue.push_back(id);
            debug!(
                "queued {:?} on {host_id:?} ({} pending)",
                node.view,
                state.queue.len()
            );
            return;
        }
        self.enter_appearing(host, id);
    }

    /// Hide the toast that has been active the longest on `host`.
    ///
    /// Does nothing when `host` has no active toast, or when that toast is
    /// already disappearing.
    pub fn hide_oldest_toast<H: Host<View = V>>(&mut self, host: &mut H) {
        let oldest = self
            .hosts
            .get(&host.id())
            .and_then(|state| state.active.first().copied());
        if let Some(id) = oldest {
            self.hide(host, id, false);
        }
    }

    /// Hide `view` if it is an active toast on `host`.
    ///
    /// Queued toasts cannot be hidden this way; use
    /// [`Toaster::clear_toast_queue`]. Hiding a toast twice, or after it
    /// dismissed itself, does nothing.
    pub fn hide_toast<H: Host<View = V>>(&mut self, host: &mut H, view: V) {
        match self.find_active(host.id(), view) {
            Some(id) => self.hide(host, id, false),
            None => trace!("hide of inactive {view:?} ignored"),
        }
    }

    /// Hide every active toast on `host`.
    ///
    /// With `clear_queue`, pending requests are dropped first so the queue
    /// cannot refill the host while the current toasts fade out. With
    /// `include_activity`, the activity overlay is hidden as well.
    pub fn hide_all_toasts<H: Host<View = V>>(
        &mut self,
        host: &mut H,
        include_activity: bool,
        clear_queue: bool,
    ) {
        let host_id = host.id();
        if clear_queue {
            self.clear_toast_queue(host_id);
        }
        let snapshot: Vec<ToastId> = self
            .hosts
            .get(&host_id)
            .map(|state| state.active.clone())
            .unwrap_or_default();
        for id in snapshot {
            self.hide(host, id, false);
        }
        if include_activity {
            self.hide_toast_activity(host);
        }
    }

    /// Drop every pending request on `host` without touching active toasts.
    ///
    /// Dropped requests never display and their completions never run.
    pub fn clear_toast_queue(&mut self, host: HostId) {
        let Some(state) = self.hosts.get_mut(&host) else {
            return;
        };
        let cleared = state.queue.len();
        for id in state.queue.drain(..) {
            self.toasts.remove(id);
        }
        if cleared > 0 {
            debug!("cleared {cleared} pending toasts on {host:?}");
        }
    }

    /// Forget everything about `host`, typically because its container was destroyed.
    ///
    /// Nothing is detached and no completions run. Tokens still in flight for
    /// this host become stale and are ignored.
    pub fn forget_host(&mut self, host: HostId) {
        let Some(state) = self.hosts.remove(&host) else {
            return;
        };
        for id in state.active.into_iter().chain(state.queue) {
            self.toasts.remove(id);
        }
        debug!("forgot {host:?}");
    }

    /// Report that a fade started with [`Host::fade`] has ended.
    pub fn animation_finished<H: Host<View = V>>(&mut self, host: &mut H, transition: Transition) {
        match transition {
            Transition::ToastIn(id) => self.finish_fade_in(host, id),
            Transition::ToastOut(id) => self.finish_fade_out(host, id),
            Transition::ActivityIn(id) => self.finish_activity_in(host.id(), id),
            Transition::ActivityOut(id) => self.finish_activity_out(host, id),
        }
    }

    /// Report that a timer armed with [`Host::start_timer`] has fired.
    pub fn timer_fired<H: Host<View = V>>(&mut self, host: &mut H, timer: DismissTimer) {
        let id = timer.toast();
        let armed = self.toasts.get(id).is_some_and(|toast| {
            toast.host == host.id() && toast.phase == Phase::Visible && toast.timer == Some(timer)
        });
        if !armed {
            trace!("stale {timer:?} ignored");
            return;
        }
        self.hide(host, id, false);
    }

    /// Report a tap on `view`. Hides it if it is an active, tappable toast.
    pub fn toast_tapped<H: Host<View = V>>(&mut self, host: &mut H, view: V) {
        let tappable = self
            .find_active(host.id(), view)
            .filter(|id| self.toasts.get(*id).is_some_and(|toast| toast.tappable));
        match tappable {
            Some(id) => self.hide(host, id, true),
            None => trace!("tap on {view:?} ignored"),
        }
    }

    /// Active toasts on `host`, oldest first.
    pub fn active_toasts(&self, host: HostId) -> impl Iterator<Item = V> + '_ {
        self.hosts
            .get(&host)
            .into_iter()
            .flat_map(|state| state.active.iter())
            .filter_map(|id| self.toasts.get(*id).map(|toast| toast.view))
    }

    /// Number of requests waiting in `host`'s queue.
    pub fn queued_toasts(&self, host: HostId) -> usize {
        self.hosts.get(&host).map_or(0, |state| state.queue.len())
    }

    /// Phase of `view` on `host`, or `None` if it is neither active nor queued there.
    pub fn phase(&self, host: HostId, view: V) -> Option<Phase> {
        let id = self.find(host, view)?;
        self.toasts.get(id).map(|toast| toast.phase)
    }

    // --- internals ---

    fn find_active(&self, host: HostId, view: V) -> Option<ToastId> {
        let state = self.hosts.get(&host)?;
        state
            .active
            .iter()
            .copied()
            .find(|id| self.toasts.get(*id).is_some_and(|toast| toast.view == view))
    }

    fn find(&self, host: HostId, view: V) -> Option<ToastId> {
        let state = self.hosts.get(&host)?;
        state
            .active
            .iter()
            .chain(state.queue.iter())
            .copied()
            .find(|id| self.toasts.get(*id).is_some_and(|toast| toast.view == view))
    }

    fn enter_appearing<H: Host<View = V>>(&mut self, host: &mut H, id: ToastId) {
        let tappable = self.settings.tap_to_dismiss;
        let fade = self.settings.style.fade_duration;
        let Some(toast) = self.toasts.get_mut(id) else {
            return;
        };
        toast.phase = Phase::Appearing;
        toast.tappable = tappable;
        let (view, anchor) = (toast.view, toast.anchor);
        self.hosts.entry(toast.host).or_default().active.push(id);

        let flags = if tappable {
            OverlayFlags::TAPPABLE
        } else {
            OverlayFlags::empty()
        };
        debug!("showing {view:?} on {:?} at {anchor:?}", host.id());
        host.attach(view, anchor, flags);
        host.fade(view, 1.0, fade, Transition::ToastIn(id));
    }

    fn finish_fade_in<H: Host<View = V>>(&mut self, host: &mut H, id: ToastId) {
        let host_id = host.id();
        let Some(toast) = self.toasts.get_mut(id) else {
            trace!("fade-in of terminated {id:?} ignored");
            return;
        };
        // A toast hidden mid-fade is already disappearing; it must not arm a timer.
        if toast.host != host_id || toast.phase != Phase::Appearing {
            trace!("fade-in of {:?} in {:?} ignored", toast.view, toast.phase);
            return;
        }
        let timer = DismissTimer(id);
        toast.phase = Phase::Visible;
        toast.timer = Some(timer);
        host.start_timer(toast.duration, timer);
    }

    /// The single hide path shared by explicit hides, taps, and timers.
    fn hide<H: Host<View = V>>(&mut self, host: &mut H, id: ToastId, tapped: bool) {
        let fade = self.settings.style.fade_duration;
        let Some(toast) = self.toasts.get_mut(id) else {
            return;
        };
        if toast.host != host.id() || !matches!(toast.phase, Phase::Appearing | Phase::Visible) {
            trace!("hide of {:?} in {:?} ignored", toast.view, toast.phase);
            return;
        }
        if let Some(timer) = toast.timer.take() {
            host.cancel_timer(timer);
        }
        toast.phase = Phase::Disappearing;
        toast.tapped = tapped;
        debug!("hiding {:?} (tapped: {tapped})", toast.view);
        host.fade(toast.view, 0.0, fade, Transition::ToastOut(id));
    }

    fn finish_fade_out<H: Host<View = V>>(&mut self, host: &mut H, id: ToastId) {
        let host_id = host.id();
        let disappearing = self
            .toasts
            .get(id)
            .is_some_and(|toast| toast.host == host_id && toast.phase == Phase::Disappearing);
        if !disappearing {
            trace!("fade-out of {id:?} ignored");
            return;
        }
        let Some(toast) = self.toasts.remove(id) else {
            return;
        };
        host.detach(toast.view);
        let next = self.hosts.get_mut(&host_id).and_then(|state| {
            state.active.retain(|active| *active != id);
            state.queue.pop_front()
        });
        debug!("{:?} dismissed on {host_id:?}", toast.view);
        if let Some(completion) = toast.completion {
            completion(toast.tapped);
        }
        if let Some(next) = next {
            debug!("promoting queued toast on {host_id:?}");
            self.enter_appearing(host, next);
        }
    }
}
