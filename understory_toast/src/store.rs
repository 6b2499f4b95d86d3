// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side table of toast records, addressed by generational [`ToastId`]s.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;

use crate::host::{DismissTimer, HostId};

/// Identifier of one toast, from request to termination.
///
/// This is a small, copyable handle. It consists of a slot index and a
/// generation counter.
///
/// ## Semantics
///
/// - On request, a slot is allocated; a fresh slot starts at generation `1`.
/// - On termination (or when a pending toast is cleared from its queue), the
///   slot is freed and any existing `ToastId` for it becomes stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `ToastId`.
///
/// Stale ids never alias a newer toast, so tokens carrying them
/// ([`Transition`](crate::Transition), [`DismissTimer`]) can be delivered late
/// without touching the wrong toast.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ToastId(u32, u32);

impl ToastId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of one activity overlay instance.
///
/// Allocated from a counter that never repeats within a toaster.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActivityId(pub(crate) u64);

/// Presentation state of a toast.
///
/// `Pending → Appearing → Visible → Disappearing`, after which the record is
/// discarded. A toast may also go `Appearing → Disappearing` when hidden
/// before its fade-in completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Queued, not attached.
    Pending,
    /// Attached, fading in.
    Appearing,
    /// Fade-in complete, dismissal timer armed.
    Visible,
    /// Fading out; the timer is cancelled.
    Disappearing,
}

/// Callback run once when a toast is gone. The flag is `true` when a tap dismissed it.
pub type Completion = Box<dyn FnOnce(bool)>;

pub(crate) struct Toast<V> {
    pub(crate) host: HostId,
    pub(crate) view: V,
    pub(crate) anchor: Point,
    pub(crate) duration: Duration,
    pub(crate) phase: Phase,
    /// Whether taps were enabled when the toast was attached.
    pub(crate) tappable: bool,
    pub(crate) timer: Option<DismissTimer>,
    pub(crate) completion: Option<Completion>,
    pub(crate) tapped: bool,
}

impl<V: core::fmt::Debug> core::fmt::Debug for Toast<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Toast")
            .field("host", &self.host)
            .field("view", &self.view)
            .field("phase", &self.phase)
            .field("duration", &self.duration)
            .field("has_completion", &self.completion.is_some())
            .finish_non_exhaustive()
    }
}

/// Generational slots of toast records.
pub(crate) struct Store<V> {
    slots: Vec<Option<Toast<V>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<V> core::fmt::Debug for Store<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Store")
            .field("slots_total", &total)
            .field("slots_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish()
    }
}

impl<V> Store<V> {
    pub(crate) fn insert(&mut self, toast: Toast<V>) -> ToastId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(toast);
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(toast));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ToastId uses 32-bit indices."
        )]
        let idx = idx as u32;
        ToastId::new(idx, generation)
    }

    pub(crate) fn remove(&mut self, id: ToastId) -> Option<Toast<V>> {
        if !self.is_alive(id) {
            return None;
        }
        let toast = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        toast
    }

    pub(crate) fn is_alive(&self, id: ToastId) -> bool {
        self.slots.get(id.idx()).is_some_and(Option::is_some)
            && self.generations[id.idx()] == id.1
    }

    pub(crate) fn get(&self, id: ToastId) -> Option<&Toast<V>> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast<V>> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_mut()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
