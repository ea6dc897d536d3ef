//! Style snapshot delivery.
//!
//! `StyleHub` is the publisher side of the user-style stream. Every subscriber
//! owns a small mailbox; the renderer drains its mailbox at the start of a frame,
//! so snapshots are applied on the render context, in order, once each.
//!
//! A full mailbox folds its oldest entry into the next one: the snapshot itself
//! is superseded, but its complication theme rides along so the renderer still
//! sees every color the publisher went through.
//!
//! All hub state sits behind a `critical_section::Mutex`, so publishing from an
//! interrupt handler or another task is fine and the hub can live in a `static`.

extern crate alloc;

use alloc::sync::Arc;
use core::cell::RefCell;
use critical_section::Mutex;
use heapless::{Deque, Vec};

use crate::config::{MAILBOX_DEPTH, MAX_SUBSCRIBERS};
use crate::style::{ColorStyleId, ComplicationTheme, StyleAndDimensions};

pub type Snapshot = Arc<StyleAndDimensions>;

/// One folded theme per color id at most.
const FOLD_DEPTH: usize = ColorStyleId::ALL.len();

/// A snapshot as it comes out of a mailbox.
#[derive(Clone, Debug)]
pub struct Delivery {
    pub snapshot: Snapshot,
    folded: Vec<ComplicationTheme, FOLD_DEPTH>,
}

impl Delivery {
    fn new(snapshot: Snapshot) -> Self {
        Delivery { snapshot, folded: Vec::new() }
    }

    /// Themes of older snapshots that were folded into this one, oldest first.
    /// A color id appears once, at its latest position.
    pub fn folded_themes(&self) -> &[ComplicationTheme] {
        &self.folded
    }

    /// Take over the themes `older` would have delivered.
    fn absorb(&mut self, older: Delivery) {
        let mut carried = older.folded;
        note_theme(&mut carried, older.snapshot.active.complication);
        for theme in self.folded.iter() {
            note_theme(&mut carried, *theme);
        }
        self.folded = carried;
    }
}

fn note_theme(themes: &mut Vec<ComplicationTheme, FOLD_DEPTH>, theme: ComplicationTheme) {
    if let Some(pos) = themes.iter().position(|t| t.id == theme.id) {
        themes.remove(pos);
    }
    // never full: one entry per color id
    themes.push(theme).ok();
}

#[derive(Debug, PartialEq, Eq)]
pub enum FeedError {
    SubscribersFull,
}

struct Mailbox {
    id: u32,
    pending: Deque<Delivery, MAILBOX_DEPTH>,
}

struct HubState {
    mailboxes: Vec<Mailbox, MAX_SUBSCRIBERS>,
    latest: Option<Snapshot>,
    next_id: u32,
}

pub struct StyleHub {
    state: Mutex<RefCell<HubState>>,
}

impl StyleHub {
    pub const fn new() -> Self {
        StyleHub {
            state: Mutex::new(RefCell::new(HubState {
                mailboxes: Vec::new(),
                latest: None,
                next_id: 0,
            })),
        }
    }

    /// Deliver a new snapshot to every subscriber.
    pub fn publish(&self, data: StyleAndDimensions) {
        debug_assert!(data.is_finite(), "non-finite value in style snapshot");
        let snapshot = Arc::new(data);

        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            for mb in state.mailboxes.iter_mut() {
                let mut delivery = Delivery::new(snapshot.clone());
                if mb.pending.is_full() {
                    if let Some(oldest) = mb.pending.pop_front() {
                        log::warn!("style mailbox {} full, folding oldest snapshot", mb.id);
                        match mb.pending.front_mut() {
                            Some(next) => next.absorb(oldest),
                            None => delivery.absorb(oldest),
                        }
                    }
                }
                mb.pending.push_back(delivery).ok();
            }
            state.latest = Some(snapshot);
        });
    }

    /// Most recently published snapshot, if any.
    pub fn latest(&self) -> Option<Snapshot> {
        critical_section::with(|cs| self.state.borrow_ref(cs).latest.clone())
    }

    /// Register a subscriber. The current snapshot, if one exists, is queued for it
    /// right away.
    pub fn subscribe(&self) -> Result<Subscription<'_>, FeedError> {
        let id = critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let id = state.next_id;

            let mut mb = Mailbox { id, pending: Deque::new() };
            if let Some(latest) = state.latest.clone() {
                mb.pending.push_back(Delivery::new(latest)).ok();
            }
            state.mailboxes.push(mb).map_err(|_| FeedError::SubscribersFull)?;
            state.next_id = id.wrapping_add(1);
            Ok(id)
        })?;

        log::info!("style subscriber {} attached", id);
        Ok(Subscription { hub: self, id })
    }

    pub fn subscriber_count(&self) -> usize {
        critical_section::with(|cs| self.state.borrow_ref(cs).mailboxes.len())
    }

    fn unsubscribe(&self, id: u32) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            if let Some(pos) = state.mailboxes.iter().position(|mb| mb.id == id) {
                state.mailboxes.swap_remove(pos);
            }
        });
        log::info!("style subscriber {} detached", id);
    }

    fn next_for(&self, id: u32) -> Option<Delivery> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let next = state
                .mailboxes
                .iter_mut()
                .find(|mb| mb.id == id)
                .and_then(|mb| mb.pending.pop_front());
            next
        })
    }
}

impl Default for StyleHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Live registration on a `StyleHub`; unsubscribes when dropped.
pub struct Subscription<'h> {
    hub: &'h StyleHub,
    id: u32,
}

impl Subscription<'_> {
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Oldest undelivered snapshot.
    pub fn try_next(&self) -> Option<Delivery> {
        self.hub.next_for(self.id)
    }
}

impl Drop for Subscription<'_> {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
