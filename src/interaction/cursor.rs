use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use super::{gesture::PointerKind, particle::GLYPHS, pick};

/// Elements that make the follow cursor grow.
pub const HOT_SELECTOR: &str = "a, button, [data-cursor=\"link\"]";

type Waker = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct SlotState {
    taken: AtomicBool,
    waiters: Mutex<Vec<Waker>>,
}

/// The single place a follow cursor may render into.
///
/// Provided once through context; whichever cursor claims it first owns it
/// until its claim is dropped. Cursors that lose the race can register a
/// waker and try again once the owner lets go.
#[derive(Clone, Default)]
pub struct CursorSlot {
    state: Arc<SlotState>,
}

impl fmt::Debug for CursorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorSlot")
            .field("taken", &self.is_taken())
            .finish_non_exhaustive()
    }
}

impl CursorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&self) -> Option<CursorClaim> {
        self.state
            .taken
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CursorClaim {
                state: self.state.clone(),
            })
    }

    /// Claims the slot, or queues `wake` to run on the next release.
    pub fn claim_or_wait(&self, wake: impl FnOnce() + Send + 'static) -> Option<CursorClaim> {
        if let Some(claim) = self.claim() {
            return Some(claim);
        }
        if let Ok(mut waiters) = self.state.waiters.lock() {
            waiters.push(Box::new(wake));
        }
        // released between the failed claim and the push
        if !self.is_taken() {
            self.state.wake_all();
        }
        None
    }

    pub fn is_taken(&self) -> bool {
        self.state.taken.load(Ordering::Acquire)
    }
}

impl SlotState {
    fn wake_all(&self) {
        let waiters = match self.waiters.lock() {
            Ok(mut waiters) => std::mem::take(&mut *waiters),
            Err(_) => return,
        };
        for wake in waiters {
            wake();
        }
    }
}

/// Ownership of a [`CursorSlot`]; released on drop, waking any waiters.
pub struct CursorClaim {
    state: Arc<SlotState>,
}

impl fmt::Debug for CursorClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CursorClaim")
    }
}

impl Drop for CursorClaim {
    fn drop(&mut self) {
        self.state.taken.store(false, Ordering::Release);
        self.state.wake_all();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorVariant {
    Emoji(&'static str),
    Dot,
    Ring,
    Blob,
    Server,
}

impl CursorVariant {
    /// Picks one of the playful variants.
    pub fn roll(rng: &mut impl FnMut() -> f64) -> Self {
        let variants = [Self::Emoji(""), Self::Dot, Self::Ring, Self::Blob];
        match *pick(&variants, rng()) {
            Self::Emoji(_) => Self::Emoji(*pick(&GLYPHS, rng())),
            other => other,
        }
    }
}

/// What to do with the pending auto-hide timer after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideTimer {
    Keep,
    Cancel,
    Restart(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceConfig {
    pub idle_hide_ms: u32,
    pub touch_release_hide_ms: u32,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            idle_hide_ms: 1400,
            touch_release_hide_ms: 400,
        }
    }
}

/// Visible/active state of a follow cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPresence {
    config: PresenceConfig,
    pub visible: bool,
    pub active: bool,
    last_kind: Option<PointerKind>,
}

impl CursorPresence {
    pub fn new(config: PresenceConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn last_kind(&self) -> Option<PointerKind> {
        self.last_kind
    }

    pub fn on_move(&mut self, kind: PointerKind) -> HideTimer {
        self.last_kind = Some(kind);
        self.visible = true;
        HideTimer::Restart(self.config.idle_hide_ms)
    }

    pub fn on_down(&mut self) -> HideTimer {
        self.active = true;
        self.visible = true;
        HideTimer::Cancel
    }

    pub fn on_up(&mut self) -> HideTimer {
        self.active = false;
        if self.last_kind == Some(PointerKind::Touch) {
            HideTimer::Restart(self.config.touch_release_hide_ms)
        } else {
            HideTimer::Keep
        }
    }

    pub fn on_leave(&mut self) {
        if self.last_kind == Some(PointerKind::Mouse) {
            self.visible = false;
        }
    }

    pub fn on_hide_elapsed(&mut self) {
        self.visible = false;
    }
}
