//! Section navigation controller
//!
//! Single writer for the navigation state. Two update channels feed the same
//! state with different policies:
//!
//! - `request_navigate` — programmatic navigation, mutually exclusive during
//!   the cooldown window (drop-while-busy, never queued)
//! - `report_visible_section` — passive resync from viewport visibility,
//!   never blocked, never starts a cooldown
//!
//! The cooldown is a single owned, cancelable timer. A generation counter
//! keeps a stale timer from mutating state after early completion,
//! reconfiguration, or teardown.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::command::NavCommand;
use crate::error::NavError;
use crate::section::SectionId;
use crate::Result;

/// Default cooldown after a programmatic navigation, in milliseconds
pub const DEFAULT_COOLDOWN_MS: u64 = 1000;

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Ordered, fixed set of navigable sections
    pub section_ids: Vec<SectionId>,
    /// Section active at startup
    #[serde(default)]
    pub initial_index: usize,
    /// Cooldown window after a programmatic navigation
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

impl NavConfig {
    pub fn new(section_ids: Vec<SectionId>) -> Self {
        Self {
            section_ids,
            initial_index: 0,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.section_ids.is_empty() {
            return Err(NavError::EmptySections);
        }
        if self.initial_index >= self.section_ids.len() {
            return Err(NavError::InitialIndexOutOfRange {
                index: self.initial_index,
                len: self.section_ids.len(),
            });
        }
        Ok(())
    }
}

/// Snapshot of the navigation state handed to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub active_index: usize,
    pub transitioning: bool,
}

type Listener = Arc<dyn Fn(NavState) + Send + Sync>;

struct Inner {
    sections: Vec<SectionId>,
    active_index: usize,
    transitioning: bool,
    cooldown: Duration,
    /// Bumped whenever a pending cooldown becomes stale
    epoch: u64,
    cooldown_task: Option<AbortHandle>,
    listeners: HashMap<Uuid, Listener>,
    torn_down: bool,
}

impl Inner {
    fn state(&self) -> NavState {
        NavState {
            active_index: self.active_index,
            transitioning: self.transitioning,
        }
    }

    fn listener_snapshot(&self) -> Vec<Listener> {
        self.listeners.values().cloned().collect()
    }

    fn cancel_cooldown(&mut self) {
        if let Some(handle) = self.cooldown_task.take() {
            handle.abort();
        }
        self.epoch += 1;
    }
}

/// Section navigation controller
///
/// Cheap to clone; clones share the same state. Navigation requests spawn
/// the cooldown timer on the ambient Tokio runtime, so `request_navigate`
/// must be called from within a runtime context.
pub struct SectionNav {
    inner: Arc<RwLock<Inner>>,
}

impl SectionNav {
    pub fn new(config: NavConfig) -> Result<Self> {
        config.validate()?;

        tracing::info!(
            sections = config.section_ids.len(),
            initial_index = config.initial_index,
            cooldown_ms = config.cooldown_ms,
            "Section navigation initialized"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner {
                sections: config.section_ids,
                active_index: config.initial_index,
                transitioning: false,
                cooldown: Duration::from_millis(config.cooldown_ms),
                epoch: 0,
                cooldown_task: None,
                listeners: HashMap::new(),
                torn_down: false,
            })),
        })
    }

    /// Currently active section index
    pub fn current_index(&self) -> usize {
        self.inner.read().active_index
    }

    /// Identifier of the currently active section
    pub fn active_section(&self) -> SectionId {
        let inner = self.inner.read();
        inner.sections[inner.active_index].clone()
    }

    /// Whether a programmatic transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.inner.read().transitioning
    }

    /// Configured section sequence
    pub fn sections(&self) -> Vec<SectionId> {
        self.inner.read().sections.clone()
    }

    /// Position of a section in the configured sequence
    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.inner.read().sections.iter().position(|s| s == id)
    }

    /// Request a programmatic navigation.
    ///
    /// Returns `false` without touching state when a transition is already
    /// in flight (dropped, not queued) or when the resolved target equals
    /// the current index. Otherwise moves to the target, notifies
    /// subscribers, starts the cooldown, and returns `true`.
    pub fn request_navigate(&self, command: NavCommand) -> bool {
        let (state, listeners) = {
            let mut inner = self.inner.write();
            if inner.torn_down {
                return false;
            }
            if inner.transitioning {
                tracing::debug!(?command, "Navigation dropped while transitioning");
                return false;
            }

            let target = command.resolve(inner.active_index, inner.sections.len());
            if target == inner.active_index {
                return false;
            }

            tracing::debug!(
                from = inner.active_index,
                to = target,
                section = %inner.sections[target],
                "Section navigation"
            );

            inner.active_index = target;
            inner.transitioning = true;
            inner.cancel_cooldown();

            let epoch = inner.epoch;
            let cooldown = inner.cooldown;
            let shared = Arc::clone(&self.inner);
            let handle = tokio::spawn(async move {
                tokio::time::sleep(cooldown).await;
                Self::finish_transition(&shared, epoch);
            });
            inner.cooldown_task = Some(handle.abort_handle());

            (inner.state(), inner.listener_snapshot())
        };

        for listener in listeners {
            listener(state);
        }

        true
    }

    /// External "animation complete" signal from the presentation layer.
    ///
    /// Ends the cooldown early; whichever of the timer and this signal
    /// arrives first wins. No-op when no transition is in flight.
    pub fn complete_transition(&self) {
        let notify = {
            let mut inner = self.inner.write();
            if inner.torn_down || !inner.transitioning {
                None
            } else {
                inner.transitioning = false;
                inner.cancel_cooldown();
                Some((inner.state(), inner.listener_snapshot()))
            }
        };

        if let Some((state, listeners)) = notify {
            for listener in listeners {
                listener(state);
            }
        }
    }

    /// Passive resync to the section the viewport actually shows.
    ///
    /// Bypasses the busy-guard and does not start or extend a cooldown:
    /// scroll-driven section changes reflect ground truth and must never be
    /// dropped. Unknown ids are a silent no-op.
    pub fn report_visible_section(&self, id: &SectionId) {
        let notify = {
            let mut inner = self.inner.write();
            if inner.torn_down {
                return;
            }
            match inner.sections.iter().position(|s| s == id) {
                Some(index) if index != inner.active_index => {
                    tracing::debug!(
                        from = inner.active_index,
                        to = index,
                        section = %id,
                        "Passive resync to visible section"
                    );
                    inner.active_index = index;
                    Some((inner.state(), inner.listener_snapshot()))
                }
                _ => None,
            }
        };

        if let Some((state, listeners)) = notify {
            for listener in listeners {
                listener(state);
            }
        }
    }

    /// Register a listener invoked on every state change.
    ///
    /// The returned handle deregisters the listener; calling it more than
    /// once is harmless.
    pub fn subscribe<F>(&self, listener: F) -> NavSubscription
    where
        F: Fn(NavState) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        {
            let mut inner = self.inner.write();
            if !inner.torn_down {
                inner.listeners.insert(id, Arc::new(listener));
            }
        }
        NavSubscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Re-initialize with a new configuration.
    ///
    /// Cancels any pending cooldown so a stale timer cannot mutate the new
    /// state. Listeners survive and observe the reset state.
    pub fn reconfigure(&self, config: NavConfig) -> Result<()> {
        config.validate()?;

        let (state, listeners) = {
            let mut inner = self.inner.write();
            inner.cancel_cooldown();
            inner.sections = config.section_ids;
            inner.active_index = config.initial_index;
            inner.transitioning = false;
            inner.cooldown = Duration::from_millis(config.cooldown_ms);
            inner.torn_down = false;
            (inner.state(), inner.listener_snapshot())
        };

        for listener in listeners {
            listener(state);
        }

        Ok(())
    }

    /// Tear down the controller.
    ///
    /// Cancels the pending cooldown, clears all listeners, and turns every
    /// further operation into a no-op. Idempotent.
    pub fn teardown(&self) {
        let mut inner = self.inner.write();
        if inner.torn_down {
            return;
        }
        inner.cancel_cooldown();
        inner.listeners.clear();
        inner.transitioning = false;
        inner.torn_down = true;

        tracing::debug!("Section navigation torn down");
    }

    fn finish_transition(shared: &Arc<RwLock<Inner>>, epoch: u64) {
        let notify = {
            let mut inner = shared.write();
            // A bumped epoch means this timer was superseded
            if inner.epoch != epoch || !inner.transitioning {
                None
            } else {
                inner.transitioning = false;
                inner.cooldown_task = None;
                Some((inner.state(), inner.listener_snapshot()))
            }
        };

        if let Some((state, listeners)) = notify {
            for listener in listeners {
                listener(state);
            }
        }
    }
}

impl Clone for SectionNav {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Scoped-release handle for a registered listener
pub struct NavSubscription {
    inner: std::sync::Weak<RwLock<Inner>>,
    id: Uuid,
}

impl NavSubscription {
    /// Deregister the listener. Idempotent; other listeners are unaffected.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.write().listeners.remove(&self.id);
        }
    }
}
