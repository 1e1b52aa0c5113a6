//! Theme manager
//!
//! Holds the current theme and notifies subscribers on change. Setting the
//! already-current theme does not notify.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::theme::Theme;

type Listener = Arc<dyn Fn(Theme) + Send + Sync>;

struct Inner {
    theme: Theme,
    listeners: HashMap<Uuid, Listener>,
}

pub struct ThemeManager {
    inner: Arc<RwLock<Inner>>,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                theme,
                listeners: HashMap::new(),
            })),
        }
    }

    pub fn theme(&self) -> Theme {
        self.inner.read().theme
    }

    pub fn set_theme(&self, theme: Theme) {
        let notify = {
            let mut inner = self.inner.write();
            if inner.theme == theme {
                None
            } else {
                tracing::debug!(from = %inner.theme, to = %theme, "Theme changed");
                inner.theme = theme;
                Some(inner.listeners.values().cloned().collect::<Vec<_>>())
            }
        };

        if let Some(listeners) = notify {
            for listener in listeners {
                listener(theme);
            }
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// Register a listener invoked whenever the theme changes.
    pub fn subscribe<F>(&self, listener: F) -> ThemeSubscription
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        self.inner.write().listeners.insert(id, Arc::new(listener));
        ThemeSubscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Clone for ThemeManager {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Scoped-release handle for a theme listener
pub struct ThemeSubscription {
    inner: std::sync::Weak<RwLock<Inner>>,
    id: Uuid,
}

impl ThemeSubscription {
    /// Deregister the listener. Idempotent.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.write().listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_toggle_roundtrip() {
        let manager = ThemeManager::default();
        assert_eq!(manager.theme(), Theme::Dark);
        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.toggle(), Theme::Dark);
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let manager = ThemeManager::new(Theme::Dark);
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let _sub = manager.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.set_theme(Theme::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        manager.set_theme(Theme::Light);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let manager = ThemeManager::default();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let sub = manager.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sub.unsubscribe();
        sub.unsubscribe();

        manager.toggle();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
