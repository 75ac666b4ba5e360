//! # Notification State
//!
//! The single toast slot and its auto-dismiss timer.
//!
//! ## Timer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Toast Lifecycle                                      │
//! │                                                                         │
//! │  show("A") ──► slot = A, gen = 1 ──► spawn clear(gen 1) after 3000ms   │
//! │                                                                         │
//! │  show("B") ──► abort clear(gen 1)                                       │
//! │            ──► slot = B, gen = 2 ──► spawn clear(gen 2) after 3000ms   │
//! │                                                                         │
//! │  clear(gen 2) fires ──► gen still 2? ──► slot = hidden                  │
//! │                                                                         │
//! │  A stale timer never clears a newer message: it is aborted, and the    │
//! │  generation check covers a timer that already woke up.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use flexnesse_core::Notification;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Slot {
    current: Notification,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Shared toast slot.
///
/// `show` schedules the clear on the ambient Tokio runtime. Outside a
/// runtime the message is shown but stays until the next `show`.
#[derive(Debug)]
pub struct NotificationState {
    slot: Arc<Mutex<Slot>>,
    dismiss_after: Duration,
}

impl NotificationState {
    pub fn new(dismiss_after: Duration) -> Self {
        NotificationState {
            slot: Arc::new(Mutex::new(Slot::default())),
            dismiss_after,
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    /// Shows `message`, replacing whatever is on screen, and arms the
    /// dismiss timer. Any earlier pending timer is cancelled.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        let mut slot = self.slot.lock().expect("Notification mutex poisoned");

        slot.generation += 1;
        let generation = slot.generation;

        if let Some(previous) = slot.pending.take() {
            previous.abort();
        }

        debug!(generation, message = %message, "showing notification");
        slot.current = Notification::shown(message);

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("no tokio runtime, notification will not auto-dismiss");
                return;
            }
        };

        let shared = Arc::clone(&self.slot);
        let delay = self.dismiss_after;
        slot.pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;

            let mut slot = shared.lock().expect("Notification mutex poisoned");
            if slot.generation == generation {
                debug!(generation, "notification dismissed");
                slot.current = Notification::hidden();
                slot.pending = None;
            }
        }));
    }

    /// What the banner should show right now.
    pub fn current(&self) -> Notification {
        self.slot
            .lock()
            .expect("Notification mutex poisoned")
            .current
            .clone()
    }
}

impl Drop for NotificationState {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.lock() {
            if let Some(pending) = slot.pending.take() {
                pending.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const DELAY: Duration = Duration::from_millis(3000);

    #[tokio::test(start_paused = true)]
    async fn test_dismisses_after_delay() {
        let state = NotificationState::new(DELAY);
        state.show("hello");
        assert_eq!(state.current(), Notification::shown("hello"));

        sleep(Duration::from_millis(2999)).await;
        assert!(state.current().visible);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(state.current(), Notification::hidden());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_message_keeps_its_full_delay() {
        let state = NotificationState::new(DELAY);
        state.show("first");

        sleep(Duration::from_millis(2000)).await;
        state.show("second");

        // The first timer would have fired at 3000ms.
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(state.current(), Notification::shown("second"));

        sleep(Duration::from_millis(1501)).await;
        assert!(!state.current().visible);
    }

    #[test]
    fn test_show_without_runtime_keeps_message() {
        let state = NotificationState::new(DELAY);
        state.show("no runtime");
        assert_eq!(state.current(), Notification::shown("no runtime"));
    }

    #[test]
    fn test_starts_hidden() {
        let state = NotificationState::new(DELAY);
        assert_eq!(state.current(), Notification::hidden());
    }
}
