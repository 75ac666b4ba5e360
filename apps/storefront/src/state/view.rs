//! # View State
//!
//! Which of the three screens is showing. Any view can follow any other.

use std::sync::Mutex;

use flexnesse_core::View;

#[derive(Debug, Default)]
pub struct ViewState {
    view: Mutex<View>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        *self.view.lock().expect("View mutex poisoned")
    }

    /// Switches to `view`, returning the one it replaced.
    pub fn set(&self, view: View) -> View {
        let mut current = self.view.lock().expect("View mutex poisoned");
        std::mem::replace(&mut *current, view)
    }
}
