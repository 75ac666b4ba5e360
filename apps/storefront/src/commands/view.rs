//! # View Commands
//!
//! Header and panel navigation. Any view can be reached from any other.

use flexnesse_core::View;
use tracing::debug;

use crate::state::AppState;

/// Switches the visible screen.
///
/// ## Returns
/// The view that is now showing.
pub fn navigate(app: &AppState, view: View) -> View {
    let previous = app.view.set(view);
    debug!(?previous, ?view, "navigate command");
    view
}

pub fn current_view(app: &AppState) -> View {
    app.view.current()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate() {
        let app = AppState::default();
        assert_eq!(current_view(&app), View::Store);

        assert_eq!(navigate(&app, View::Admin), View::Admin);
        assert_eq!(navigate(&app, View::AddProduct), View::AddProduct);
        assert_eq!(navigate(&app, View::Store), View::Store);
        assert_eq!(current_view(&app), View::Store);
    }
}
