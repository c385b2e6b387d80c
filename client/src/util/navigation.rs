//! Full-page navigation for session-driven redirects.
//!
//! A full navigation remounts the app, which re-reads persisted sessions and
//! starts every guard from `Checking` again.

use eventdesk::Navigator;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
