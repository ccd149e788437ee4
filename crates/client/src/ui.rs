//! UI side-effect hooks.
//!
//! Store actions occasionally need to reach the presentation layer: show a
//! toast, move to another route. Those effects go through an injected
//! [`UiHooks`] trait object so the stores stay headless and testable.

/// Routes the auth store navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

/// Hooks into the presentation layer. All methods default to no-ops so
/// implementors only override what they render.
pub trait UiHooks: Send + Sync {
    fn notify_success(&self, _message: &str) {}
    fn notify_error(&self, _message: &str) {}
    fn navigate(&self, _route: Route) {}
}

/// Ignores every UI signal. Suitable for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUi;

impl UiHooks for NoopUi {}
