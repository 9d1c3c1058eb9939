use futures::future::LocalBoxFuture;

use super::error::ScriptLoadError;

/// The page the loader inserts scripts into.
///
/// Everything runs on one event loop thread, so nothing here is `Send`.
pub trait ScriptHost: 'static {
    /// Whether a script element with exactly this `src` is attached to the document.
    fn script_present(&self, url: &str) -> bool;

    /// Creates and attaches an async script element before returning. The returned future
    /// resolves on the element's `load` event. On failure the host detaches the element again,
    /// so a later call for the same URL starts from a clean document.
    fn insert_script(&self, url: &str) -> LocalBoxFuture<'static, Result<(), ScriptLoadError>>;

    /// Runs a detached task to completion on the host's event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
