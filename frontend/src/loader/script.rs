use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture, Shared};
use log::{debug, warn};

use super::error::ScriptLoadError;
use super::host::ScriptHost;

pub type ScriptFuture = Shared<LocalBoxFuture<'static, Result<(), ScriptLoadError>>>;

/// Inserts each script URL at most once at a time and shares the outcome between callers.
pub struct ScriptLoader<H> {
    host: Rc<H>,
    in_flight: Rc<RefCell<HashMap<String, ScriptFuture>>>,
}

impl<H> Clone for ScriptLoader<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<H: ScriptHost> ScriptLoader<H> {
    pub fn new(host: Rc<H>) -> Self {
        Self {
            host,
            in_flight: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn load(&self, url: &str) -> ScriptFuture {
        if let Some(pending) = self.in_flight.borrow().get(url) {
            debug!("script {} already loading, joining", url);
            return pending.clone();
        }

        if self.host.script_present(url) {
            debug!("script {} already in document", url);
            return settled(Ok(()));
        }

        debug!("inserting script {}", url);
        let insertion = self.host.insert_script(url);
        let in_flight = Rc::downgrade(&self.in_flight);
        let key = url.to_string();
        let task = async move {
            let outcome = insertion.await;
            if let Err(err) = &outcome {
                warn!("{}", err);
            }
            if let Some(in_flight) = in_flight.upgrade() {
                in_flight.borrow_mut().remove(&key);
            }
            outcome
        }
        .boxed_local()
        .shared();

        // Registered before anything can yield, so a second caller in the same tick joins it.
        self.in_flight
            .borrow_mut()
            .insert(url.to_string(), task.clone());
        self.host.spawn(task.clone().map(|_| ()).boxed_local());
        task
    }
}

/// A shared future that already holds `value`, so `peek` sees it without a poll.
pub(super) fn settled<T: Clone + 'static>(value: T) -> Shared<LocalBoxFuture<'static, T>> {
    let shared = future::ready(value).boxed_local().shared();
    let _ = shared.clone().now_or_never();
    shared
}

#[cfg(test)]
impl<H> ScriptLoader<H> {
    pub fn is_loading(&self, url: &str) -> bool {
        self.in_flight.borrow().contains_key(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::error::FailureReason;
    use crate::loader::testing::FakeHost;

    const A: &str = "https://cdn.test/a.js";
    const B: &str = "https://cdn.test/b.js";

    #[test]
    fn concurrent_loads_share_one_insertion() {
        let (host, mut pool) = FakeHost::new();
        let loader = ScriptLoader::new(host.clone());

        let first = loader.load(A);
        let second = loader.load(A);
        assert_eq!(host.insertions(), vec![A.to_string()]);
        assert!(loader.is_loading(A));

        host.succeed(A);
        pool.run_until_stalled();

        assert_eq!(first.peek(), Some(&Ok(())));
        assert_eq!(second.peek(), Some(&Ok(())));
        assert!(!loader.is_loading(A));
    }

    #[test]
    fn present_element_resolves_without_insertion() {
        let (host, mut pool) = FakeHost::new();
        host.preinstall(A);
        let loader = ScriptLoader::new(host.clone());

        let outcome = pool.run_until(loader.load(A));

        assert_eq!(outcome, Ok(()));
        assert!(host.insertions().is_empty());
    }

    #[test]
    fn present_element_is_settled_before_any_poll() {
        let (host, _pool) = FakeHost::new();
        host.preinstall(A);
        let loader = ScriptLoader::new(host.clone());

        assert_eq!(loader.load(A).peek(), Some(&Ok(())));
        assert!(!loader.is_loading(A));
    }

    #[test]
    fn loaded_script_is_not_inserted_again() {
        let (host, mut pool) = FakeHost::new();
        let loader = ScriptLoader::new(host.clone());

        let first = loader.load(A);
        host.succeed(A);
        assert_eq!(pool.run_until(first), Ok(()));

        assert_eq!(pool.run_until(loader.load(A)), Ok(()));
        assert_eq!(host.insertions().len(), 1);
    }

    #[test]
    fn failure_reaches_every_caller_and_is_not_replayed() {
        let (host, mut pool) = FakeHost::new();
        let loader = ScriptLoader::new(host.clone());

        let first = loader.load(A);
        let second = loader.load(A);
        host.fail(A);
        pool.run_until_stalled();

        let expected = Err(ScriptLoadError::new(A, FailureReason::Network));
        assert_eq!(first.peek(), Some(&expected));
        assert_eq!(second.peek(), Some(&expected));

        let retry = loader.load(A);
        assert_eq!(host.insertions(), vec![A.to_string(), A.to_string()]);
        host.succeed(A);
        assert_eq!(pool.run_until(retry), Ok(()));
    }

    #[test]
    fn failed_url_does_not_block_other_urls() {
        let (host, mut pool) = FakeHost::new();
        let loader = ScriptLoader::new(host.clone());

        let a = loader.load(A);
        host.fail(A);
        pool.run_until_stalled();
        assert!(a.peek().map(Result::is_err).unwrap_or(false));

        let b = loader.load(B);
        host.succeed(B);
        assert_eq!(pool.run_until(b), Ok(()));
    }

    #[test]
    fn dropped_callers_do_not_stall_the_insertion() {
        let (host, mut pool) = FakeHost::new();
        let loader = ScriptLoader::new(host.clone());

        drop(loader.load(A));
        host.succeed(A);
        pool.run_until_stalled();

        assert!(!loader.is_loading(A));
        assert!(host.script_present(A));
    }
}
