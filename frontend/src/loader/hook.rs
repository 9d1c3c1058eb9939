use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either, FutureExt};
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::error::LoadError;
use super::groups::{AnimationEngine, Confetti};
use super::registry::GroupFuture;
use super::{group_status, load_animation_engine, load_confetti};
use crate::config;

/// What a component can rely on while a script group loads.
#[derive(Clone, Debug, PartialEq)]
pub enum Availability<T> {
    Pending,
    Ready(T),
    /// Load failed or outlasted the grace period. The component renders without the library.
    Degraded,
}

impl<T> Availability<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Availability::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Availability::Pending)
    }
}

#[hook]
pub fn use_animation_engine() -> Availability<AnimationEngine> {
    use_group("animation-engine", load_animation_engine)
}

#[hook]
pub fn use_confetti() -> Availability<Confetti> {
    use_group("confetti", load_confetti)
}

#[hook]
fn use_group<T>(name: &'static str, load: fn() -> GroupFuture<T>) -> Availability<T>
where
    T: Clone + 'static,
{
    let state = use_state(|| match load().peek() {
        Some(Ok(handle)) => Availability::Ready(handle.clone()),
        _ => Availability::Pending,
    });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));
                if !state.is_settled() {
                    let mounted = mounted.clone();
                    let report = move |next: Availability<T>| {
                        if matches!(next, Availability::Degraded) {
                            let (status, last_error) = group_status(name);
                            debug!("{} is {:?}, last error: {:?}", name, status, last_error);
                        }
                        if mounted.get() {
                            state.set(next);
                        }
                    };
                    let grace = TimeoutFuture::new(config::LOADER_GRACE_MS).boxed_local();
                    spawn_local(race_grace(name, load(), grace, report));
                }
                move || mounted.set(false)
            },
            (),
        );
    }

    (*state).clone()
}

/// Waits for `load` until `grace` fires, reporting each state the component should show.
///
/// A load that outlasts the grace period reports `Degraded` first and `Ready` if it still
/// succeeds later. A late failure reports nothing more.
async fn race_grace<T, L, G>(name: &str, load: L, grace: G, report: impl Fn(Availability<T>))
where
    L: Future<Output = Result<T, LoadError>> + Unpin,
    G: Future<Output = ()> + Unpin,
{
    let pending = match future::select(load, grace).await {
        Either::Left((outcome, _)) => {
            report(settle(name, outcome));
            return;
        }
        Either::Right(((), pending)) => pending,
    };

    warn!("{} not ready in time, rendering without it", name);
    report(Availability::Degraded);

    // The load belongs to the registry and may still finish.
    match pending.await {
        Ok(handle) => {
            debug!("{} arrived late, upgrading", name);
            report(Availability::Ready(handle));
        }
        Err(err) => debug!("{} failed after the grace period: {}", name, err),
    }
}

fn settle<T>(name: &str, outcome: Result<T, LoadError>) -> Availability<T> {
    match outcome {
        Ok(handle) => Availability::Ready(handle),
        Err(err) => {
            match err.failed_url() {
                Some(url) => warn!("{} unavailable, {} did not load: {}", name, url, err),
                None => warn!("{} unavailable: {}", name, err),
            }
            Availability::Degraded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::error::{FailureReason, ScriptLoadError};
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    type Seen = Rc<RefCell<Vec<Availability<u8>>>>;

    /// Spawns a race whose load and timer are both driven by hand.
    fn race(
        pool: &LocalPool,
    ) -> (
        oneshot::Sender<Result<u8, LoadError>>,
        oneshot::Sender<()>,
        Seen,
    ) {
        let (load_tx, load_rx) = oneshot::channel();
        let (timer_tx, timer_rx) = oneshot::channel::<()>();
        let seen: Seen = Rc::default();

        let load = load_rx.map(|outcome| outcome.unwrap_or(Err(network_error())));
        let grace = timer_rx.map(|_| ());
        let report = {
            let seen = seen.clone();
            move |next| seen.borrow_mut().push(next)
        };
        pool.spawner()
            .spawn_local(race_grace("test-group", load, grace, report))
            .unwrap();
        (load_tx, timer_tx, seen)
    }

    fn network_error() -> LoadError {
        ScriptLoadError::new("https://cdn.test/group.js", FailureReason::Network).into()
    }

    #[test]
    fn load_within_grace_is_ready_at_once() {
        let mut pool = LocalPool::new();
        let (load, _timer, seen) = race(&pool);

        pool.run_until_stalled();
        assert!(seen.borrow().is_empty());

        load.send(Ok(3)).unwrap();
        pool.run_until_stalled();
        assert_eq!(*seen.borrow(), vec![Availability::Ready(3)]);
    }

    #[test]
    fn late_success_upgrades_after_degrading() {
        let mut pool = LocalPool::new();
        let (load, timer, seen) = race(&pool);

        timer.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(*seen.borrow(), vec![Availability::Degraded]);

        load.send(Ok(9)).unwrap();
        pool.run_until_stalled();
        assert_eq!(
            *seen.borrow(),
            vec![Availability::Degraded, Availability::Ready(9)]
        );
    }

    #[test]
    fn late_failure_stays_degraded() {
        let mut pool = LocalPool::new();
        let (load, timer, seen) = race(&pool);

        timer.send(()).unwrap();
        pool.run_until_stalled();
        load.send(Err(network_error())).unwrap();
        pool.run_until_stalled();

        assert_eq!(*seen.borrow(), vec![Availability::Degraded]);
    }

    #[test]
    fn failure_within_grace_degrades_once() {
        let mut pool = LocalPool::new();
        let (load, timer, seen) = race(&pool);

        load.send(Err(network_error())).unwrap();
        pool.run_until_stalled();
        // The timer firing afterwards changes nothing.
        let _ = timer.send(());
        pool.run_until_stalled();

        assert_eq!(*seen.borrow(), vec![Availability::Degraded]);
    }

    #[test]
    fn only_ready_exposes_a_handle() {
        assert_eq!(Availability::Ready(7).ready(), Some(&7));
        assert_eq!(Availability::<u8>::Pending.ready(), None);
        assert_eq!(Availability::<u8>::Degraded.ready(), None);
    }

    #[test]
    fn degraded_counts_as_settled() {
        assert!(!Availability::<u8>::Pending.is_settled());
        assert!(Availability::<u8>::Degraded.is_settled());
        assert!(Availability::Ready(()).is_settled());
    }
}
