use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::{debug, info, warn};

use super::error::LoadError;
use super::host::ScriptHost;
use super::script::{settled, ScriptLoader};

pub type GroupFuture<T> = Shared<LocalBoxFuture<'static, Result<T, LoadError>>>;

/// A named, ordered set of scripts that becomes usable as one unit.
pub trait ResourceGroup<H: ?Sized>: Clone + 'static {
    /// What callers get back once the group is ready.
    type Handle: Clone + 'static;

    fn name(&self) -> &'static str;

    /// Loaded strictly in this order; later scripts may read globals set by earlier ones.
    fn scripts(&self) -> &'static [&'static str];

    /// Returns a handle when the group's globals already exist, skipping the network entirely.
    fn detect(&self, host: &H) -> Option<Self::Handle>;

    /// One-time wiring after every script executed.
    fn register(&self, host: &H) -> Result<Self::Handle, LoadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotRequested,
    Loading,
    Ready,
    Failed,
}

enum Slot {
    Loading(Box<dyn Any>),
    Ready(Box<dyn Any>),
    Failed(LoadError),
}

struct Inner<H> {
    host: Rc<H>,
    scripts: ScriptLoader<H>,
    slots: RefCell<HashMap<&'static str, Slot>>,
}

/// Page-wide state of every resource group, keyed by group name.
///
/// `Ready` is sticky. A failure clears the in-flight operation so the next
/// `ensure` starts over instead of replaying the error.
pub struct GroupRegistry<H> {
    inner: Rc<Inner<H>>,
}

impl<H: ScriptHost> GroupRegistry<H> {
    pub fn new(host: H) -> Self {
        let host = Rc::new(host);
        Self::with_host(host)
    }

    pub fn with_host(host: Rc<H>) -> Self {
        Self {
            inner: Rc::new(Inner {
                scripts: ScriptLoader::new(host.clone()),
                host,
                slots: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn status(&self, name: &str) -> LoadStatus {
        match self.inner.slots.borrow().get(name) {
            None => LoadStatus::NotRequested,
            Some(Slot::Loading(_)) => LoadStatus::Loading,
            Some(Slot::Ready(_)) => LoadStatus::Ready,
            Some(Slot::Failed(_)) => LoadStatus::Failed,
        }
    }

    pub fn last_error(&self, name: &str) -> Option<LoadError> {
        match self.inner.slots.borrow().get(name) {
            Some(Slot::Failed(err)) => Some(err.clone()),
            _ => None,
        }
    }

    /// Resolves once `group` is ready. Every caller during one attempt shares the same future.
    pub fn ensure<G: ResourceGroup<H>>(&self, group: &G) -> GroupFuture<G::Handle> {
        let name = group.name();

        match self.inner.slots.borrow().get(name) {
            Some(Slot::Ready(handle)) => {
                if let Some(handle) = handle.downcast_ref::<G::Handle>() {
                    return resolved(handle.clone());
                }
                warn!("group {} is ready with a different handle type, reloading", name);
            }
            Some(Slot::Loading(op)) => {
                if let Some(op) = op.downcast_ref::<GroupFuture<G::Handle>>() {
                    return op.clone();
                }
                warn!("group {} is loading with a different handle type, reloading", name);
            }
            Some(Slot::Failed(err)) => debug!("group {} failed before ({}), retrying", name, err),
            None => {}
        }

        if let Some(handle) = group.detect(&self.inner.host) {
            debug!("group {} already present on the page", name);
            self.inner
                .slots
                .borrow_mut()
                .insert(name, Slot::Ready(Box::new(handle.clone())));
            return resolved(handle);
        }

        info!("loading group {}", name);
        let op = run(Rc::downgrade(&self.inner), group.clone());
        // Stored before the first poll so concurrent callers can only ever join this attempt.
        self.inner
            .slots
            .borrow_mut()
            .insert(name, Slot::Loading(Box::new(op.clone())));
        self.inner.host.spawn(op.clone().map(|_| ()).boxed_local());
        op
    }
}

fn resolved<T: Clone + 'static>(handle: T) -> GroupFuture<T> {
    settled(Ok(handle))
}

fn run<H: ScriptHost, G: ResourceGroup<H>>(
    inner: Weak<Inner<H>>,
    group: G,
) -> GroupFuture<G::Handle> {
    async move {
        let outcome = load_in_order(&inner, &group).await;
        if let Some(inner) = inner.upgrade() {
            let slot = match &outcome {
                Ok(handle) => {
                    info!("group {} ready", group.name());
                    Slot::Ready(Box::new(handle.clone()))
                }
                Err(err) => {
                    warn!("group {} failed: {}", group.name(), err);
                    Slot::Failed(err.clone())
                }
            };
            inner.slots.borrow_mut().insert(group.name(), slot);
        }
        outcome
    }
    .boxed_local()
    .shared()
}

async fn load_in_order<H: ScriptHost, G: ResourceGroup<H>>(
    inner: &Weak<Inner<H>>,
    group: &G,
) -> Result<G::Handle, LoadError> {
    let (scripts, host) = match inner.upgrade() {
        Some(inner) => (inner.scripts.clone(), inner.host.clone()),
        None => {
            return Err(LoadError::RegistryGone {
                group: group.name(),
            })
        }
    };

    for url in group.scripts() {
        scripts.load(url).await?;
    }
    group.register(&host)
}
