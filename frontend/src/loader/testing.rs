//! In-memory `ScriptHost` for driving the loader from native tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::LocalSpawnExt;

use super::error::{FailureReason, ScriptLoadError};
use super::host::ScriptHost;

type Completion = oneshot::Sender<Result<(), ScriptLoadError>>;

pub struct FakeHost {
    spawner: LocalSpawner,
    present: RefCell<HashSet<String>>,
    insertions: RefCell<Vec<String>>,
    pending: RefCell<HashMap<String, Completion>>,
    defines: RefCell<HashMap<String, Vec<&'static str>>>,
    globals: RefCell<HashSet<&'static str>>,
}

impl FakeHost {
    pub fn new() -> (Rc<Self>, LocalPool) {
        let pool = LocalPool::new();
        let host = Rc::new(Self {
            spawner: pool.spawner(),
            present: RefCell::default(),
            insertions: RefCell::default(),
            pending: RefCell::default(),
            defines: RefCell::default(),
            globals: RefCell::default(),
        });
        (host, pool)
    }

    /// Every `insert_script` call so far, in order.
    pub fn insertions(&self) -> Vec<String> {
        self.insertions.borrow().clone()
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.borrow().contains_key(url)
    }

    /// Marks `url` as attached by someone else.
    pub fn preinstall(&self, url: &str) {
        self.present.borrow_mut().insert(url.to_string());
    }

    /// Globals that appear once `url` executes.
    pub fn defines(&self, url: &str, globals: &[&'static str]) {
        self.defines
            .borrow_mut()
            .insert(url.to_string(), globals.to_vec());
    }

    pub fn set_global(&self, name: &'static str) {
        self.globals.borrow_mut().insert(name);
    }

    pub fn has_global(&self, name: &str) -> bool {
        self.globals.borrow().contains(name)
    }

    pub fn succeed(&self, url: &str) {
        let completion = self.take_pending(url);
        if let Some(globals) = self.defines.borrow().get(url) {
            self.globals.borrow_mut().extend(globals.iter().copied());
        }
        let _ = completion.send(Ok(()));
    }

    pub fn fail(&self, url: &str) {
        let completion = self.take_pending(url);
        self.present.borrow_mut().remove(url);
        let _ = completion.send(Err(ScriptLoadError::new(url, FailureReason::Network)));
    }

    fn take_pending(&self, url: &str) -> Completion {
        self.pending
            .borrow_mut()
            .remove(url)
            .unwrap_or_else(|| panic!("no pending insertion for {}", url))
    }
}

impl ScriptHost for FakeHost {
    fn script_present(&self, url: &str) -> bool {
        self.present.borrow().contains(url)
    }

    fn insert_script(&self, url: &str) -> LocalBoxFuture<'static, Result<(), ScriptLoadError>> {
        let (tx, rx) = oneshot::channel();
        self.present.borrow_mut().insert(url.to_string());
        self.insertions.borrow_mut().push(url.to_string());
        self.pending.borrow_mut().insert(url.to_string(), tx);
        let url = url.to_string();
        async move {
            rx.await
                .unwrap_or_else(|_| Err(ScriptLoadError::new(url, FailureReason::Abandoned)))
        }
        .boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("test pool accepts tasks");
    }
}
