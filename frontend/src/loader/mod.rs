//! On-demand loading of third-party browser scripts.
//!
//! Scripts come in groups (the animation engine with its plugins, the confetti effect). A group
//! is requested through [`load_animation_engine`] / [`load_confetti`] or the hooks in [`hook`];
//! every caller gets a handle to the loaded library instead of reading globals.

pub mod browser;
pub mod error;
pub mod groups;
pub mod hook;
pub mod host;
pub mod registry;
pub mod script;

#[cfg(test)]
pub mod testing;

use browser::BrowserHost;
use error::LoadError;
use groups::{AnimationEngine, AnimationEngineGroup, Confetti, ConfettiGroup};
use registry::{GroupFuture, GroupRegistry, LoadStatus};

thread_local! {
    static REGISTRY: GroupRegistry<BrowserHost> = GroupRegistry::new(BrowserHost);
}

pub fn load_animation_engine() -> GroupFuture<AnimationEngine> {
    REGISTRY.with(|registry| registry.ensure(&AnimationEngineGroup))
}

pub fn load_confetti() -> GroupFuture<Confetti> {
    REGISTRY.with(|registry| registry.ensure(&ConfettiGroup))
}

/// Current state of a group on this page, with the last failure if it failed.
pub fn group_status(name: &str) -> (LoadStatus, Option<LoadError>) {
    REGISTRY.with(|registry| (registry.status(name), registry.last_error(name)))
}
