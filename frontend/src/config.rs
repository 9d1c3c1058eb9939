use log::Level;

pub const GSAP_CORE_URL: &str = "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/gsap.min.js";
pub const SCROLL_TRIGGER_URL: &str = "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/ScrollTrigger.min.js";
pub const SCROLL_TO_URL: &str = "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/ScrollToPlugin.min.js";
pub const CONFETTI_URL: &str = "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

// Engine first: both plugins read `window.gsap` while executing.
pub const ANIMATION_ENGINE_SCRIPTS: &[&str] = &[GSAP_CORE_URL, SCROLL_TRIGGER_URL, SCROLL_TO_URL];
pub const CONFETTI_SCRIPTS: &[&str] = &[CONFETTI_URL];

/// How long a component waits for a script group before rendering without it.
#[cfg(debug_assertions)]
pub const LOADER_GRACE_MS: u32 = 6000; // local CDN fetches through dev proxies are slow

#[cfg(not(debug_assertions))]
pub const LOADER_GRACE_MS: u32 = 2500;

pub const LOCALE_STORAGE_KEY: &str = "aurelia.locale";

pub const CLINIC_NAME: &str = "Aurelia Clinic";
pub const CLINIC_EMAIL: &str = "hello@aurelia-clinic.com";
pub const CLINIC_PHONE: &str = "+49 30 555 0142";
pub const PRIVACY_EMAIL: &str = "privacy@aurelia-clinic.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
