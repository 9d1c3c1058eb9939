use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Function, Reflect};

use super::browser::BrowserHost;
use super::error::LoadError;
use super::registry::ResourceGroup;
use crate::config;

/// GSAP core plus the ScrollTrigger and ScrollTo plugins.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationEngineGroup;

/// canvas-confetti.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfettiGroup;

const ENGINE_GROUP: &str = "animation-engine";
const CONFETTI_GROUP: &str = "confetti";

const GSAP: &str = "gsap";
const SCROLL_TRIGGER: &str = "ScrollTrigger";
const SCROLL_TO_PLUGIN: &str = "ScrollToPlugin";
const CONFETTI: &str = "confetti";

impl ResourceGroup<BrowserHost> for AnimationEngineGroup {
    type Handle = AnimationEngine;

    fn name(&self) -> &'static str {
        ENGINE_GROUP
    }

    fn scripts(&self) -> &'static [&'static str] {
        config::ANIMATION_ENGINE_SCRIPTS
    }

    fn detect(&self, host: &BrowserHost) -> Option<AnimationEngine> {
        [GSAP, SCROLL_TRIGGER, SCROLL_TO_PLUGIN]
            .iter()
            .all(|name| host.global(name).is_some())
            .then(|| self.register(host).ok())
            .flatten()
    }

    fn register(&self, host: &BrowserHost) -> Result<AnimationEngine, LoadError> {
        let global = |symbol: &'static str| {
            host.global(symbol).ok_or(LoadError::MissingGlobal {
                group: ENGINE_GROUP,
                symbol,
            })
        };
        let engine = AnimationEngine {
            gsap: global(GSAP)?,
            scroll_trigger: global(SCROLL_TRIGGER)?,
            scroll_to: global(SCROLL_TO_PLUGIN)?,
        };
        // registerPlugin ignores plugins it already knows; safe to repeat on the fast path.
        let plugins = [&engine.scroll_trigger, &engine.scroll_to];
        call_method(&engine.gsap, "registerPlugin", &plugins)
            .map_err(|err| LoadError::Registration {
                group: ENGINE_GROUP,
                message: format!("{:?}", err),
            })?;
        Ok(engine)
    }
}

impl ResourceGroup<BrowserHost> for ConfettiGroup {
    type Handle = Confetti;

    fn name(&self) -> &'static str {
        CONFETTI_GROUP
    }

    fn scripts(&self) -> &'static [&'static str] {
        config::CONFETTI_SCRIPTS
    }

    fn detect(&self, host: &BrowserHost) -> Option<Confetti> {
        self.register(host).ok()
    }

    fn register(&self, host: &BrowserHost) -> Result<Confetti, LoadError> {
        host.global(CONFETTI)
            .filter(|value| value.is_function())
            .map(|fire| Confetti { fire })
            .ok_or(LoadError::MissingGlobal {
                group: CONFETTI_GROUP,
                symbol: CONFETTI,
            })
    }
}

/// The registered GSAP engine.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationEngine {
    gsap: JsValue,
    scroll_trigger: JsValue,
    scroll_to: JsValue,
}

/// Scroll range that drives a scrubbed timeline.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScrollRange {
    pub trigger: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub scrub: f64,
    pub pin: bool,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(rename = "clipPath", skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
}

/// One `.to()` call on a timeline, placed at `at` (timeline seconds).
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: &'static str,
    pub vars: TweenVars,
    pub at: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimelineVars<'a> {
    scroll_trigger: &'a ScrollRange,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollToVars<'a> {
    duration: f64,
    scroll_to: ScrollToTarget<'a>,
    ease: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollToTarget<'a> {
    y: &'a str,
    offset_y: f64,
}

impl AnimationEngine {
    /// Builds a timeline whose playhead follows the scroll position inside `range`.
    pub fn scrub_timeline(
        &self,
        range: &ScrollRange,
        tweens: &[Tween],
    ) -> Result<ScrubTimeline, JsValue> {
        let vars = to_js(&TimelineVars { scroll_trigger: range })?;
        let timeline = call_method(&self.gsap, "timeline", &[&vars])?;
        for tween in tweens {
            let vars = to_js(&tween.vars)?;
            call_method(
                &timeline,
                "to",
                &[&JsValue::from_str(tween.target), &vars, &JsValue::from_f64(tween.at)],
            )?;
        }
        Ok(ScrubTimeline { timeline })
    }

    /// Smooth-scrolls the window to the element matching `selector`.
    pub fn scroll_to(&self, selector: &str, duration: f64, offset_y: f64) -> Result<(), JsValue> {
        let window: JsValue = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .into();
        let vars = to_js(&ScrollToVars {
            duration,
            scroll_to: ScrollToTarget { y: selector, offset_y },
            ease: "power2.inOut",
        })?;
        call_method(&self.gsap, "to", &[&window, &vars]).map(|_| ())
    }
}

/// A timeline built by [`AnimationEngine::scrub_timeline`], together with its own ScrollTrigger.
pub struct ScrubTimeline {
    timeline: JsValue,
}

impl ScrubTimeline {
    /// Stops this timeline and detaches its ScrollTrigger. Other triggers on the page keep running.
    pub fn kill(&self) -> Result<(), JsValue> {
        let trigger = Reflect::get(&self.timeline, &JsValue::from_str("scrollTrigger"))?;
        if !trigger.is_undefined() && !trigger.is_null() {
            call_method(&trigger, "kill", &[])?;
        }
        call_method(&self.timeline, "kill", &[]).map(|_| ())
    }
}

/// The `confetti()` function from canvas-confetti.
#[derive(Clone, Debug, PartialEq)]
pub struct Confetti {
    fire: JsValue,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    pub spread: f64,
    pub start_velocity: f64,
    pub origin: Origin,
    pub colors: &'static [&'static str],
    pub disable_for_reduced_motion: bool,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Confetti {
    pub fn fire(&self, burst: &Burst) -> Result<(), JsValue> {
        let options = to_js(burst)?;
        self.fire
            .unchecked_ref::<Function>()
            .call1(&JsValue::NULL, &options)
            .map(|_| ())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let args: Array = args.iter().copied().collect();
    Reflect::apply(&method, target, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tween_vars_only_carry_set_properties() {
        let vars = TweenVars {
            opacity: Some(0.0),
            clip_path: Some("inset(0% 0% 100% 0%)"),
            ..TweenVars::default()
        };
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({ "opacity": 0.0, "clipPath": "inset(0% 0% 100% 0%)" })
        );
    }

    #[test]
    fn timeline_vars_nest_the_scroll_range() {
        let range = ScrollRange {
            trigger: ".hero",
            start: "top top",
            end: "bottom top",
            scrub: 0.6,
            pin: true,
        };
        assert_eq!(
            serde_json::to_value(TimelineVars { scroll_trigger: &range }).unwrap(),
            json!({
                "scrollTrigger": {
                    "trigger": ".hero",
                    "start": "top top",
                    "end": "bottom top",
                    "scrub": 0.6,
                    "pin": true
                }
            })
        );
    }

    #[test]
    fn bursts_use_library_option_names() {
        let burst = Burst {
            particle_count: 120,
            spread: 70.0,
            start_velocity: 35.0,
            origin: Origin { x: 0.5, y: 0.7 },
            colors: &["#c9a27e"],
            disable_for_reduced_motion: true,
        };
        let value = serde_json::to_value(&burst).unwrap();
        assert_eq!(value["particleCount"], 120);
        assert_eq!(value["startVelocity"], 35.0);
        assert_eq!(value["disableForReducedMotion"], true);
        assert_eq!(value["origin"], json!({ "x": 0.5, "y": 0.7 }));
    }

    #[test]
    fn engine_scripts_load_core_first() {
        assert_eq!(AnimationEngineGroup.scripts()[0], config::GSAP_CORE_URL);
        assert_eq!(AnimationEngineGroup.scripts().len(), 3);
        assert_eq!(ConfettiGroup.scripts(), &[config::CONFETTI_URL]);
    }
}
