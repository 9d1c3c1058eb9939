use log::warn;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::strings::ui;
use crate::i18n::use_locale;
use crate::loader::groups::{AnimationEngine, ScrollRange, Tween, TweenVars};
use crate::loader::hook::{use_animation_engine, Availability};

// Choreography over hero scroll progress (0 = top of page, 1 = hero fully scrolled past).
const TITLE_LIFT: (f64, f64) = (0.0, 0.55);
const TITLE_FADE: (f64, f64) = (0.15, 0.55);
const MEDIA_ZOOM: (f64, f64) = (0.0, 1.0);
const CURTAIN: (f64, f64) = (0.4, 1.0);

const TITLE_LIFT_PX: f64 = -80.0;
const MEDIA_SCALE_END: f64 = 1.12;

// `.hero` min-height in viewport heights, used until the element has been measured.
const HERO_HEIGHT_VH: f64 = 1.8;

const HERO_RANGE: ScrollRange = ScrollRange {
    trigger: ".hero",
    start: "top top",
    end: "bottom top",
    scrub: 0.6,
    pin: false,
};

/// Styles applied when the animation engine is unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub title_opacity: f64,
    pub title_y: f64,
    pub media_scale: f64,
    /// Bottom inset of the media clip, in percent. 100 hides the media completely.
    pub curtain: f64,
}

/// Fraction of the way through `range` at `progress`, clamped to 0..=1.
fn ramp(progress: f64, (start, end): (f64, f64)) -> f64 {
    if end <= start {
        return if progress >= end { 1.0 } else { 0.0 };
    }
    ((progress - start) / (end - start)).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Progress through `HERO_RANGE`: 0 when the hero's top meets the viewport top, 1 when its
/// bottom does.
fn scroll_progress(scroll_y: f64, hero_top: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    (scroll_y - hero_top) / hero_height
}

pub fn hero_frame(progress: f64) -> HeroFrame {
    let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    HeroFrame {
        title_opacity: 1.0 - ramp(progress, TITLE_FADE),
        title_y: lerp(0.0, TITLE_LIFT_PX, ramp(progress, TITLE_LIFT)),
        media_scale: lerp(1.0, MEDIA_SCALE_END, ramp(progress, MEDIA_ZOOM)),
        curtain: lerp(0.0, 100.0, ramp(progress, CURTAIN)),
    }
}

/// The same choreography as `hero_frame`, as engine tweens on a one-second timeline.
fn hero_timeline() -> Vec<Tween> {
    let span = |(start, end): (f64, f64)| Some(end - start);
    vec![
        Tween {
            target: ".hero__title",
            vars: TweenVars {
                y: Some(TITLE_LIFT_PX),
                duration: span(TITLE_LIFT),
                ease: Some("none"),
                ..TweenVars::default()
            },
            at: TITLE_LIFT.0,
        },
        Tween {
            target: ".hero__title",
            vars: TweenVars {
                opacity: Some(0.0),
                duration: span(TITLE_FADE),
                ease: Some("none"),
                ..TweenVars::default()
            },
            at: TITLE_FADE.0,
        },
        Tween {
            target: ".hero__media",
            vars: TweenVars {
                scale: Some(MEDIA_SCALE_END),
                duration: span(MEDIA_ZOOM),
                ease: Some("none"),
                ..TweenVars::default()
            },
            at: MEDIA_ZOOM.0,
        },
        Tween {
            target: ".hero__media",
            vars: TweenVars {
                clip_path: Some("inset(0% 0% 100% 0%)"),
                duration: span(CURTAIN),
                ease: Some("power1.in"),
                ..TweenVars::default()
            },
            at: CURTAIN.0,
        },
    ]
}

/// Pointer offset from the viewport centre, each axis in -0.5..=0.5.
fn pointer_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    ((x / width - 0.5).clamp(-0.5, 0.5), (y / height - 0.5).clamp(-0.5, 0.5))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let strings = ui(use_locale());
    let engine = use_animation_engine();
    let hero_ref = use_node_ref();
    let pointer = use_state(|| (0.0_f64, 0.0_f64));
    let (_, scroll_y) = use_window_scroll();
    let (width, height) = use_window_size();

    {
        use_effect_with_deps(
            move |engine: &Availability<AnimationEngine>| {
                let timeline = engine.ready().and_then(|engine| {
                    engine
                        .scrub_timeline(&HERO_RANGE, &hero_timeline())
                        .map_err(|err| warn!("hero timeline failed: {:?}", err))
                        .ok()
                });
                move || {
                    if let Some(timeline) = timeline {
                        if let Err(err) = timeline.kill() {
                            warn!("hero timeline cleanup failed: {:?}", err);
                        }
                    }
                }
            },
            engine.clone(),
        );
    }

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            pointer.set(pointer_offset(
                e.client_x() as f64,
                e.client_y() as f64,
                width,
                height,
            ));
        })
    };

    let onmouseleave = {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set((0.0, 0.0)))
    };

    let (px, py) = *pointer;
    let media_layer = format!(
        "transform: translate3d({:.1}px, {:.1}px, 0);",
        px * -28.0,
        py * -18.0
    );
    let text_layer = format!(
        "transform: translate3d({:.1}px, {:.1}px, 0);",
        px * 14.0,
        py * 9.0
    );

    // Native fallback: only touch the tweened elements when the engine is not driving them.
    let (title_style, media_style) = match engine {
        Availability::Ready(_) => (String::new(), String::new()),
        _ => {
            let (hero_top, hero_height) = hero_ref
                .cast::<HtmlElement>()
                .map(|hero| (hero.offset_top() as f64, hero.offset_height() as f64))
                .unwrap_or((0.0, height * HERO_HEIGHT_VH));
            let frame = hero_frame(scroll_progress(scroll_y, hero_top, hero_height));
            (
                format!(
                    "opacity: {:.3}; transform: translateY({:.1}px);",
                    frame.title_opacity, frame.title_y
                ),
                format!(
                    "transform: scale({:.3}); clip-path: inset(0% 0% {:.1}% 0%);",
                    frame.media_scale, frame.curtain
                ),
            )
        }
    };

    html! {
        <section class="hero" ref={hero_ref} {onmousemove} {onmouseleave}>
            <div class="hero__media" style={media_style}>
                <div class="hero__layer" style={media_layer}>
                    <img src="/assets/hero/treatment-room.jpg" alt="" />
                </div>
            </div>
            <div class="hero__title" style={title_style}>
                <div class="hero__layer" style={text_layer}>
                    <p class="hero__kicker">{strings.hero_kicker}</p>
                    <h1>
                        { for strings.hero_title.iter().map(|line| html! { <span>{*line}</span> }) }
                    </h1>
                    <p class="hero__lead">{strings.hero_lead}</p>
                    <a href="#book" class="cta-button">
                        <span>{strings.hero_cta}</span>
                        <i class="arrow">{"→"}</i>
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 180vh;
                    background: #f6f1eb;
                    color: #2b2420;
                    overflow: hidden;
                }
                .hero__media {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    transform-origin: center top;
                }
                .hero__media img {
                    width: 110%;
                    height: 110%;
                    margin: -5%;
                    object-fit: cover;
                }
                .hero__layer {
                    transition: transform 0.35s ease-out;
                    will-change: transform;
                }
                .hero__title {
                    position: absolute;
                    top: 22vh;
                    left: 8vw;
                    max-width: 560px;
                }
                .hero__kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.8rem;
                    color: #8a6d57;
                }
                .hero__title h1 span {
                    display: block;
                    font-size: clamp(2.8rem, 7vw, 5.5rem);
                    font-weight: 300;
                    line-height: 1.05;
                }
                .hero__lead {
                    font-size: 1.1rem;
                    line-height: 1.6;
                    margin: 1.5rem 0 2rem;
                }
                @media (max-width: 768px) {
                    .hero__title {
                        top: 14vh;
                        left: 6vw;
                        right: 6vw;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_shows_everything() {
        assert_eq!(
            hero_frame(0.0),
            HeroFrame {
                title_opacity: 1.0,
                title_y: 0.0,
                media_scale: 1.0,
                curtain: 0.0,
            }
        );
    }

    #[test]
    fn fully_scrolled_hides_title_and_media() {
        let frame = hero_frame(1.0);
        assert_eq!(frame.title_opacity, 0.0);
        assert_eq!(frame.title_y, TITLE_LIFT_PX);
        assert!((frame.media_scale - MEDIA_SCALE_END).abs() < 1e-9);
        assert_eq!(frame.curtain, 100.0);
    }

    #[test]
    fn title_holds_before_fading() {
        assert_eq!(hero_frame(0.1).title_opacity, 1.0);
        assert!((hero_frame(0.35).title_opacity - 0.5).abs() < 1e-9);
        assert_eq!(hero_frame(0.4).curtain, 0.0);
        assert!((hero_frame(0.7).curtain - 50.0).abs() < 1e-9);
    }

    #[test]
    fn progress_outside_range_is_clamped() {
        assert_eq!(hero_frame(-3.0), hero_frame(0.0));
        assert_eq!(hero_frame(7.5), hero_frame(1.0));
        assert_eq!(hero_frame(f64::NAN), hero_frame(0.0));
    }

    #[test]
    fn progress_spans_the_whole_hero_not_one_viewport() {
        let viewport = 800.0;
        let hero_height = viewport * HERO_HEIGHT_VH;

        assert_eq!(scroll_progress(0.0, 0.0, hero_height), 0.0);
        // One viewport down the timeline is just past halfway, not finished.
        let one_screen = scroll_progress(viewport, 0.0, hero_height);
        assert!((one_screen - 1.0 / HERO_HEIGHT_VH).abs() < 1e-9);
        assert!(hero_frame(one_screen).curtain < 100.0);
        assert_eq!(scroll_progress(hero_height, 0.0, hero_height), 1.0);
        assert_eq!(hero_frame(scroll_progress(hero_height, 0.0, hero_height)).curtain, 100.0);
    }

    #[test]
    fn progress_starts_at_the_hero_top() {
        assert_eq!(scroll_progress(120.0, 120.0, 1440.0), 0.0);
        assert_eq!(scroll_progress(50.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn timeline_fits_in_one_second() {
        for tween in hero_timeline() {
            let end = tween.at + tween.vars.duration.unwrap_or(0.0);
            assert!(end <= 1.0 + 1e-9, "{} ends at {}", tween.target, end);
        }
    }

    #[test]
    fn pointer_offset_is_centred() {
        assert_eq!(pointer_offset(500.0, 300.0, 1000.0, 600.0), (0.0, 0.0));
        assert_eq!(pointer_offset(0.0, 600.0, 1000.0, 600.0), (-0.5, 0.5));
        assert_eq!(pointer_offset(10.0, 10.0, 0.0, 600.0), (0.0, 0.0));
    }
}
