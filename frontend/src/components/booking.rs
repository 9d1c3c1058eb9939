use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::strings::ui;
use crate::i18n::use_locale;
use crate::loader::groups::{Burst, Origin};
use crate::loader::hook::use_confetti;

const CELEBRATION: Burst = Burst {
    particle_count: 140,
    spread: 75.0,
    start_velocity: 38.0,
    origin: Origin { x: 0.5, y: 0.75 },
    colors: &["#c9a27e", "#f6f1eb", "#8a6d57", "#2b2420"],
    disable_for_reduced_motion: true,
};

/// Consultation call-to-action. Confetti is decoration: the request goes through without it.
#[function_component(BookingCta)]
pub fn booking_cta() -> Html {
    let strings = ui(use_locale());
    let confetti = use_confetti();
    let requested = use_state(|| false);

    let onclick = {
        let requested = requested.clone();
        let confetti = confetti.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            requested.set(true);
            match confetti.ready() {
                Some(confetti) => {
                    if let Err(err) = confetti.fire(&CELEBRATION) {
                        warn!("confetti failed: {:?}", err);
                    }
                }
                None => debug!("confetti not available, skipping"),
            }
        })
    };

    html! {
        <section class="booking" id="book">
            <h2>{strings.booking_title}</h2>
            <p class="section-lead">{strings.booking_lead}</p>
            {
                if *requested {
                    html! {
                        <div class="booking__thanks">
                            <p>{strings.booking_thanks}</p>
                            <p>
                                <a href={format!("tel:{}", config::CLINIC_PHONE.replace(' ', ""))}>{config::CLINIC_PHONE}</a>
                                {" · "}
                                <a href={format!("mailto:{}", config::CLINIC_EMAIL)}>{config::CLINIC_EMAIL}</a>
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <button class="cta-button" {onclick}>
                            <span>{strings.booking_button}</span>
                            <i class="arrow">{"→"}</i>
                        </button>
                    }
                }
            }
            <style>
                {r#"
                .booking {
                    padding: 7rem 8vw;
                    text-align: center;
                    background: #f6f1eb;
                }
                .booking__thanks {
                    animation: fadeIn 0.6s ease-out;
                }
                .booking__thanks a {
                    color: #8a6d57;
                }
                "#}
            </style>
        </section>
    }
}
