use yew::prelude::*;

use crate::content::journey::JOURNEY;
use crate::content::strings::ui;
use crate::i18n::use_locale;

#[function_component(PatientJourney)]
pub fn patient_journey() -> Html {
    let locale = use_locale();

    html! {
        <section class="journey" id="journey">
            <h2>{ui(locale).journey_title}</h2>
            <ol class="journey-steps">
                {
                    for JOURNEY.iter().enumerate().map(|(index, step)| html! {
                        <li class="journey-step">
                            <span class="journey-step__number">{format!("{:02}", index + 1)}</span>
                            <h3>{step.title.get(locale)}</h3>
                            <p>{step.body.get(locale)}</p>
                        </li>
                    })
                }
            </ol>
            <style>
                {r#"
                .journey {
                    padding: 6rem 8vw;
                    background: #2b2420;
                    color: #f6f1eb;
                }
                .journey-steps {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2.5rem;
                }
                .journey-step__number {
                    font-size: 0.85rem;
                    letter-spacing: 0.2em;
                    color: #c9a27e;
                }
                .journey-step p {
                    color: #cfc3b8;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
