use log::warn;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::privacy::{last_updated, policy, privacy_mailto};
use crate::content::strings::ui;
use crate::i18n::{format_date, use_locale};
use crate::loader::hook::{use_animation_engine, Availability};
use crate::Route;

// Keeps headings clear of the fixed navigation bar.
const NAV_OFFSET_PX: f64 = 88.0;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let locale = use_locale();
    let strings = ui(locale);
    let policy = policy(locale);
    let engine = use_animation_engine();

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let jump_to = |anchor: &'static str| {
        let engine = engine.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let selector = format!("#{}", anchor);
            if let Availability::Ready(engine) = &engine {
                match engine.scroll_to(&selector, 0.8, NAV_OFFSET_PX) {
                    Ok(()) => return,
                    Err(err) => warn!("animated scroll failed: {:?}", err),
                }
            }
            if let Some(section) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(anchor))
            {
                section.scroll_into_view();
            }
        })
    };

    html! {
        <div class="legal-content">
            <div>
                <h1>{policy.title}</h1>
                <p class="legal-updated">
                    {format!("{}: {}", strings.privacy_updated, format_date(last_updated(), locale))}
                </p>
                <p>{policy.intro}</p>

                <nav class="legal-toc">
                    <h2>{strings.privacy_contents}</h2>
                    <ol>
                        {
                            for policy.sections.iter().map(|section| html! {
                                <li>
                                    <a href={format!("#{}", section.anchor)} onclick={jump_to(section.anchor)}>
                                        {section.heading}
                                    </a>
                                </li>
                            })
                        }
                    </ol>
                </nav>

                {
                    for policy.sections.iter().map(|section| html! {
                        <section id={section.anchor}>
                            <h2>{section.heading}</h2>
                            { for section.paragraphs.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                            {
                                if section.bullets.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <ul>
                                            { for section.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                                        </ul>
                                    }
                                }
                            }
                        </section>
                    })
                }

                <section id="privacy-contact">
                    <h2>{policy.contact_heading}</h2>
                    { for policy.contact_lines.iter().map(|line| html! { <p>{*line}</p> }) }
                    <p><a href={privacy_mailto()}>{crate::config::PRIVACY_EMAIL}</a></p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{strings.back_home}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #fffdfa;
                    padding: 7rem 2rem 4rem;
                    color: #2b2420;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .legal-content > div {
                    max-width: 760px;
                    margin: 0 auto;
                }
                .legal-content h1 {
                    font-size: 2.4rem;
                    font-weight: 300;
                    margin-bottom: 0.5rem;
                }
                .legal-updated {
                    color: #8a6d57;
                    font-size: 0.9rem;
                    margin-bottom: 2rem;
                }
                .legal-content section {
                    border-top: 1px solid #eadfd4;
                    padding: 2rem 0;
                }
                .legal-content h2 {
                    font-size: 1.3rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .legal-content p, .legal-content li {
                    color: #5b4e45;
                    line-height: 1.7;
                    margin-bottom: 0.75rem;
                }
                .legal-toc ol {
                    padding-left: 1.2rem;
                    margin-bottom: 2rem;
                }
                .legal-toc a, .legal-links a, .legal-content section a {
                    color: #8a6d57;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .legal-toc a:hover, .legal-links a:hover {
                    color: #2b2420;
                }
                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
