use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod loader;
mod content {
    pub mod departments;
    pub mod journey;
    pub mod privacy;
    pub mod strings;
}
mod components {
    pub mod booking;
    pub mod departments;
    pub mod footer;
    pub mod hero;
    pub mod journey;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use components::footer::Footer;
use content::strings::ui;
use i18n::Locale;
use pages::{landing::Landing, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let strings = ui(i18n::use_locale());
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{strings.not_found}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{strings.back_home}</Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
    pub on_locale_change: Callback<Locale>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { locale, on_locale_change } = props;
    let strings = ui(*locale);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            let scroll_top = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(scroll_top > 80.0);
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let locale_buttons = Locale::ALL.iter().map(|&option| {
        let on_locale_change = on_locale_change.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_locale_change.emit(option);
        });
        html! {
            <button
                class={classes!("nav-locale", (option == *locale).then(|| "active"))}
                {onclick}
            >
                {option.label()}
            </button>
        }
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::CLINIC_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <a href="/#treatments" class="nav-link">{strings.nav_treatments}</a>
                    <a href="/#journey" class="nav-link">{strings.nav_journey}</a>
                    <Link<Route> to={Route::Privacy} classes="nav-link">
                        {strings.nav_privacy}
                    </Link<Route>>
                    <div class="nav-locales">
                        { for locale_buttons }
                    </div>
                    <a href="/#book" class="nav-book-button">{strings.nav_book}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let locale = use_state(Locale::detect);

    {
        use_effect_with_deps(
            move |locale: &Locale| {
                locale.persist();
                || ()
            },
            *locale,
        );
    }

    let handle_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            info!("Switching locale to {}", next.code());
            locale.set(next);
        })
    };

    html! {
        <ContextProvider<Locale> context={*locale}>
            <BrowserRouter>
                <Nav locale={*locale} on_locale_change={handle_locale_change} />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ContextProvider<Locale>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
