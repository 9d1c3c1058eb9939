use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::strings::ui;
use crate::i18n::use_locale;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let strings = ui(use_locale());
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <strong>{config::CLINIC_NAME}</strong>
                    <p>{strings.footer_address}</p>
                </div>
                <div class="footer-links">
                    <a href={format!("tel:{}", config::CLINIC_PHONE.replace(' ', ""))}>{config::CLINIC_PHONE}</a>
                    <a href={format!("mailto:{}", config::CLINIC_EMAIL)}>{config::CLINIC_EMAIL}</a>
                    <Link<Route> to={Route::Privacy}>{strings.nav_privacy}</Link<Route>>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}. {}", year, config::CLINIC_NAME, strings.footer_rights)}</p>
        </footer>
    }
}
