use yew::prelude::*;

use crate::components::booking::BookingCta;
use crate::components::departments::DepartmentShowcase;
use crate::components::hero::Hero;
use crate::components::journey::PatientJourney;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing">
            <Hero />
            <DepartmentShowcase />
            <PatientJourney />
            <BookingCta />
        </div>
    }
}
