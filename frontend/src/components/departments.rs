use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::departments::DEPARTMENTS;
use crate::content::strings::ui;
use crate::i18n::use_locale;

#[function_component(DepartmentShowcase)]
pub fn department_showcase() -> Html {
    let locale = use_locale();
    let strings = ui(locale);
    let selected = use_state(|| 0usize);

    let tabs = DEPARTMENTS.iter().enumerate().map(|(index, department)| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                selected.set(index);
            })
        };
        html! {
            <button
                class={classes!("department-tab", (*selected == index).then(|| "active"))}
                {onclick}
            >
                {department.name.get(locale)}
            </button>
        }
    });

    let department = &DEPARTMENTS[(*selected).min(DEPARTMENTS.len() - 1)];

    html! {
        <section class="departments" id="treatments">
            <h2>{strings.departments_title}</h2>
            <p class="section-lead">{strings.departments_lead}</p>
            <div class="department-tabs">
                { for tabs }
            </div>
            <div class="department-panel" key={department.slug}>
                <img src={department.image} alt={department.name.get(locale)} />
                <div>
                    <h3>{department.name.get(locale)}</h3>
                    <p>{department.summary.get(locale)}</p>
                    <ul>
                        { for department.services.iter().map(|service| html! { <li>{service.get(locale)}</li> }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .departments {
                    padding: 6rem 8vw;
                    background: #fffdfa;
                }
                .department-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin: 2rem 0;
                }
                .department-tab {
                    border: 1px solid #d8c7b8;
                    background: transparent;
                    border-radius: 999px;
                    padding: 0.6rem 1.4rem;
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .department-tab.active {
                    background: #2b2420;
                    color: #fffdfa;
                }
                .department-panel {
                    display: grid;
                    grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
                    gap: 3rem;
                    align-items: center;
                    animation: fadeIn 0.5s ease-out;
                }
                .department-panel img {
                    width: 100%;
                    border-radius: 12px;
                }
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .department-panel {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
