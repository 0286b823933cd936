use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::session::use_session;

const PAGES: [Page; 6] = [
    Page::Dashboard,
    Page::Transactions,
    Page::Budget,
    Page::Debts,
    Page::Reports,
    Page::Settings,
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub email: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let ctx = use_session();
    let signing_out = use_state(|| false);

    let on_sign_out = {
        let client = ctx.client.clone();
        let signing_out = signing_out.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let signing_out = signing_out.clone();
            spawn_local(async move {
                signing_out.set(true);
                if let Err(err) = client.sign_out().await {
                    gloo::console::error!("Failed to sign out:", err.to_string());
                }
                signing_out.set(false);
            });
        })
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">{"Finbook"}</div>
            <ul class="navbar-links">
                {for PAGES.iter().map(|page| {
                    let is_active = *page == props.current;
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        let page = *page;
                        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                    };
                    html! {
                        <li>
                            <button
                                class={if is_active { "navbar-link active" } else { "navbar-link" }}
                                onclick={onclick}
                            >
                                {page.label()}
                            </button>
                        </li>
                    }
                })}
            </ul>
            <div class="navbar-session">
                <span class="navbar-email">{&props.email}</span>
                <button class="btn btn-secondary" onclick={on_sign_out} disabled={*signing_out}>
                    {"Đăng xuất"}
                </button>
            </div>
        </nav>
    }
}
