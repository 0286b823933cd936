use shared::validation::validate_credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    /// Switches the auth screen to the registration form.
    pub on_switch: Callback<()>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let ctx = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let client = ctx.client.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = validate_credentials(&email, &password) {
                error.set(Some(err.to_string()));
                return;
            }

            let client = client.clone();
            let email = email.trim().to_string();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                submitting.set(true);
                // the provider picks the session up through the auth listener
                if let Err(err) = client.sign_in(&email, &password).await {
                    error.set(Some(err.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    let on_switch = {
        let on_switch = props.on_switch.clone();
        Callback::from(move |_: MouseEvent| on_switch.emit(()))
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-brand">{"Finbook"}</h1>
                <h2 class="auth-title">{"Đăng nhập"}</h2>

                {if let Some(message) = (*error).clone() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-email">{"Email"}</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="ban@example.com"
                            value={(*email).clone()}
                            onchange={on_email_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Mật khẩu"}</label>
                        <input
                            id="login-password"
                            type="password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        {if *submitting { "Đang đăng nhập..." } else { "Đăng nhập" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"Chưa có tài khoản? "}
                    <button class="link-button" onclick={on_switch}>{"Đăng ký"}</button>
                </p>
            </div>
        </div>
    }
}
