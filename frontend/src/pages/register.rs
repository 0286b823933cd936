use shared::validation::validate_registration;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    /// Switches the auth screen back to the login form.
    pub on_switch: Callback<()>,
}

#[function_component(Register)]
pub fn register(props: &RegisterProps) -> Html {
    let ctx = use_session();
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_name_change = bind_input(&full_name);
    let on_email_change = bind_input(&email);
    let on_password_change = bind_input(&password);
    let on_confirm_change = bind_input(&confirm);

    let on_submit = {
        let client = ctx.client.clone();
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = validate_registration(&full_name, &email, &password, &confirm) {
                error.set(Some(err.to_string()));
                return;
            }

            let client = client.clone();
            let full_name = full_name.trim().to_string();
            let email = email.trim().to_string();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                submitting.set(true);
                if let Err(err) = client.sign_up(&email, &password, &full_name).await {
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
                <h2 class="auth-title">{"Đăng ký"}</h2>

                {if let Some(message) = (*error).clone() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="register-name">{"Họ tên"}</label>
                        <input
                            id="register-name"
                            type="text"
                            placeholder="Nguyễn Văn A"
                            value={(*full_name).clone()}
                            onchange={on_name_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">{"Email"}</label>
                        <input
                            id="register-email"
                            type="email"
                            placeholder="ban@example.com"
                            value={(*email).clone()}
                            onchange={on_email_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-password">{"Mật khẩu"}</label>
                        <input
                            id="register-password"
                            type="password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-confirm">{"Nhập lại mật khẩu"}</label>
                        <input
                            id="register-confirm"
                            type="password"
                            value={(*confirm).clone()}
                            onchange={on_confirm_change}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        {if *submitting { "Đang đăng ký..." } else { "Đăng ký" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"Đã có tài khoản? "}
                    <button class="link-button" onclick={on_switch}>{"Đăng nhập"}</button>
                </p>
            </div>
        </div>
    }
}
