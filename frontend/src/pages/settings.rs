use shared::validation::ValidationError;
use shared::{Category, TransactionKind, UpdateProfile};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::category_modal::CategoryModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::hooks::use_categories::use_categories;
use crate::services::dates;
use crate::session::use_session;

#[function_component(Settings)]
pub fn settings() -> Html {
    let ctx = use_session();
    let user_id = ctx
        .session
        .as_ref()
        .map(|s| s.user.id)
        .unwrap_or_else(Uuid::nil);
    let email = ctx
        .session
        .as_ref()
        .map(|s| s.user.email.clone())
        .unwrap_or_default();

    let categories = use_categories(&ctx.client, user_id);

    let full_name = use_state(String::new);
    let phone = use_state(String::new);
    let birth_date = use_state(String::new);
    let profile_message = use_state(|| Option::<(bool, String)>::None);
    let saving = use_state(|| false);

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Category>::None);
    let pending_delete = use_state(|| Option::<Uuid>::None);
    let signing_out = use_state(|| false);

    // load the stored profile once per user
    use_effect_with(user_id, {
        let client = ctx.client.clone();
        let full_name = full_name.clone();
        let phone = phone.clone();
        let birth_date = birth_date.clone();
        move |user_id| {
            let client = client.clone();
            let full_name = full_name.clone();
            let phone = phone.clone();
            let birth_date = birth_date.clone();
            let user_id = *user_id;
            spawn_local(async move {
                match client.profiles().get(user_id).await {
                    Ok(Some(profile)) => {
                        full_name.set(profile.full_name);
                        phone.set(profile.phone.unwrap_or_default());
                        birth_date.set(
                            profile
                                .birth_date
                                .map(dates::format_input)
                                .unwrap_or_default(),
                        );
                    }
                    Ok(None) => {}
                    Err(err) => {
                        gloo::console::error!("Failed to fetch profile:", err.to_string());
                    }
                }
            });
            || ()
        }
    });

    if ctx.session.is_none() {
        return html! {};
    }

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_name_change = bind_input(&full_name);
    let on_phone_change = bind_input(&phone);
    let on_birth_change = bind_input(&birth_date);

    let on_save_profile = {
        let client = ctx.client.clone();
        let full_name = full_name.clone();
        let phone = phone.clone();
        let birth_date = birth_date.clone();
        let profile_message = profile_message.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if full_name.trim().is_empty() {
                profile_message.set(Some((false, ValidationError::EmptyName.to_string())));
                return;
            }
            let parsed_birth = if birth_date.is_empty() {
                None
            } else {
                match dates::parse_input(&birth_date) {
                    Some(date) => Some(date),
                    None => {
                        profile_message
                            .set(Some((false, ValidationError::InvalidDate.to_string())));
                        return;
                    }
                }
            };

            let patch = UpdateProfile {
                full_name: full_name.trim().to_string(),
                phone: if phone.trim().is_empty() {
                    None
                } else {
                    Some(phone.trim().to_string())
                },
                birth_date: parsed_birth,
            };

            let client = client.clone();
            let profile_message = profile_message.clone();
            let saving = saving.clone();
            spawn_local(async move {
                saving.set(true);
                match client.profiles().update(user_id, &patch).await {
                    Ok(_profile) => {
                        profile_message.set(Some((true, "Đã lưu hồ sơ".to_string())));
                        let profile_message = profile_message.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3_000).await;
                            profile_message.set(None);
                        });
                    }
                    Err(err) => {
                        gloo::console::error!("Failed to update profile:", err.to_string());
                        profile_message.set(Some((false, err.to_string())));
                    }
                }
                saving.set(false);
            });
        })
    };

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

    let open_create = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };
    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let delete = categories.actions.delete.clone();
        Callback::from(move |_| {
            if let Some(id) = *pending_delete {
                delete.emit(id);
            }
            pending_delete.set(None);
        })
    };
    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let registry = categories.state.registry.clone();
    let builtins: Vec<&Category> = registry
        .list_by_kind(TransactionKind::Expense)
        .into_iter()
        .chain(registry.list_by_kind(TransactionKind::Income))
        .filter(|c| c.user_id.is_none())
        .collect();

    html! {
        <div class="page settings-page">
            <h2 class="page-title">{"Cài đặt"}</h2>

            <section class="settings-section">
                <h3 class="section-title">{"Hồ sơ cá nhân"}</h3>

                {if let Some((ok, message)) = (*profile_message).clone() {
                    let class = if ok { "form-message success" } else { "form-message error" };
                    html! { <div class={class}>{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_save_profile}>
                    <div class="form-group">
                        <label for="profile-email">{"Email"}</label>
                        <input id="profile-email" type="email" value={email} disabled=true />
                    </div>
                    <div class="form-group">
                        <label for="profile-name">{"Họ tên"}</label>
                        <input
                            id="profile-name"
                            type="text"
                            value={(*full_name).clone()}
                            onchange={on_name_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-phone">{"Số điện thoại"}</label>
                        <input
                            id="profile-phone"
                            type="tel"
                            value={(*phone).clone()}
                            onchange={on_phone_change}
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-birth">{"Ngày sinh"}</label>
                        <input
                            id="profile-birth"
                            type="date"
                            value={(*birth_date).clone()}
                            onchange={on_birth_change}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        {if *saving { "Đang lưu..." } else { "Lưu hồ sơ" }}
                    </button>
                </form>
            </section>

            <section class="settings-section">
                <div class="section-header">
                    <h3 class="section-title">{"Danh mục của tôi"}</h3>
                    <button class="btn btn-primary" onclick={open_create}>{"+ Thêm danh mục"}</button>
                </div>

                {if let Some(message) = categories.state.error.clone() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                {if categories.state.user_categories.is_empty() {
                    html! { <p class="empty-state">{"Chưa có danh mục riêng nào"}</p> }
                } else {
                    html! {
                        <ul class="category-list">
                            {for categories.state.user_categories.iter().map(|category| {
                                let kind_label = match category.kind {
                                    TransactionKind::Income => "Thu nhập",
                                    TransactionKind::Expense => "Chi tiêu",
                                };
                                let on_edit = {
                                    let editing = editing.clone();
                                    let modal_open = modal_open.clone();
                                    let category = category.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        editing.set(Some(category.clone()));
                                        modal_open.set(true);
                                    })
                                };
                                let on_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let id = category.id;
                                    Callback::from(move |_: MouseEvent| pending_delete.set(Some(id)))
                                };
                                html! {
                                    <li class="category-row" key={category.id.to_string()}>
                                        <span class={classes!("category-chip", category.color.clone())}>
                                            {&category.name}
                                        </span>
                                        <span class="category-kind">{kind_label}</span>
                                        <div class="row-actions">
                                            <button class="icon-button" onclick={on_edit}>{"Sửa"}</button>
                                            <button class="icon-button danger" onclick={on_delete}>{"Xóa"}</button>
                                        </div>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}

                <h4 class="subsection-title">{"Danh mục mặc định"}</h4>
                <ul class="category-list builtin">
                    {for builtins.iter().map(|category| {
                        let kind_label = match category.kind {
                            TransactionKind::Income => "Thu nhập",
                            TransactionKind::Expense => "Chi tiêu",
                        };
                        html! {
                            <li class="category-row locked" key={category.id.to_string()}>
                                <span class={classes!("category-chip", category.color.clone())}>
                                    {&category.name}
                                </span>
                                <span class="category-kind">{kind_label}</span>
                                <span class="category-locked">{"Mặc định"}</span>
                            </li>
                        }
                    })}
                </ul>
            </section>

            <section class="settings-section">
                <h3 class="section-title">{"Tài khoản"}</h3>
                <button class="btn btn-secondary" onclick={on_sign_out} disabled={*signing_out}>
                    {"Đăng xuất"}
                </button>
            </section>

            <CategoryModal
                is_open={*modal_open}
                user_id={user_id}
                editing={(*editing).clone()}
                on_create={categories.actions.create.clone()}
                on_update={categories.actions.update.clone()}
                on_close={close_modal}
            />

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                message={"Xóa danh mục này? Giao dịch cũ sẽ hiển thị là chưa phân loại.".to_string()}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}
