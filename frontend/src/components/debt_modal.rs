use shared::currency::parse_grouped_input;
use shared::validation::{validate_debt_input, ValidationError};
use shared::{DebtKind, DebtStatus, NewDebt};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::dates;

#[derive(Properties, PartialEq)]
pub struct DebtModalProps {
    pub is_open: bool,
    pub user_id: Uuid,
    pub on_create: Callback<NewDebt>,
    pub on_close: Callback<()>,
}

/// Creation-only form. Settled debts are never edited; they are marked paid
/// or deleted from the list.
#[function_component(DebtModal)]
pub fn debt_modal(props: &DebtModalProps) -> Html {
    let kind = use_state(|| DebtKind::Borrow);
    let title = use_state(String::new);
    let counterparty = use_state(String::new);
    let amount = use_state(String::new); // digits only
    let date = use_state(|| dates::format_input(dates::today()));
    let notes = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    use_effect_with(props.is_open, {
        let kind = kind.clone();
        let title = title.clone();
        let counterparty = counterparty.clone();
        let amount = amount.clone();
        let date = date.clone();
        let notes = notes.clone();
        let error = error.clone();
        move |is_open: &bool| {
            if *is_open {
                kind.set(DebtKind::Borrow);
                title.set(String::new());
                counterparty.set(String::new());
                amount.set(String::new());
                date.set(dates::format_input(dates::today()));
                notes.set(String::new());
                error.set(None);
            }
            || ()
        }
    });

    let set_kind = |next: DebtKind| {
        let kind = kind.clone();
        Callback::from(move |_: MouseEvent| kind.set(next))
    };

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_counterparty_change = {
        let counterparty = counterparty.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            counterparty.set(input.value());
        })
    };

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = parse_grouped_input(&input.value());
            input.set_value(&parsed.display);
            amount.set(parsed.digits);
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_notes_change = {
        let notes = notes.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(area.value());
        })
    };

    let on_submit = {
        let kind = kind.clone();
        let title = title.clone();
        let counterparty = counterparty.clone();
        let amount = amount.clone();
        let date = date.clone();
        let notes = notes.clone();
        let error = error.clone();
        let user_id = props.user_id;
        let on_create = props.on_create.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let amount_value = amount.parse::<f64>().unwrap_or(0.0);
            if let Err(err) = validate_debt_input(&title, &counterparty, amount_value) {
                error.set(Some(err.to_string()));
                return;
            }
            let parsed_date = match dates::parse_input(&date) {
                Some(parsed) => parsed,
                None => {
                    error.set(Some(ValidationError::InvalidDate.to_string()));
                    return;
                }
            };

            let trimmed_notes = notes.trim();
            on_create.emit(NewDebt {
                user_id,
                title: title.trim().to_string(),
                amount: amount_value,
                kind: *kind,
                counterparty: counterparty.trim().to_string(),
                date: parsed_date,
                status: DebtStatus::Pending,
                notes: if trimmed_notes.is_empty() {
                    None
                } else {
                    Some(trimmed_notes.to_string())
                },
            });
            on_close.emit(());
        })
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let counterparty_label = match *kind {
        DebtKind::Borrow => "Vay của ai",
        DebtKind::Lend => "Cho ai vay",
    };
    let amount_display = parse_grouped_input(&amount).display;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Thêm khoản nợ"}</h3>

                {if let Some(message) = (*error).clone() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="kind-toggle">
                        <button
                            type="button"
                            class={if *kind == DebtKind::Borrow { "toggle-btn active expense" } else { "toggle-btn" }}
                            onclick={set_kind(DebtKind::Borrow)}
                        >
                            {"Đi vay"}
                        </button>
                        <button
                            type="button"
                            class={if *kind == DebtKind::Lend { "toggle-btn active income" } else { "toggle-btn" }}
                            onclick={set_kind(DebtKind::Lend)}
                        >
                            {"Cho vay"}
                        </button>
                    </div>

                    <div class="form-group">
                        <label for="debt-title">{"Tiêu đề"}</label>
                        <input
                            id="debt-title"
                            type="text"
                            placeholder="Mượn tiền sửa xe..."
                            value={(*title).clone()}
                            onchange={on_title_change}
                        />
                    </div>

                    <div class="form-group">
                        <label for="debt-counterparty">{counterparty_label}</label>
                        <input
                            id="debt-counterparty"
                            type="text"
                            placeholder="Tên người vay/cho vay"
                            value={(*counterparty).clone()}
                            onchange={on_counterparty_change}
                        />
                    </div>

                    <div class="form-group">
                        <label for="debt-amount">{"Số tiền (₫)"}</label>
                        <input
                            id="debt-amount"
                            type="text"
                            inputmode="numeric"
                            placeholder="1.000.000"
                            value={amount_display}
                            oninput={on_amount_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="debt-date">{"Ngày"}</label>
                        <input id="debt-date" type="date" value={(*date).clone()} onchange={on_date_change} />
                    </div>

                    <div class="form-group">
                        <label for="debt-notes">{"Ghi chú"}</label>
                        <textarea id="debt-notes" value={(*notes).clone()} onchange={on_notes_change} />
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary">{"Lưu"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Hủy"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
