use std::rc::Rc;

use shared::categories::CategoryRegistry;
use shared::currency::parse_grouped_input;
use shared::validation::{validate_transaction_input, ValidationError};
use shared::{NewTransaction, Transaction, TransactionKind, UpdateTransaction};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::dates;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub is_open: bool,
    pub user_id: Uuid,
    pub registry: Rc<CategoryRegistry>,
    /// Present when editing an existing transaction.
    pub editing: Option<Transaction>,
    pub on_create: Callback<NewTransaction>,
    pub on_update: Callback<(Uuid, UpdateTransaction)>,
    pub on_close: Callback<()>,
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let title = use_state(String::new);
    let amount = use_state(String::new); // digits only
    let kind = use_state(|| TransactionKind::Expense);
    let category_id = use_state(String::new);
    let date = use_state(|| dates::format_input(dates::today()));
    let notes = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    // repopulate whenever the modal opens
    use_effect_with((props.is_open, props.editing.clone()), {
        let title = title.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let category_id = category_id.clone();
        let date = date.clone();
        let notes = notes.clone();
        let error = error.clone();
        move |(is_open, editing): &(bool, Option<Transaction>)| {
            if *is_open {
                match editing {
                    Some(tx) => {
                        title.set(tx.title.clone());
                        amount.set((tx.amount.round() as i64).to_string());
                        kind.set(tx.kind);
                        category_id.set(
                            tx.category_id.map(|id| id.to_string()).unwrap_or_default(),
                        );
                        date.set(dates::format_input(tx.date));
                        notes.set(tx.notes.clone().unwrap_or_default());
                    }
                    None => {
                        title.set(String::new());
                        amount.set(String::new());
                        kind.set(TransactionKind::Expense);
                        category_id.set(String::new());
                        date.set(dates::format_input(dates::today()));
                        notes.set(String::new());
                    }
                }
                error.set(None);
            }
            || ()
        }
    });

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    // live regrouping: the field always shows the grouped form
    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = parse_grouped_input(&input.value());
            input.set_value(&parsed.display);
            amount.set(parsed.digits);
        })
    };

    let set_kind = |next: TransactionKind| {
        let kind = kind.clone();
        let category_id = category_id.clone();
        Callback::from(move |_: MouseEvent| {
            kind.set(next);
            // the picker only shows categories of the active kind
            category_id.set(String::new());
        })
    };

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
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
        let title = title.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let category_id = category_id.clone();
        let date = date.clone();
        let notes = notes.clone();
        let error = error.clone();
        let registry = props.registry.clone();
        let editing = props.editing.clone();
        let user_id = props.user_id;
        let on_create = props.on_create.clone();
        let on_update = props.on_update.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let amount_value = amount.parse::<f64>().unwrap_or(0.0);
            let parsed_category = category_id.parse::<Uuid>().ok();
            let category = parsed_category.and_then(|id| registry.lookup(id));

            if let Err(err) = validate_transaction_input(&title, amount_value, category, *kind) {
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
            let notes_value = if trimmed_notes.is_empty() {
                None
            } else {
                Some(trimmed_notes.to_string())
            };

            match &editing {
                Some(tx) => on_update.emit((
                    tx.id,
                    UpdateTransaction {
                        title: title.trim().to_string(),
                        amount: amount_value,
                        kind: *kind,
                        category_id: parsed_category,
                        date: parsed_date,
                        notes: notes_value,
                    },
                )),
                None => on_create.emit(NewTransaction {
                    user_id,
                    title: title.trim().to_string(),
                    amount: amount_value,
                    kind: *kind,
                    category_id: parsed_category,
                    date: parsed_date,
                    notes: notes_value,
                }),
            }
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

    let heading = if props.editing.is_some() {
        "Sửa giao dịch"
    } else {
        "Thêm giao dịch"
    };
    let amount_display = parse_grouped_input(&amount).display;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{heading}</h3>

                {if let Some(message) = (*error).clone() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="kind-toggle">
                        <button
                            type="button"
                            class={if *kind == TransactionKind::Expense { "toggle-btn active expense" } else { "toggle-btn" }}
                            onclick={set_kind(TransactionKind::Expense)}
                        >
                            {"Chi tiêu"}
                        </button>
                        <button
                            type="button"
                            class={if *kind == TransactionKind::Income { "toggle-btn active income" } else { "toggle-btn" }}
                            onclick={set_kind(TransactionKind::Income)}
                        >
                            {"Thu nhập"}
                        </button>
                    </div>

                    <div class="form-group">
                        <label for="tx-title">{"Tiêu đề"}</label>
                        <input
                            id="tx-title"
                            type="text"
                            placeholder="Cơm trưa, lương tháng..."
                            value={(*title).clone()}
                            onchange={on_title_change}
                        />
                    </div>

                    <div class="form-group">
                        <label for="tx-amount">{"Số tiền (₫)"}</label>
                        <input
                            id="tx-amount"
                            type="text"
                            inputmode="numeric"
                            placeholder="50.000"
                            value={amount_display}
                            oninput={on_amount_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="tx-category">{"Danh mục"}</label>
                        <select id="tx-category" onchange={on_category_change} value={(*category_id).clone()}>
                            <option value="" selected={category_id.is_empty()}>{"-- Chọn danh mục --"}</option>
                            {for props.registry.list_by_kind(*kind).iter().map(|category| {
                                let id = category.id.to_string();
                                html! {
                                    <option value={id.clone()} selected={*category_id == id}>
                                        {&category.name}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="tx-date">{"Ngày"}</label>
                        <input id="tx-date" type="date" value={(*date).clone()} onchange={on_date_change} />
                    </div>

                    <div class="form-group">
                        <label for="tx-notes">{"Ghi chú"}</label>
                        <textarea id="tx-notes" value={(*notes).clone()} onchange={on_notes_change} />
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
