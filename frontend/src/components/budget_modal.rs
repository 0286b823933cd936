use std::rc::Rc;

use shared::categories::CategoryRegistry;
use shared::currency::parse_grouped_input;
use shared::validation::{validate_budget_input, ValidationError};
use shared::{Budget, MonthKey, NewBudget, TransactionKind, UpdateBudget};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetModalProps {
    pub is_open: bool,
    pub user_id: Uuid,
    /// Month the budget page is showing; new budgets land here.
    pub month: MonthKey,
    pub registry: Rc<CategoryRegistry>,
    /// All budgets the user already has, for the duplicate check.
    pub existing: Vec<Budget>,
    pub editing: Option<Budget>,
    pub on_create: Callback<NewBudget>,
    pub on_update: Callback<(Uuid, UpdateBudget)>,
    pub on_close: Callback<()>,
}

#[function_component(BudgetModal)]
pub fn budget_modal(props: &BudgetModalProps) -> Html {
    let category_id = use_state(String::new);
    let limit = use_state(String::new); // digits only
    let error = use_state(|| Option::<String>::None);

    use_effect_with((props.is_open, props.editing.clone()), {
        let category_id = category_id.clone();
        let limit = limit.clone();
        let error = error.clone();
        move |(is_open, editing): &(bool, Option<Budget>)| {
            if *is_open {
                match editing {
                    Some(budget) => {
                        category_id.set(budget.category_id.to_string());
                        limit.set((budget.limit_amount.round() as i64).to_string());
                    }
                    None => {
                        category_id.set(String::new());
                        limit.set(String::new());
                    }
                }
                error.set(None);
            }
            || ()
        }
    });

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
        })
    };

    let on_limit_input = {
        let limit = limit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = parse_grouped_input(&input.value());
            input.set_value(&parsed.display);
            limit.set(parsed.digits);
        })
    };

    let on_submit = {
        let category_id = category_id.clone();
        let limit = limit.clone();
        let error = error.clone();
        let existing = props.existing.clone();
        let editing = props.editing.clone();
        let user_id = props.user_id;
        let month = props.month;
        let on_create = props.on_create.clone();
        let on_update = props.on_update.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed_category = match category_id.parse::<Uuid>() {
                Ok(id) => id,
                Err(_) => {
                    error.set(Some(ValidationError::MissingCategory.to_string()));
                    return;
                }
            };
            let limit_value = limit.parse::<f64>().unwrap_or(0.0);

            // the row being edited is not its own duplicate
            let others: Vec<Budget> = existing
                .iter()
                .filter(|b| editing.as_ref().map(|e| e.id) != Some(b.id))
                .cloned()
                .collect();
            if let Err(err) = validate_budget_input(limit_value, parsed_category, month, &others) {
                error.set(Some(err.to_string()));
                return;
            }

            match &editing {
                Some(budget) => on_update.emit((
                    budget.id,
                    UpdateBudget {
                        category_id: parsed_category,
                        month,
                        limit_amount: limit_value,
                    },
                )),
                None => on_create.emit(NewBudget {
                    user_id,
                    category_id: parsed_category,
                    month,
                    limit_amount: limit_value,
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
        "Sửa ngân sách"
    } else {
        "Thêm ngân sách"
    };
    let limit_display = parse_grouped_input(&limit).display;

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
                    <div class="form-group">
                        <label for="budget-category">{"Danh mục chi tiêu"}</label>
                        <select id="budget-category" onchange={on_category_change}>
                            <option value="" selected={category_id.is_empty()}>{"-- Chọn danh mục --"}</option>
                            {for props.registry.list_by_kind(TransactionKind::Expense).iter().map(|category| {
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
                        <label for="budget-limit">{"Hạn mức (₫)"}</label>
                        <input
                            id="budget-limit"
                            type="text"
                            inputmode="numeric"
                            placeholder="2.000.000"
                            value={limit_display}
                            oninput={on_limit_input}
                        />
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
