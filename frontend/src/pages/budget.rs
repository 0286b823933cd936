use shared::budget::{self, BudgetStatus};
use shared::{currency, Budget, MonthKey};
use uuid::Uuid;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::budget_modal::BudgetModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::hooks::use_budgets::use_budgets;
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_transactions::use_transactions;
use crate::services::dates;
use crate::session::use_session;

const MONTH_CHOICES: usize = 12;

fn status_class(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ok => "progress-fill ok",
        BudgetStatus::Near => "progress-fill near",
        BudgetStatus::Over => "progress-fill over",
    }
}

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let ctx = use_session();
    let user_id = ctx
        .session
        .as_ref()
        .map(|s| s.user.id)
        .unwrap_or_else(Uuid::nil);

    let month = use_state(dates::current_month);

    let budgets = use_budgets(&ctx.client, user_id, *month);
    let transactions = use_transactions(&ctx.client, user_id);
    let categories = use_categories(&ctx.client, user_id);

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Budget>::None);
    let pending_delete = use_state(|| Option::<Uuid>::None);

    if ctx.session.is_none() {
        return html! {};
    }

    let registry = categories.state.registry.clone();

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = select.value().parse::<MonthKey>() {
                month.set(selected);
            }
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
        let delete = budgets.actions.delete.clone();
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

    let mut month_options: Vec<MonthKey> = dates::current_month().trailing(MONTH_CHOICES);
    month_options.reverse();

    html! {
        <div class="page budget-page">
            <div class="page-header">
                <h2 class="page-title">{"Ngân sách"}</h2>
                <div class="page-header-actions">
                    <select onchange={on_month_change}>
                        {for month_options.iter().map(|option| {
                            let value = option.to_string();
                            html! {
                                <option value={value} selected={*option == *month}>
                                    {dates::month_label(*option)}
                                </option>
                            }
                        })}
                    </select>
                    <button class="btn btn-primary" onclick={open_create}>{"+ Thêm ngân sách"}</button>
                </div>
            </div>

            {if let Some(message) = budgets.state.error.clone() {
                html! { <div class="form-message error">{message}</div> }
            } else {
                html! {}
            }}

            {if budgets.state.loading {
                html! { <div class="loading-spinner"></div> }
            } else if budgets.state.budgets.is_empty() {
                html! { <p class="empty-state">{"Chưa có ngân sách cho tháng này"}</p> }
            } else {
                html! {
                    <div class="budget-list">
                        {for budgets.state.budgets.iter().map(|row| {
                            let category = registry.resolve(Some(row.category_id));
                            // the form blocks non-positive limits, so this only
                            // trips on bad stored data
                            let usage = budget::evaluate(row, &transactions.state.transactions).ok();
                            let on_edit = {
                                let editing = editing.clone();
                                let modal_open = modal_open.clone();
                                let row = row.clone();
                                Callback::from(move |_: MouseEvent| {
                                    editing.set(Some(row.clone()));
                                    modal_open.set(true);
                                })
                            };
                            let on_delete = {
                                let pending_delete = pending_delete.clone();
                                let id = row.id;
                                Callback::from(move |_: MouseEvent| pending_delete.set(Some(id)))
                            };
                            html! {
                                <div class="budget-card" key={row.id.to_string()}>
                                    <div class="budget-heading">
                                        <span class={classes!("category-chip", category.color.clone())}>
                                            {&category.name}
                                        </span>
                                        <div class="row-actions">
                                            <button class="icon-button" onclick={on_edit}>{"Sửa"}</button>
                                            <button class="icon-button danger" onclick={on_delete}>{"Xóa"}</button>
                                        </div>
                                    </div>
                                    {match usage {
                                        Some(usage) => html! {
                                            <>
                                                <div class="progress-track">
                                                    <div
                                                        class={status_class(usage.status)}
                                                        style={format!("width: {}%", usage.percentage)}
                                                    ></div>
                                                </div>
                                                <div class="budget-amounts">
                                                    <span>
                                                        {format!(
                                                            "{} / {}",
                                                            currency::format(usage.spent),
                                                            currency::format(row.limit_amount),
                                                        )}
                                                    </span>
                                                    <span class="budget-percent">{format!("{}%", usage.percentage)}</span>
                                                </div>
                                                {if usage.status == BudgetStatus::Over {
                                                    html! { <p class="budget-warning">{"Đã vượt hạn mức!"}</p> }
                                                } else if usage.status == BudgetStatus::Near {
                                                    html! { <p class="budget-notice">{"Sắp chạm hạn mức"}</p> }
                                                } else {
                                                    html! {}
                                                }}
                                            </>
                                        },
                                        None => html! { <p class="budget-warning">{"Hạn mức không hợp lệ"}</p> },
                                    }}
                                </div>
                            }
                        })}
                    </div>
                }
            }}

            <BudgetModal
                is_open={*modal_open}
                user_id={user_id}
                month={*month}
                registry={registry.clone()}
                existing={budgets.state.budgets.clone()}
                editing={(*editing).clone()}
                on_create={budgets.actions.create.clone()}
                on_update={budgets.actions.update.clone()}
                on_close={close_modal}
            />

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                message={"Xóa ngân sách này?".to_string()}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}
