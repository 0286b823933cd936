use shared::{currency, debts, Debt, DebtKind, DebtStatus};
use uuid::Uuid;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::debt_modal::DebtModal;
use crate::components::stat_card::StatCard;
use crate::hooks::use_debts::use_debts;
use crate::services::dates;
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Pending,
    Paid,
}

enum PendingAction {
    Settle(Debt),
    Delete(Uuid),
}

#[function_component(DebtsPage)]
pub fn debts_page() -> Html {
    let ctx = use_session();
    let user_id = ctx
        .session
        .as_ref()
        .map(|s| s.user.id)
        .unwrap_or_else(Uuid::nil);

    let debt_state = use_debts(&ctx.client, user_id);
    let tab = use_state(|| Tab::Pending);
    let modal_open = use_state(|| false);
    let pending_action = use_state(|| Option::<std::rc::Rc<PendingAction>>::None);

    if ctx.session.is_none() {
        return html! {};
    }

    let rows = &debt_state.state.debts;
    let totals = debts::pending_totals(rows);
    let net = debts::net_position(rows);

    let visible: Vec<&Debt> = rows
        .iter()
        .filter(|d| match *tab {
            Tab::Pending => d.status == DebtStatus::Pending,
            Tab::Paid => d.status == DebtStatus::Paid,
        })
        .collect();

    let set_tab = |next: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(next))
    };

    let open_create = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let confirm_action = {
        let pending_action = pending_action.clone();
        let mark_paid = debt_state.actions.mark_paid.clone();
        let delete = debt_state.actions.delete.clone();
        Callback::from(move |_| {
            if let Some(action) = (*pending_action).clone() {
                match &*action {
                    PendingAction::Settle(debt) => mark_paid.emit(debt.clone()),
                    PendingAction::Delete(id) => delete.emit(*id),
                }
            }
            pending_action.set(None);
        })
    };
    let cancel_action = {
        let pending_action = pending_action.clone();
        Callback::from(move |_| pending_action.set(None))
    };

    let confirm_message = match pending_action.as_deref() {
        Some(PendingAction::Settle(debt)) => match debt.kind {
            DebtKind::Borrow => "Xác nhận đã trả khoản nợ này?".to_string(),
            DebtKind::Lend => "Xác nhận đã thu lại khoản cho vay này?".to_string(),
        },
        Some(PendingAction::Delete(_)) => "Xóa khoản nợ này?".to_string(),
        None => String::new(),
    };

    html! {
        <div class="page debts-page">
            <div class="page-header">
                <h2 class="page-title">{"Vay nợ"}</h2>
                <button class="btn btn-primary" onclick={open_create}>{"+ Thêm khoản nợ"}</button>
            </div>

            {if let Some(message) = debt_state.state.error.clone() {
                html! { <div class="form-message error">{message}</div> }
            } else {
                html! {}
            }}

            <div class="stat-grid">
                <StatCard label="Đang vay" amount={totals.borrowed} accent={Some("negative".to_string())} />
                <StatCard label="Đang cho vay" amount={totals.lent} accent={Some("positive".to_string())} />
                <StatCard
                    label="Vị thế ròng"
                    amount={net}
                    accent={Some(if net >= 0.0 { "positive".to_string() } else { "negative".to_string() })}
                />
            </div>

            <div class="tab-bar">
                <button
                    class={if *tab == Tab::Pending { "tab active" } else { "tab" }}
                    onclick={set_tab(Tab::Pending)}
                >
                    {"Chưa trả"}
                </button>
                <button
                    class={if *tab == Tab::Paid { "tab active" } else { "tab" }}
                    onclick={set_tab(Tab::Paid)}
                >
                    {"Đã trả"}
                </button>
            </div>

            {if debt_state.state.loading {
                html! { <div class="loading-spinner"></div> }
            } else if visible.is_empty() {
                html! { <p class="empty-state">{"Không có khoản nợ nào"}</p> }
            } else {
                html! {
                    <div class="debt-list">
                        {for visible.iter().map(|debt| {
                            let kind_label = match debt.kind {
                                DebtKind::Borrow => "Đi vay",
                                DebtKind::Lend => "Cho vay",
                            };
                            let kind_class = match debt.kind {
                                DebtKind::Borrow => "debt-kind borrow",
                                DebtKind::Lend => "debt-kind lend",
                            };
                            let on_settle = {
                                let pending_action = pending_action.clone();
                                let debt = (*debt).clone();
                                Callback::from(move |_: MouseEvent| {
                                    pending_action.set(Some(std::rc::Rc::new(PendingAction::Settle(debt.clone()))));
                                })
                            };
                            let on_delete = {
                                let pending_action = pending_action.clone();
                                let id = debt.id;
                                Callback::from(move |_: MouseEvent| {
                                    pending_action.set(Some(std::rc::Rc::new(PendingAction::Delete(id))));
                                })
                            };
                            html! {
                                <div class="debt-card" key={debt.id.to_string()}>
                                    <div class="debt-heading">
                                        <span class={kind_class}>{kind_label}</span>
                                        <span class="debt-title">{&debt.title}</span>
                                        <span class="debt-amount">{currency::format(debt.amount)}</span>
                                    </div>
                                    <div class="debt-meta">
                                        <span>{&debt.counterparty}</span>
                                        <span>{dates::format_display(debt.date)}</span>
                                    </div>
                                    {if let Some(notes) = &debt.notes {
                                        html! { <p class="debt-notes">{notes}</p> }
                                    } else {
                                        html! {}
                                    }}
                                    <div class="debt-actions">
                                        {if debt.status == DebtStatus::Pending {
                                            let settle_label = match debt.kind {
                                                DebtKind::Borrow => "Đã trả",
                                                DebtKind::Lend => "Đã thu",
                                            };
                                            html! {
                                                <button class="btn btn-small" onclick={on_settle}>{settle_label}</button>
                                            }
                                        } else {
                                            html! { <span class="debt-settled">{"Đã tất toán"}</span> }
                                        }}
                                        <button class="icon-button danger" onclick={on_delete}>{"Xóa"}</button>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}

            <DebtModal
                is_open={*modal_open}
                user_id={user_id}
                on_create={debt_state.actions.create.clone()}
                on_close={close_modal}
            />

            <ConfirmDialog
                is_open={pending_action.is_some()}
                message={confirm_message}
                on_confirm={confirm_action}
                on_cancel={cancel_action}
            />
        </div>
    }
}
