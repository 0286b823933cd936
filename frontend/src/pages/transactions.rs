use shared::{currency, MonthKey, Transaction, TransactionKind};
use uuid::Uuid;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::transaction_modal::TransactionModal;
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_transactions::use_transactions;
use crate::services::dates;
use crate::session::use_session;

const MONTH_CHOICES: usize = 12;

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Thu nhập",
        TransactionKind::Expense => "Chi tiêu",
    }
}

fn kind_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "kind-chip income",
        TransactionKind::Expense => "kind-chip expense",
    }
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let ctx = use_session();
    let user_id = ctx
        .session
        .as_ref()
        .map(|s| s.user.id)
        .unwrap_or_else(Uuid::nil);

    let transactions = use_transactions(&ctx.client, user_id);
    let categories = use_categories(&ctx.client, user_id);

    // "" means no filter on that axis
    let filter_kind = use_state(String::new);
    let filter_category = use_state(String::new);
    let filter_month = use_state(String::new);

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Transaction>::None);
    let pending_delete = use_state(|| Option::<Uuid>::None);

    if ctx.session.is_none() {
        return html! {};
    }

    let registry = categories.state.registry.clone();

    let bind_select = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.set(select.value());
        })
    };
    let on_kind_filter = bind_select(&filter_kind);
    let on_category_filter = bind_select(&filter_category);
    let on_month_filter = bind_select(&filter_month);

    let kind_filter: Option<TransactionKind> = match filter_kind.as_str() {
        "income" => Some(TransactionKind::Income),
        "expense" => Some(TransactionKind::Expense),
        _ => None,
    };
    let category_filter: Option<Uuid> = filter_category.parse().ok();
    let month_filter: Option<MonthKey> = filter_month.parse().ok();

    let visible: Vec<&Transaction> = transactions
        .state
        .transactions
        .iter()
        .filter(|tx| kind_filter.map_or(true, |k| tx.kind == k))
        .filter(|tx| category_filter.map_or(true, |c| tx.category_id == Some(c)))
        .filter(|tx| month_filter.map_or(true, |m| m.contains(tx.date)))
        .collect();

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
        let delete = transactions.actions.delete.clone();
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

    // newest first in the dropdown
    let mut month_options: Vec<MonthKey> = dates::current_month().trailing(MONTH_CHOICES);
    month_options.reverse();

    html! {
        <div class="page transactions-page">
            <div class="page-header">
                <h2 class="page-title">{"Giao dịch"}</h2>
                <button class="btn btn-primary" onclick={open_create}>{"+ Thêm giao dịch"}</button>
            </div>

            {if let Some(message) = transactions.state.error.clone() {
                html! { <div class="form-message error">{message}</div> }
            } else {
                html! {}
            }}

            <div class="filter-bar">
                <select onchange={on_kind_filter}>
                    <option value="" selected={filter_kind.is_empty()}>{"Tất cả loại"}</option>
                    <option value="income" selected={*filter_kind == "income"}>{"Thu nhập"}</option>
                    <option value="expense" selected={*filter_kind == "expense"}>{"Chi tiêu"}</option>
                </select>
                <select onchange={on_category_filter}>
                    <option value="" selected={filter_category.is_empty()}>{"Tất cả danh mục"}</option>
                    {for registry
                        .list_by_kind(TransactionKind::Expense)
                        .iter()
                        .chain(registry.list_by_kind(TransactionKind::Income).iter())
                        .map(|category| {
                            let id = category.id.to_string();
                            html! {
                                <option value={id.clone()} selected={*filter_category == id}>
                                    {&category.name}
                                </option>
                            }
                        })}
                </select>
                <select onchange={on_month_filter}>
                    <option value="" selected={filter_month.is_empty()}>{"Tất cả thời gian"}</option>
                    {for month_options.iter().map(|month| {
                        let value = month.to_string();
                        html! {
                            <option value={value.clone()} selected={*filter_month == value}>
                                {dates::month_label(*month)}
                            </option>
                        }
                    })}
                </select>
            </div>

            {if transactions.state.loading {
                html! { <div class="loading-spinner"></div> }
            } else if visible.is_empty() {
                html! { <p class="empty-state">{"Không có giao dịch nào"}</p> }
            } else {
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Ngày"}</th>
                                <th>{"Tiêu đề"}</th>
                                <th>{"Danh mục"}</th>
                                <th>{"Loại"}</th>
                                <th class="align-right">{"Số tiền"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for visible.iter().map(|tx| {
                                let category = registry.resolve(tx.category_id);
                                let amount_class = match tx.kind {
                                    TransactionKind::Income => "amount positive",
                                    TransactionKind::Expense => "amount negative",
                                };
                                let on_edit = {
                                    let editing = editing.clone();
                                    let modal_open = modal_open.clone();
                                    let tx = (*tx).clone();
                                    Callback::from(move |_: MouseEvent| {
                                        editing.set(Some(tx.clone()));
                                        modal_open.set(true);
                                    })
                                };
                                let on_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let id = tx.id;
                                    Callback::from(move |_: MouseEvent| pending_delete.set(Some(id)))
                                };
                                html! {
                                    <tr key={tx.id.to_string()}>
                                        <td>{dates::format_display(tx.date)}</td>
                                        <td>{&tx.title}</td>
                                        <td>
                                            <span class={classes!("category-chip", category.color.clone())}>
                                                {&category.name}
                                            </span>
                                        </td>
                                        <td>
                                            <span class={kind_class(tx.kind)}>{kind_label(tx.kind)}</span>
                                        </td>
                                        <td class={classes!("align-right", amount_class)}>
                                            {currency::format(tx.amount)}
                                        </td>
                                        <td class="row-actions">
                                            <button class="icon-button" onclick={on_edit}>{"Sửa"}</button>
                                            <button class="icon-button danger" onclick={on_delete}>{"Xóa"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <TransactionModal
                is_open={*modal_open}
                user_id={user_id}
                registry={registry.clone()}
                editing={(*editing).clone()}
                on_create={transactions.actions.create.clone()}
                on_update={transactions.actions.update.clone()}
                on_close={close_modal}
            />

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                message={"Xóa giao dịch này?".to_string()}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_column_labels_both_directions() {
        assert_eq!(kind_label(TransactionKind::Income), "Thu nhập");
        assert_eq!(kind_label(TransactionKind::Expense), "Chi tiêu");
    }

    #[test]
    fn kind_column_classes_match_direction() {
        assert_eq!(kind_class(TransactionKind::Income), "kind-chip income");
        assert_eq!(kind_class(TransactionKind::Expense), "kind-chip expense");
    }
}
