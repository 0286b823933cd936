use shared::aggregation::{self, Totals};
use shared::{currency, debts, Debt, FinancialGoal, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::charts::weekly_chart::WeeklyChart;
use crate::components::stat_card::StatCard;
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_debts::use_debts;
use crate::hooks::use_transactions::use_transactions;
use crate::services::dates;
use crate::session::use_session;

const RECENT_COUNT: usize = 5;

/// Amounts for the overview stat cards: lifetime income/expense/balance
/// across every transaction, plus the net position over pending debts.
fn overview_amounts(transactions: &[Transaction], debt_rows: &[Debt]) -> (Totals, f64) {
    (
        aggregation::totals(transactions),
        debts::net_position(debt_rows),
    )
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let ctx = use_session();
    // hooks must run on every render; the signed-out check happens below
    let user_id = ctx
        .session
        .as_ref()
        .map(|s| s.user.id)
        .unwrap_or_else(uuid::Uuid::nil);

    let transactions = use_transactions(&ctx.client, user_id);
    let categories = use_categories(&ctx.client, user_id);
    let debt_state = use_debts(&ctx.client, user_id);

    let goals = use_state(Vec::<FinancialGoal>::new);
    use_effect_with(user_id, {
        let client = ctx.client.clone();
        let goals = goals.clone();
        move |user_id| {
            let client = client.clone();
            let goals = goals.clone();
            let user_id = *user_id;
            spawn_local(async move {
                match client.goals().list(user_id).await {
                    Ok(rows) => goals.set(rows),
                    Err(err) => {
                        gloo::console::error!("Failed to fetch goals:", err.to_string());
                    }
                }
            });
            || ()
        }
    });

    if ctx.session.is_none() {
        return html! {};
    }

    let rows = &transactions.state.transactions;
    let (all_totals, net) = overview_amounts(rows, &debt_state.state.debts);

    let (week_start, week_end) = aggregation::week_bounds(dates::today());
    let series = aggregation::weekly_series(rows, week_start, week_end);

    let registry = categories.state.registry.clone();
    let recent = rows.iter().take(RECENT_COUNT);

    html! {
        <div class="page dashboard-page">
            <h2 class="page-title">{"Tổng quan"}</h2>

            <div class="stat-grid">
                <StatCard label="Số dư" amount={all_totals.balance} />
                <StatCard label="Tổng thu nhập" amount={all_totals.income} accent={Some("positive".to_string())} />
                <StatCard label="Tổng chi tiêu" amount={all_totals.expense} accent={Some("negative".to_string())} />
                <StatCard
                    label="Vay nợ ròng"
                    amount={net}
                    accent={Some(if net >= 0.0 { "positive".to_string() } else { "negative".to_string() })}
                />
            </div>

            <WeeklyChart series={series} />

            <div class="dashboard-columns">
                <section class="recent-transactions">
                    <h3 class="section-title">{"Giao dịch gần đây"}</h3>
                    {if transactions.state.loading {
                        html! { <div class="loading-spinner"></div> }
                    } else if rows.is_empty() {
                        html! { <p class="empty-state">{"Chưa có giao dịch nào"}</p> }
                    } else {
                        html! {
                            <ul class="transaction-list">
                                {for recent.map(|tx| {
                                    let category = registry.resolve(tx.category_id);
                                    let amount_class = match tx.kind {
                                        shared::TransactionKind::Income => "amount positive",
                                        shared::TransactionKind::Expense => "amount negative",
                                    };
                                    html! {
                                        <li class="transaction-row" key={tx.id.to_string()}>
                                            <span class={classes!("category-chip", category.color.clone())}>
                                                {&category.name}
                                            </span>
                                            <span class="transaction-title">{&tx.title}</span>
                                            <span class="transaction-date">{dates::format_display(tx.date)}</span>
                                            <span class={amount_class}>{currency::format(tx.amount)}</span>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </section>

                <section class="goals-panel">
                    <h3 class="section-title">{"Mục tiêu tài chính"}</h3>
                    {if goals.is_empty() {
                        html! { <p class="empty-state">{"Chưa có mục tiêu nào"}</p> }
                    } else {
                        html! {
                            <ul class="goal-list">
                                {for goals.iter().map(|goal| {
                                    let pct = goal.progress_percent();
                                    html! {
                                        <li class="goal-row" key={goal.id.to_string()}>
                                            <div class="goal-heading">
                                                <span class="goal-title">{&goal.title}</span>
                                                <span class="goal-percent">{format!("{pct}%")}</span>
                                            </div>
                                            <div class="progress-track">
                                                <div class="progress-fill" style={format!("width: {pct}%")}></div>
                                            </div>
                                            <div class="goal-amounts">
                                                <span>{currency::format(goal.current_amount)}</span>
                                                <span>{" / "}</span>
                                                <span>{currency::format(goal.target_amount)}</span>
                                            </div>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{DebtKind, DebtStatus, TransactionKind};
    use uuid::Uuid;

    fn tx(amount: f64, kind: TransactionKind, date: NaiveDate) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Giao dịch".to_string(),
            amount,
            kind,
            category_id: None,
            date,
            notes: None,
        }
    }

    fn debt(amount: f64, kind: DebtKind, status: DebtStatus) -> Debt {
        Debt {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Khoản nợ".to_string(),
            amount,
            kind,
            counterparty: "Minh".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status,
            notes: None,
        }
    }

    #[test]
    fn overview_totals_span_all_months() {
        let rows = vec![
            tx(
                5_000_000.0,
                TransactionKind::Income,
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ),
            tx(
                3_000_000.0,
                TransactionKind::Income,
                NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            ),
            tx(
                1_500_000.0,
                TransactionKind::Expense,
                NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(),
            ),
        ];
        let (totals, _) = overview_amounts(&rows, &[]);
        assert_eq!(totals.income, 8_000_000.0);
        assert_eq!(totals.expense, 1_500_000.0);
        assert_eq!(totals.balance, 6_500_000.0);
    }

    #[test]
    fn overview_net_counts_only_pending_debts() {
        let debts = vec![
            debt(2_000_000.0, DebtKind::Lend, DebtStatus::Pending),
            debt(500_000.0, DebtKind::Borrow, DebtStatus::Pending),
            debt(9_000_000.0, DebtKind::Borrow, DebtStatus::Paid),
        ];
        let (_, net) = overview_amounts(&[], &debts);
        assert_eq!(net, 1_500_000.0);
    }
}
