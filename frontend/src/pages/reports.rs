use shared::{aggregation, currency, MonthKey, Transaction, TransactionKind};
use uuid::Uuid;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::charts::trend_chart::TrendChart;
use crate::components::stat_card::StatCard;
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_transactions::use_transactions;
use crate::services::dates;
use crate::session::use_session;

const MONTH_CHOICES: usize = 12;
const TREND_MONTHS: usize = 6;

#[function_component(Reports)]
pub fn reports() -> Html {
    let ctx = use_session();
    let user_id = ctx
        .session
        .as_ref()
        .map(|s| s.user.id)
        .unwrap_or_else(Uuid::nil);

    let transactions = use_transactions(&ctx.client, user_id);
    let categories = use_categories(&ctx.client, user_id);
    let month = use_state(dates::current_month);

    if ctx.session.is_none() {
        return html! {};
    }

    let registry = categories.state.registry.clone();
    let rows = &transactions.state.transactions;

    let month_rows: Vec<Transaction> = aggregation::in_month(rows, *month)
        .into_iter()
        .cloned()
        .collect();
    let totals = aggregation::totals(&month_rows);

    // expense share per category, largest first
    let by_category = aggregation::by_category(&month_rows, TransactionKind::Expense);
    let mut breakdown: Vec<(Uuid, f64)> = by_category.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let trend = aggregation::monthly_series(rows, &month.trailing(TREND_MONTHS));

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = select.value().parse::<MonthKey>() {
                month.set(selected);
            }
        })
    };

    let mut month_options: Vec<MonthKey> = dates::current_month().trailing(MONTH_CHOICES);
    month_options.reverse();

    html! {
        <div class="page reports-page">
            <div class="page-header">
                <h2 class="page-title">{"Báo cáo"}</h2>
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
            </div>

            <div class="stat-grid">
                <StatCard label="Thu nhập" amount={totals.income} accent={Some("positive".to_string())} />
                <StatCard label="Chi tiêu" amount={totals.expense} accent={Some("negative".to_string())} />
                <StatCard
                    label="Chênh lệch"
                    amount={totals.balance}
                    accent={Some(if totals.balance >= 0.0 { "positive".to_string() } else { "negative".to_string() })}
                />
            </div>

            <section class="expense-breakdown">
                <h3 class="section-title">{"Chi tiêu theo danh mục"}</h3>
                {if breakdown.is_empty() {
                    html! { <p class="empty-state">{"Không có chi tiêu trong tháng này"}</p> }
                } else {
                    html! {
                        <ul class="breakdown-list">
                            {for breakdown.iter().map(|(category_id, spent)| {
                                let category = registry.resolve(Some(*category_id));
                                let share = if totals.expense > 0.0 {
                                    (spent / totals.expense * 100.0).round() as u32
                                } else {
                                    0
                                };
                                html! {
                                    <li class="breakdown-row" key={category_id.to_string()}>
                                        <span class={classes!("category-chip", category.color.clone())}>
                                            {&category.name}
                                        </span>
                                        <div class="progress-track">
                                            <div class="progress-fill" style={format!("width: {share}%")}></div>
                                        </div>
                                        <span class="breakdown-amount">{currency::format(*spent)}</span>
                                        <span class="breakdown-share">{format!("{share}%")}</span>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </section>

            <TrendChart points={trend} />
        </div>
    }
}
