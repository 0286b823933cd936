use yew::prelude::*;

use shared::currency;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub amount: f64,
    /// CSS class for the value, e.g. "positive" / "negative".
    #[prop_or_default]
    pub accent: Option<String>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = match &props.accent {
        Some(accent) => format!("stat-card-value {accent}"),
        None => "stat-card-value".to_string(),
    };
    html! {
        <div class="stat-card">
            <span class="stat-card-label">{&props.label}</span>
            <h3 class={value_class}>{currency::format(props.amount)}</h3>
        </div>
    }
}
