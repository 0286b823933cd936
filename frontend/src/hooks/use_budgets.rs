use finbook_client::Client;
use shared::{Budget, MonthKey, NewBudget, UpdateBudget};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct BudgetsState {
    pub budgets: Vec<Budget>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct BudgetsActions {
    pub refresh: Callback<()>,
    pub create: Callback<NewBudget>,
    pub update: Callback<(Uuid, UpdateBudget)>,
    pub delete: Callback<Uuid>,
}

pub struct UseBudgetsResult {
    pub state: BudgetsState,
    pub actions: BudgetsActions,
}

/// Budgets for one month; refetches whenever the selected month changes.
#[hook]
pub fn use_budgets(client: &Client, user_id: Uuid, month: MonthKey) -> UseBudgetsResult {
    let budgets = use_state(Vec::<Budget>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let client = client.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((user_id, month), move |_: (), (user_id, month)| {
            let client = client.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();
            let error = error.clone();
            let user_id = *user_id;
            let month = *month;

            spawn_local(async move {
                loading.set(true);
                match client.budgets().list(user_id, month).await {
                    Ok(rows) => {
                        budgets.set(rows);
                        error.set(None);
                    }
                    Err(err) => {
                        gloo::console::error!("Failed to fetch budgets:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    use_effect_with((user_id, month), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let create = {
        let client = client.clone();
        let error = error.clone();
        use_callback(refresh.clone(), move |new_budget: NewBudget, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.budgets().create(&new_budget).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to create budget:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let update = {
        let client = client.clone();
        let error = error.clone();
        use_callback(
            refresh.clone(),
            move |(id, patch): (Uuid, UpdateBudget), refresh| {
                let client = client.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match client.budgets().update(id, &patch).await {
                        Ok(_) => refresh.emit(()),
                        Err(err) => {
                            gloo::console::error!("Failed to update budget:", err.to_string());
                            error.set(Some(err.to_string()));
                        }
                    }
                });
            },
        )
    };

    let delete = {
        let client = client.clone();
        let error = error.clone();
        use_callback(refresh.clone(), move |id: Uuid, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.budgets().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to delete budget:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    UseBudgetsResult {
        state: BudgetsState {
            budgets: (*budgets).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: BudgetsActions {
            refresh,
            create,
            update,
            delete,
        },
    }
}
