use finbook_client::Client;
use shared::{Debt, NewDebt};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::dates;

#[derive(Clone, PartialEq)]
pub struct DebtsState {
    pub debts: Vec<Debt>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct DebtsActions {
    pub refresh: Callback<()>,
    /// Composite write: debt row plus its issuance transaction.
    pub create: Callback<NewDebt>,
    /// Composite write: settlement transaction plus the status flip.
    pub mark_paid: Callback<Debt>,
    pub delete: Callback<Uuid>,
}

pub struct UseDebtsResult {
    pub state: DebtsState,
    pub actions: DebtsActions,
}

#[hook]
pub fn use_debts(client: &Client, user_id: Uuid) -> UseDebtsResult {
    let debts = use_state(Vec::<Debt>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let client = client.clone();
        let debts = debts.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(user_id, move |_: (), user_id| {
            let client = client.clone();
            let debts = debts.clone();
            let loading = loading.clone();
            let error = error.clone();
            let user_id = *user_id;

            spawn_local(async move {
                loading.set(true);
                match client.debts().list(user_id).await {
                    Ok(rows) => {
                        debts.set(rows);
                        error.set(None);
                    }
                    Err(err) => {
                        gloo::console::error!("Failed to fetch debts:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    use_effect_with(user_id, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let create = {
        let client = client.clone();
        let error = error.clone();
        use_callback(refresh.clone(), move |new_debt: NewDebt, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.create_debt(&new_debt).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to create debt:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let mark_paid = {
        let client = client.clone();
        let error = error.clone();
        use_callback(refresh.clone(), move |debt: Debt, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.mark_paid(&debt, dates::today()).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to settle debt:", err.to_string());
                        // inconsistency reports must reach the user verbatim
                        error.set(Some(err.to_string()));
                        refresh.emit(());
                    }
                }
            });
        })
    };

    let delete = {
        let client = client.clone();
        let error = error.clone();
        use_callback(refresh.clone(), move |id: Uuid, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.debts().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to delete debt:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    UseDebtsResult {
        state: DebtsState {
            debts: (*debts).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: DebtsActions {
            refresh,
            create,
            mark_paid,
            delete,
        },
    }
}
