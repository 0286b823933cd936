use finbook_client::Client;
use shared::{NewTransaction, Transaction, UpdateTransaction};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct TransactionsActions {
    pub refresh: Callback<()>,
    pub create: Callback<NewTransaction>,
    pub update: Callback<(Uuid, UpdateTransaction)>,
    pub delete: Callback<Uuid>,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: TransactionsActions,
}

/// Fetch-on-mount plus mutate-then-refetch for the transactions table. No
/// optimistic updates: every write is followed by a full reread.
#[hook]
pub fn use_transactions(client: &Client, user_id: Uuid) -> UseTransactionsResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let client = client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(user_id, move |_: (), user_id| {
            let client = client.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            let user_id = *user_id;

            spawn_local(async move {
                loading.set(true);
                match client.transactions().list(user_id).await {
                    Ok(rows) => {
                        transactions.set(rows);
                        error.set(None);
                    }
                    Err(err) => {
                        gloo::console::error!("Failed to fetch transactions:", err.to_string());
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
        use_callback(refresh.clone(), move |new_transaction: NewTransaction, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.transactions().create(&new_transaction).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to create transaction:", err.to_string());
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
            move |(id, patch): (Uuid, UpdateTransaction), refresh| {
                let client = client.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match client.transactions().update(id, &patch).await {
                        Ok(_) => refresh.emit(()),
                        Err(err) => {
                            gloo::console::error!("Failed to update transaction:", err.to_string());
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
                match client.transactions().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to delete transaction:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    UseTransactionsResult {
        state: TransactionsState {
            transactions: (*transactions).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: TransactionsActions {
            refresh,
            create,
            update,
            delete,
        },
    }
}
