use std::rc::Rc;

use finbook_client::Client;
use shared::categories::CategoryRegistry;
use shared::{Category, NewCategory, UpdateCategory};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CategoriesState {
    /// Built-ins merged with the user's stored categories.
    pub registry: Rc<CategoryRegistry>,
    pub user_categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct CategoriesActions {
    pub refresh: Callback<()>,
    pub create: Callback<NewCategory>,
    pub update: Callback<(Uuid, UpdateCategory)>,
    pub delete: Callback<Uuid>,
}

pub struct UseCategoriesResult {
    pub state: CategoriesState,
    pub actions: CategoriesActions,
}

#[hook]
pub fn use_categories(client: &Client, user_id: Uuid) -> UseCategoriesResult {
    let user_categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let client = client.clone();
        let user_categories = user_categories.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(user_id, move |_: (), user_id| {
            let client = client.clone();
            let user_categories = user_categories.clone();
            let loading = loading.clone();
            let error = error.clone();
            let user_id = *user_id;

            spawn_local(async move {
                loading.set(true);
                match client.categories().list(user_id).await {
                    Ok(rows) => {
                        user_categories.set(rows);
                        error.set(None);
                    }
                    Err(err) => {
                        gloo::console::error!("Failed to fetch categories:", err.to_string());
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
        use_callback(refresh.clone(), move |new_category: NewCategory, refresh| {
            let client = client.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.categories().create(&new_category).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to create category:", err.to_string());
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
            move |(id, patch): (Uuid, UpdateCategory), refresh| {
                let client = client.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match client.categories().update(id, &patch).await {
                        Ok(_) => refresh.emit(()),
                        Err(err) => {
                            gloo::console::error!("Failed to update category:", err.to_string());
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
                match client.categories().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to delete category:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let registry = Rc::new(CategoryRegistry::new((*user_categories).clone()));

    UseCategoriesResult {
        state: CategoriesState {
            registry,
            user_categories: (*user_categories).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: CategoriesActions {
            refresh,
            create,
            update,
            delete,
        },
    }
}
