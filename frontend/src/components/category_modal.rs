use shared::validation::validate_category_input;
use shared::{Category, NewCategory, TransactionKind, UpdateCategory};
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COLORS: [&str; 8] = [
    "bg-red-500",
    "bg-orange-500",
    "bg-yellow-500",
    "bg-green-500",
    "bg-teal-500",
    "bg-blue-500",
    "bg-purple-500",
    "bg-pink-500",
];

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub is_open: bool,
    pub user_id: Uuid,
    pub editing: Option<Category>,
    pub on_create: Callback<NewCategory>,
    pub on_update: Callback<(Uuid, UpdateCategory)>,
    pub on_close: Callback<()>,
}

/// User-category form. The kind is fixed once the category exists; edits only
/// rename and recolor.
#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let name = use_state(String::new);
    let kind = use_state(|| TransactionKind::Expense);
    let color = use_state(|| COLORS[0].to_string());
    let error = use_state(|| Option::<String>::None);

    use_effect_with((props.is_open, props.editing.clone()), {
        let name = name.clone();
        let kind = kind.clone();
        let color = color.clone();
        let error = error.clone();
        move |(is_open, editing): &(bool, Option<Category>)| {
            if *is_open {
                match editing {
                    Some(category) => {
                        name.set(category.name.clone());
                        kind.set(category.kind);
                        color.set(category.color.clone());
                    }
                    None => {
                        name.set(String::new());
                        kind.set(TransactionKind::Expense);
                        color.set(COLORS[0].to_string());
                    }
                }
                error.set(None);
            }
            || ()
        }
    });

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let set_kind = |next: TransactionKind| {
        let kind = kind.clone();
        Callback::from(move |_: MouseEvent| kind.set(next))
    };

    let on_submit = {
        let name = name.clone();
        let kind = kind.clone();
        let color = color.clone();
        let error = error.clone();
        let editing = props.editing.clone();
        let user_id = props.user_id;
        let on_create = props.on_create.clone();
        let on_update = props.on_update.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(err) = validate_category_input(&name) {
                error.set(Some(err.to_string()));
                return;
            }

            match &editing {
                Some(category) => on_update.emit((
                    category.id,
                    UpdateCategory {
                        name: name.trim().to_string(),
                        color: (*color).clone(),
                    },
                )),
                None => on_create.emit(NewCategory {
                    user_id,
                    name: name.trim().to_string(),
                    kind: *kind,
                    color: (*color).clone(),
                }),
            }
            on_close.emit(());
        })
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let heading = if props.editing.is_some() {
        "Sửa danh mục"
    } else {
        "Thêm danh mục"
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{heading}</h3>

                {if let Some(message) = (*error).clone() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    {if props.editing.is_none() {
                        html! {
                            <div class="kind-toggle">
                                <button
                                    type="button"
                                    class={if *kind == TransactionKind::Expense { "toggle-btn active expense" } else { "toggle-btn" }}
                                    onclick={set_kind(TransactionKind::Expense)}
                                >
                                    {"Chi tiêu"}
                                </button>
                                <button
                                    type="button"
                                    class={if *kind == TransactionKind::Income { "toggle-btn active income" } else { "toggle-btn" }}
                                    onclick={set_kind(TransactionKind::Income)}
                                >
                                    {"Thu nhập"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="category-name">{"Tên danh mục"}</label>
                        <input
                            id="category-name"
                            type="text"
                            placeholder="Thú cưng, du lịch..."
                            value={(*name).clone()}
                            onchange={on_name_change}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Màu sắc"}</label>
                        <div class="color-palette">
                            {for COLORS.iter().map(|swatch| {
                                let is_selected = *color == *swatch;
                                let onclick = {
                                    let color = color.clone();
                                    let swatch = swatch.to_string();
                                    Callback::from(move |_: MouseEvent| color.set(swatch.clone()))
                                };
                                html! {
                                    <button
                                        type="button"
                                        class={classes!(
                                            "color-swatch",
                                            swatch.to_string(),
                                            is_selected.then_some("selected"),
                                        )}
                                        onclick={onclick}
                                    />
                                }
                            })}
                        </div>
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary">{"Lưu"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Hủy"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
