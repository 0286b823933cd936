use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub is_open: bool,
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_backdrop = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal confirm-dialog" onclick={on_dialog_click}>
                <p class="confirm-message">{&props.message}</p>
                <div class="modal-buttons">
                    <button class="btn btn-danger" onclick={on_confirm}>{"Xác nhận"}</button>
                    <button class="btn btn-secondary" onclick={on_cancel}>{"Hủy"}</button>
                </div>
            </div>
        </div>
    }
}
