use yew::prelude::*;

/// One loadable chunk of section state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub danger: bool,
    #[prop_or(AttrValue::Static("Simpan"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Non-blocking replacement for `confirm`/`prompt`: same gate (nothing
/// happens until the confirm button), without freezing the page.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let confirm_class = if props.danger {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                <div class="modal-actions">
                    <button class="btn btn-secondary" onclick={on_cancel}>{ "Batal" }</button>
                    <button class={confirm_class} onclick={on_confirm}>
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Dismissible inline error strip replacing the blocking `alert`.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="notice notice-error">
            <span>{ props.message.clone() }</span>
            <button class="notice-close" onclick={on_dismiss}>{ "×" }</button>
        </div>
    }
}

pub fn placeholder_row(colspan: u32, text: &str) -> Html {
    html! {
        <tr><td colspan={colspan.to_string()} class="loading">{ text }</td></tr>
    }
}

pub fn error_row(colspan: u32) -> Html {
    html! {
        <tr><td colspan={colspan.to_string()} class="loading error-text">{ "Gagal memuat data" }</td></tr>
    }
}
