use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::hooks::{Notice, ToastAction, ToastContext, ToastVariant};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.id,
        );
    }

    let class_name = match props.notice.variant {
        ToastVariant::Default => "pointer-events-auto w-80 rounded-lg border border-slate-200 bg-white p-4 shadow-lg cursor-pointer",
        ToastVariant::Destructive => "pointer-events-auto w-80 rounded-lg border border-red-600 bg-red-500 text-white p-4 shadow-lg cursor-pointer",
    };
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={class_name} role="status" {onclick}>
            <p class="text-sm font-semibold">{ props.notice.title.clone() }</p>
            <p class="text-sm opacity-90">{ props.notice.description.clone() }</p>
        </div>
    }
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        return html! {};
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 pointer-events-none">
            { for toasts.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} id={toast.id} notice={toast.notice.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}
