use std::rc::Rc;

use yew::prelude::*;

const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

/// Newest first; older notices fall off past the limit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(notice) => {
                let mut toasts = Vec::with_capacity(TOAST_LIMIT);
                toasts.push(Toast {
                    id: self.next_id,
                    notice,
                });
                toasts.extend(self.toasts.iter().take(TOAST_LIMIT - 1).cloned());
                Rc::new(Self {
                    next_id: self.next_id.wrapping_add(1),
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self {
                    next_id: self.next_id,
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Callback that raises a notice on the nearest `ToastContext`.
#[hook]
pub fn use_toast() -> Callback<Notice> {
    let context = use_context::<ToastContext>();
    Callback::from(move |notice: Notice| match &context {
        Some(toasts) => toasts.dispatch(ToastAction::Push(notice)),
        None => log::warn!("notice dropped, no toast provider: {}", notice.title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(state: Rc<ToastState>, title: &str) -> Rc<ToastState> {
        state.reduce(ToastAction::Push(Notice::info(title, "")))
    }

    #[test]
    fn newest_notice_comes_first() {
        let state = push(push(Rc::new(ToastState::default()), "first"), "second");
        let titles: Vec<&str> = state.toasts.iter().map(|t| t.notice.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
        assert_ne!(state.toasts[0].id, state.toasts[1].id);
    }

    #[test]
    fn stack_is_capped() {
        let mut state = Rc::new(ToastState::default());
        for i in 0..5 {
            state = push(state, &format!("n{}", i));
        }
        assert_eq!(state.toasts.len(), TOAST_LIMIT);
        assert_eq!(state.toasts[0].notice.title, "n4");
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let state = push(push(Rc::new(ToastState::default()), "a"), "b");
        let id = state.toasts[1].id;
        let state = state.reduce(ToastAction::Dismiss(id));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].notice.title, "b");

        let unchanged = state.clone().reduce(ToastAction::Dismiss(999));
        assert!(Rc::ptr_eq(&state, &unchanged));
    }

    #[test]
    fn error_notices_are_destructive() {
        let notice = Notice::error("Map Error", "Failed to load the map.");
        assert_eq!(notice.variant, ToastVariant::Destructive);
        assert_eq!(Notice::info("x", "y").variant, ToastVariant::Default);
    }
}
