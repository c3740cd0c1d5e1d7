pub mod use_toast;

pub use use_toast::{use_toast, Notice, ToastAction, ToastContext, ToastState, ToastVariant};
