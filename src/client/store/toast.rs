use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::client::util::time::sleep;

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Show a notification that dismisses itself after [`TOAST_DURATION`].
///
/// The timer runs on the root scope, so it outlives the view that raised the notification.
pub fn notify(mut toasts: Signal<Toasts>, kind: ToastKind, message: impl Into<String>) {
    let id = toasts.write().push(kind, message);

    spawn_forever(async move {
        sleep(TOAST_DURATION).await;
        toasts.write().dismiss(id);
    });
}

pub fn notify_success(toasts: Signal<Toasts>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn notify_error(toasts: Signal<Toasts>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}
