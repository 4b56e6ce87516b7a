//! Notification surface
//!
//! Pages report outcomes as toasts. The surface is a collaborator: a
//! terminal logs them, tests record them.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}

/// Emits toasts as tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        if toast.is_destructive() {
            warn!(title = %toast.title, "{}", toast.description);
        } else {
            info!(title = %toast.title, "{}", toast.description);
        }
    }
}

/// Records every toast in order
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the recorded toasts
    pub fn take(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let log = ToastLog::new();
        log.notify(Toast::new("Copiado!", "Mensagem copiada"));
        log.notify(Toast::destructive("Campos obrigatórios", "Preencha"));

        assert_eq!(log.len(), 2);
        assert!(log.last().unwrap().is_destructive());
        assert_eq!(log.take()[0].title, "Copiado!");
        assert!(log.is_empty());
    }

    #[test]
    fn test_shared_log_through_arc() {
        let log = Arc::new(ToastLog::new());
        let notifier: Arc<dyn Notifier + Send + Sync> = log.clone();
        notifier.notify(Toast::new("Logout realizado", "Até logo!"));
        assert_eq!(
            log.toasts(),
            vec![Toast::new("Logout realizado", "Até logo!")]
        );
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        let json = serde_json::to_string(&Toast::destructive("Erro", "x")).unwrap();
        assert!(json.contains(r#""variant":"destructive""#));
    }
}
