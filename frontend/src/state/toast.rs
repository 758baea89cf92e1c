use leptos::*;

#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Transient notifications shown in the corner of the shell.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), None);
    }

    pub fn error_with(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), Some(description.into()));
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, description: Option<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                title,
                description,
            })
        });
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toasts = *self;
        gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || toasts.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_and_dismiss() {
        with_runtime(|| {
            let toasts = provide_toasts();
            toasts.success("ユーザーを更新しました");
            toasts.error_with("作成に失敗しました", "ユーザー名が既に使用されている可能性があります");

            let items = toasts.items().get();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].kind, ToastKind::Success);
            assert_eq!(
                items[1].description.as_deref(),
                Some("ユーザー名が既に使用されている可能性があります")
            );

            toasts.dismiss(items[0].id);
            let remaining = use_toasts().items().get();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].kind, ToastKind::Error);
        });
    }
}
