use leptos::*;

pub const TOAST_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
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
}

#[derive(Clone, Copy)]
pub struct ToastStore {
    state: RwSignal<ToastState>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(ToastState::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.state.update(|state| id = state.push(kind, message));
        schedule_dismiss(*self, id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|state| state.dismiss(id));
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn messages_untracked(&self) -> Vec<(ToastKind, String)> {
        self.state.with_untracked(|s| {
            s.items
                .iter()
                .map(|toast| (toast.kind, toast.message.clone()))
                .collect()
        })
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(store: ToastStore, id: u64) {
    gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || store.dismiss(id)).forget();
}

// Host builds have no event loop timers; toasts stay until dismissed.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_store: ToastStore, _id: u64) {}

pub fn use_toasts() -> ToastStore {
    match use_context::<ToastStore>() {
        Some(store) => store,
        None => {
            let store = ToastStore::new();
            provide_context(store);
            store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn toasts_coexist_and_dismiss_individually() {
        let mut state = ToastState::default();
        let first = state.push(ToastKind::Success, "Subscription deleted");
        let second = state.push(ToastKind::Error, "Upload failed");
        assert_ne!(first, second);
        assert_eq!(state.items.len(), 2);

        state.dismiss(first);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].message, "Upload failed");

        let third = state.push(ToastKind::Error, "Upload failed");
        assert_eq!(state.items.len(), 2, "duplicates are not merged");
        assert!(third > second);
    }

    #[test]
    fn dismissing_unknown_id_is_noop() {
        let mut state = ToastState::default();
        state.push(ToastKind::Success, "hello");
        state.dismiss(99);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn store_exposes_items_through_signal() {
        let runtime = create_runtime();
        let store = use_toasts();
        let id = store.success("Netflix added successfully!");
        store.error("Failed to add subscription");
        assert_eq!(store.items().get().len(), 2);

        store.dismiss(id);
        assert_eq!(
            store.messages_untracked(),
            vec![(ToastKind::Error, "Failed to add subscription".to_string())]
        );
        runtime.dispose();
    }

    #[test]
    fn kinds_map_to_css_classes() {
        assert_eq!(ToastKind::Success.as_class(), "success");
        assert_eq!(ToastKind::Error.as_class(), "error");
    }
}
