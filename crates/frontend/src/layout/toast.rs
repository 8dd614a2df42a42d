use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notification stays on screen before auto-dismissing.
const TOAST_DISMISS_MS: u32 = 3_500;

/// App-wide notification service.
///
/// Holds the current message and the handle of the pending dismiss timer.
/// Showing a new message drops any pending handle first, so a stale timer
/// from an earlier message can never dismiss a later one.
#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            pending: StoredValue::new_local(None),
        }
    }

    /// Show a message and arm a fresh auto-dismiss timer.
    pub fn show(&self, message: impl Into<String>) {
        // Dropping the previous handle cancels its timeout.
        self.pending.update_value(|pending| {
            pending.take();
        });

        self.message.set(Some(message.into()));

        let message = self.message;
        let timeout = Timeout::new(TOAST_DISMISS_MS, move || {
            message.set(None);
        });
        self.pending.set_value(Some(timeout));
    }

    pub fn current(&self) -> Option<String> {
        self.message.get()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification region. Renders nothing while no message is pending.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        {move || {
            toast.current().map(|text| {
                view! {
                    <div class="toast" id="toast" role="status">
                        <span id="toastText">{text}</span>
                    </div>
                }
            })
        }}
    }
}
