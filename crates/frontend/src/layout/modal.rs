use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::dom::focus_by_id;

const MODAL_ID: &str = "confirmModal";
const CLOSE_BUTTON_ID: &str = "closeModalBtn";

/// Elements that can take keyboard focus inside the dialog.
const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Service for the confirmation dialog.
///
/// While open, a document-level keydown listener traps Tab/Shift+Tab inside
/// the dialog and closes on Escape; closing removes the listener and gives
/// focus back to whatever element had it before the dialog opened. The
/// keydown closure is created once and cached; open/close only attach and
/// detach it.
#[derive(Clone, Copy)]
pub struct ConfirmModalService {
    is_visible: RwSignal<bool>,
    last_focused: StoredValue<Option<web_sys::HtmlElement>, LocalStorage>,
    keydown: StoredValue<Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>, LocalStorage>,
}

impl ConfirmModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
            last_focused: StoredValue::new_local(None),
            keydown: StoredValue::new_local(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }

    pub fn open(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        self.last_focused.set_value(
            document
                .active_element()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()),
        );

        if let Some(root) = document.document_element() {
            let _ = root.class_list().add_1("no-scroll");
        }

        let service = *self;
        if self.keydown.with_value(Option::is_none) {
            let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
                service.on_keydown(&ev);
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
            self.keydown.set_value(Some(closure));
        }
        self.keydown.with_value(|keydown| {
            if let Some(closure) = keydown {
                let _ = document
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
        });

        self.is_visible.set(true);
    }

    pub fn close(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        self.keydown.with_value(|keydown| {
            if let Some(closure) = keydown {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            }
        });

        if let Some(root) = document.document_element() {
            let _ = root.class_list().remove_1("no-scroll");
        }

        self.is_visible.set(false);

        self.last_focused.update_value(|last| {
            if let Some(el) = last.take() {
                let _ = el.focus();
            }
        });
    }

    fn on_keydown(&self, ev: &web_sys::KeyboardEvent) {
        match ev.key().as_str() {
            "Escape" => {
                ev.prevent_default();
                self.close();
            }
            "Tab" => self.cycle_focus(ev),
            _ => {}
        }
    }

    /// Keep Tab/Shift+Tab cycling among the dialog's focusable descendants.
    fn cycle_focus(&self, ev: &web_sys::KeyboardEvent) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(modal) = document.get_element_by_id(MODAL_ID) else {
            return;
        };
        let Ok(nodes) = modal.query_selector_all(FOCUSABLE_SELECTOR) else {
            return;
        };

        let mut focusables: Vec<web_sys::HtmlElement> = Vec::new();
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            if el.has_attribute("disabled") || el.get_attribute("aria-hidden").is_some() {
                continue;
            }
            focusables.push(el);
        }

        let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
            return;
        };

        let active = document.active_element();
        let is_active = |el: &web_sys::HtmlElement| {
            let node: &web_sys::Node = el.as_ref();
            active
                .as_ref()
                .map(|a| a.is_same_node(Some(node)))
                .unwrap_or(false)
        };

        if ev.shift_key() && is_active(first) {
            ev.prevent_default();
            let _ = last.focus();
        } else if !ev.shift_key() && is_active(last) {
            ev.prevent_default();
            let _ = first.focus();
        }
    }
}

impl Default for ConfirmModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation dialog shown after a successful contact submission.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let modal =
        use_context::<ConfirmModalService>().expect("ConfirmModalService not provided in context");

    // Move focus onto the close button once the dialog is in the DOM.
    Effect::new(move |_| {
        if modal.is_open() {
            focus_by_id(CLOSE_BUTTON_ID);
        }
    });

    view! {
        {move || {
            if modal.is_open() {
                view! {
                    <div
                        class="modal-overlay"
                        id="modalOverlay"
                        on:click=move |_| modal.close()
                    >
                        <div
                            class="modal-content"
                            id=MODAL_ID
                            role="dialog"
                            aria-modal="true"
                            aria-labelledby="confirmTitle"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <h2 id="confirmTitle">"Message envoyé"</h2>
                            <p>"Merci ! Ton message a bien été transmis à l’atelier, nous te répondrons rapidement."</p>
                            <button
                                id=CLOSE_BUTTON_ID
                                class="btn btn-primary"
                                on:click=move |_| modal.close()
                            >
                                "Fermer"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
