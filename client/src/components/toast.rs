//! Dismissible inline notification with auto-hide.

use leptos::prelude::*;

use crate::state::toast::{AutoHide, DEFAULT_TOAST_MS, ToastKind};
#[cfg(feature = "hydrate")]
use crate::state::toast::auto_hide_delay;

/// Shows `message` while it is `Some`.
///
/// The auto-hide timer restarts only when the visible text changes, not on
/// every update of whatever state `message` is derived from. When the timer
/// fires (or the close button is pressed) `on_dismiss` runs and the owner is
/// expected to clear the message.
#[component]
pub fn Toast(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] kind: ToastKind,
    #[prop(default = DEFAULT_TOAST_MS)] duration_ms: u32,
    #[prop(default = true)] dismissible: bool,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let message = Memo::new(move |_| message.get());
    let timer = StoredValue::new(AutoHide::default());

    Effect::new(move || {
        let mut started = None;
        message.with(|m| timer.update_value(|t| started = t.observe(m.as_deref())));
        let Some(token) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        if let Some(delay) = auto_hide_delay(duration_ms) {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if timer.with_value(|t| t.is_current(token)) {
                    timer.update_value(AutoHide::cancel);
                    on_dismiss.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, duration_ms);
    });

    let dismiss = move |_| {
        timer.update_value(AutoHide::cancel);
        on_dismiss.run(());
    };

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=kind.class() role="alert">
                <span class="toast__icon">{kind.icon()}</span>
                <span class="toast__message">{move || message.get().unwrap_or_default()}</span>
                <Show when=move || dismissible>
                    <button class="toast__close" type="button" aria-label="Dismiss" on:click=dismiss>
                        "×"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
