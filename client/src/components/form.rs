//! Form building blocks: labeled field, input, submit button, alert.

use leptos::prelude::*;

/// Field wrapper with a caption and an inline validation message.
#[component]
pub fn Label(
    #[prop(into)] name: String,
    #[prop(into)] label: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label for=name class="login-label">
            <span class="login-label__text">{move || label.get()}</span>
            {children()}
            <Show when=move || error.get().is_some()>
                <p class="login-label__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

/// Controlled text input. `on_blur` is used for per-field validation.
#[component]
pub fn Input(
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <input
            class="login-input"
            id=name.clone()
            name=name
            type=input_type
            placeholder=move || placeholder.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:blur=move |_| {
                if let Some(cb) = on_blur {
                    cb.run(());
                }
            }
        />
    }
}

/// Submit button that disables itself and swaps its label while a request is
/// in flight.
#[component]
pub fn Submit(
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] text: Signal<String>,
    #[prop(into)] pending_text: Signal<String>,
) -> impl IntoView {
    view! {
        <button
            class="login-button"
            type="submit"
            disabled=move || is_submitting.get()
            aria-busy=move || is_submitting.get().to_string()
        >
            {move || if is_submitting.get() { pending_text.get() } else { text.get() }}
        </button>
    }
}

/// Form-level error, e.g. a rejected login.
#[component]
pub fn FormAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="login-message login-message--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
