//! Building blocks shared by the auth forms.
//!
//! Inputs bind straight to an `RwSignal<String>` the page owns. Errors are
//! passed as a `Signal<Option<String>>`, usually built by [`field_error`]
//! from the page's `FormErrors`.

#[cfg(test)]
#[path = "form_elements_test.rs"]
mod form_elements_test;

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::util::validation::{Field, FormErrors};

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
            Self::Outline => "btn--outline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn--sm",
            Self::Md => "btn--md",
            Self::Lg => "btn--lg",
        }
    }
}

pub(crate) fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if full_width {
        class.push_str(" btn--block");
    }
    class
}

pub(crate) fn input_class(has_icon: bool, has_error: bool) -> &'static str {
    match (has_icon, has_error) {
        (false, false) => "field__input",
        (true, false) => "field__input field__input--icon",
        (false, true) => "field__input field__input--error",
        (true, true) => "field__input field__input--icon field__input--error",
    }
}

/// Translated error text for `field`, tracking both the errors and the
/// active language.
pub fn field_error(errors: RwSignal<FormErrors>, field: Field) -> Signal<Option<String>> {
    let i18n = use_i18n();
    Signal::derive(move || errors.with(|e| e.get(field)).map(|err| i18n.t(err.translation_key())))
}

#[component]
fn ErrorText(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="field__error" role="alert">
                "⚠ "
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Text input with a floating label and inline error.
#[component]
pub fn FormInput(
    input_type: &'static str,
    id: &'static str,
    value: RwSignal<String>,
    #[prop(into)] label: Signal<String>,
    error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    /// Glyph drawn inside the field's leading edge.
    #[prop(optional)]
    icon: Option<&'static str>,
) -> impl IntoView {
    let has_value = move || value.with(|v| !v.is_empty());

    view! {
        <div class="field">
            <div class="field__control">
                {icon.map(|glyph| view! { <span class="field__icon">{glyph}</span> })}
                <input
                    type=input_type
                    id=id
                    name=id
                    placeholder=" "
                    class=move || input_class(icon.is_some(), error.with(Option::is_some))
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <label
                    for=id
                    class="field__label"
                    class:field__label--raised=has_value
                    class:field__label--error=move || error.with(Option::is_some)
                >
                    {move || label.get()}
                    {required.then(|| view! { <span class="field__required">"*"</span> })}
                </label>
            </div>
            <ErrorText error=error />
        </div>
    }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    /// Disables the button and shows a spinner.
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class(variant, size, full_width)
            class:btn--disabled=move || busy.get()
            disabled=move || busy.get()
            on:click=move |_| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(());
                }
            }
        >
            <Show when=move || busy.get()>
                <span class="spinner spinner--inline"></span>
            </Show>
            {children()}
        </button>
    }
}

#[component]
pub fn Checkbox(
    id: &'static str,
    checked: RwSignal<bool>,
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="field field--checkbox">
            <div class="checkbox">
                <input
                    type="checkbox"
                    id=id
                    name=id
                    class="checkbox__input"
                    prop:checked=move || checked.get()
                    on:change=move |ev| checked.set(event_target_checked(&ev))
                />
                <label for=id class="checkbox__label">
                    {children()}
                </label>
            </div>
            <ErrorText error=error />
        </div>
    }
}

/// Centered page backdrop for the auth screens.
#[component]
pub fn AuthContainer(children: Children) -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-container__inner">{children()}</div>
        </div>
    }
}

#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! { <div class="auth-card">{children()}</div> }
}

/// Header block of an auth card: badge, title and subtitle.
#[component]
pub fn AuthHeading(
    badge: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="auth-card__heading">
            <div class="auth-card__badge">{badge}</div>
            <h1 class="auth-card__title">{move || title.get()}</h1>
            <p class="auth-card__subtitle">{move || subtitle.get()}</p>
        </div>
    }
}

/// Horizontal rule with a centered caption.
#[component]
pub fn Divider(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div class="divider">
            <span class="divider__line"></span>
            <span class="divider__text">{move || text.get()}</span>
            <span class="divider__line"></span>
        </div>
    }
}
