//! Collapsible navigation panel for narrow screens.

use leptos::prelude::*;

use crate::data::navigation::{ABOUT_MENU, NAV_LINKS, NavIcon, mobile_main_links};
use crate::i18n::{Locale, use_i18n};
use crate::state::ui::UiState;

/// Rendered under the header; visible while `UiState::mobile_menu_open`.
/// Following any link or picking a language closes it.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = use_i18n();
    let about_open = RwSignal::new(false);
    let lang_open = RwSignal::new(false);

    let close = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_mobile_menu);

    let panel_class = move || {
        if ui.get().mobile_menu_open { "mobile-menu mobile-menu--open" } else { "mobile-menu" }
    };

    let about_link = &NAV_LINKS[1];

    view! {
        <div class=panel_class aria-hidden=move || (!ui.get().mobile_menu_open).to_string()>
            <nav class="mobile-menu__nav">
                <ul class="mobile-menu__list">
                    {mobile_main_links()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.path class="mobile-menu__link" on:click=close>
                                        <span class="mobile-menu__icon">{link.icon.glyph()}</span>
                                        <span>{move || i18n.t_or(link.translation_key, link.default_text)}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}

                    <li>
                        <button
                            class="mobile-menu__link mobile-menu__group"
                            on:click=move |_| about_open.update(|open| *open = !*open)
                        >
                            <span class="mobile-menu__icon">{NavIcon::Info.glyph()}</span>
                            <span>{move || i18n.t_or(about_link.translation_key, about_link.default_text)}</span>
                            <span class=move || if about_open.get() { "chevron chevron--open" } else { "chevron" }>
                                "▾"
                            </span>
                        </button>
                        <Show when=move || about_open.get()>
                            <div class="mobile-menu__sub">
                                {ABOUT_MENU
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <a href=item.path class="mobile-menu__link" on:click=close>
                                                {move || i18n.t_or(item.translation_key, item.default_text)}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </li>

                    <li>
                        <button
                            class="mobile-menu__link mobile-menu__group"
                            on:click=move |_| lang_open.update(|open| *open = !*open)
                        >
                            <span class="mobile-menu__icon">"🌐"</span>
                            <span>{move || i18n.locale().language_label()}</span>
                            <span class=move || if lang_open.get() { "chevron chevron--open" } else { "chevron" }>
                                "▾"
                            </span>
                        </button>
                        <Show when=move || lang_open.get()>
                            <div class="mobile-menu__sub">
                                {Locale::ALL
                                    .into_iter()
                                    .map(|locale| {
                                        view! {
                                            <button
                                                class="mobile-menu__link"
                                                on:click=move |_| {
                                                    i18n.set_locale(locale);
                                                    ui.update(UiState::close_mobile_menu);
                                                }
                                            >
                                                {locale.native_name()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </li>
                </ul>
            </nav>

            <div class="mobile-menu__auth">
                <a href="/login" class="btn btn--outline" on:click=close>
                    {move || i18n.t("header.login")}
                </a>
                <a href="/register" class="btn btn--accent" on:click=close>
                    {move || i18n.t("header.register")}
                </a>
            </div>
        </div>
    }
}
