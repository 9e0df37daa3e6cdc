//! Fixed site header: logo, primary navigation, language menu, auth links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `UiState` for the active language and mobile-menu flag. Dropdowns
//! close on outside clicks; the bar gains a shadow once the page scrolls.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::mobile_menu::MobileMenu;
use crate::data::navigation::{ABOUT_MENU, NAV_LINKS, NavLink, is_active};
use crate::i18n::{Locale, use_i18n};
use crate::state::ui::UiState;
use crate::util::click_outside::close_on_click_outside;
use crate::util::scroll::track_scrolled;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = use_i18n();
    let pathname = use_location().pathname;

    let scrolled = RwSignal::new(false);
    let about_open = RwSignal::new(false);
    let lang_open = RwSignal::new(false);
    let about_ref = NodeRef::<Div>::new();
    let lang_ref = NodeRef::<Div>::new();

    track_scrolled(scrolled);
    close_on_click_outside(about_ref, about_open);
    close_on_click_outside(lang_ref, lang_open);

    let header_class = move || {
        if scrolled.get() { "site-header site-header--scrolled" } else { "site-header" }
    };

    let chevron = |open: RwSignal<bool>| {
        move || if open.get() { "chevron chevron--open" } else { "chevron" }
    };

    let simple_link = move |link: &'static NavLink| {
        view! {
            <li class="site-nav__item">
                <a
                    href=link.path
                    class="site-nav__link"
                    class:site-nav__link--active=move || pathname.with(|current| is_active(link.path, current))
                >
                    {move || i18n.t_or(link.translation_key, link.default_text)}
                </a>
            </li>
        }
    };

    view! {
        <header class=header_class>
            <div class="site-header__bar">
                <a href="/" class="site-header__logo">"Hala"</a>

                <button
                    class="site-header__menu-toggle"
                    aria-label=move || i18n.t("header.menu")
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>

                <div class="site-header__desktop">
                    <nav class="site-nav">
                        <ul class="site-nav__list">
                            {simple_link(&NAV_LINKS[0])}
                            <li class="site-nav__item site-nav__item--dropdown">
                                <div node_ref=about_ref class="dropdown">
                                    <button
                                        class="site-nav__link dropdown__toggle"
                                        class:site-nav__link--active=move || {
                                            pathname.with(|current| is_active(NAV_LINKS[1].path, current))
                                        }
                                        on:click=move |_| about_open.update(|open| *open = !*open)
                                    >
                                        {move || i18n.t_or(NAV_LINKS[1].translation_key, NAV_LINKS[1].default_text)}
                                        <span class=chevron(about_open)>"▾"</span>
                                    </button>
                                    <Show when=move || about_open.get()>
                                        <div class="dropdown__menu">
                                            {ABOUT_MENU
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <a
                                                            href=item.path
                                                            class="dropdown__item"
                                                            on:click=move |_| about_open.set(false)
                                                        >
                                                            <span class="dropdown__icon">{item.icon.glyph()}</span>
                                                            <span>{move || i18n.t_or(item.translation_key, item.default_text)}</span>
                                                        </a>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            </li>
                            {simple_link(&NAV_LINKS[2])}
                            {simple_link(&NAV_LINKS[3])}
                        </ul>
                    </nav>

                    <div class="site-header__actions">
                        <div node_ref=lang_ref class="dropdown">
                            <button
                                class="site-nav__link dropdown__toggle"
                                on:click=move |_| lang_open.update(|open| *open = !*open)
                            >
                                <span class="dropdown__icon">"🌐"</span>
                                <span>{move || i18n.locale().language_label()}</span>
                                <span class=chevron(lang_open)>"▾"</span>
                            </button>
                            <Show when=move || lang_open.get()>
                                <div class="dropdown__menu dropdown__menu--end">
                                    {Locale::ALL
                                        .into_iter()
                                        .map(|locale| {
                                            view! {
                                                <button
                                                    class="dropdown__item"
                                                    on:click=move |_| {
                                                        i18n.set_locale(locale);
                                                        lang_open.set(false);
                                                    }
                                                >
                                                    {locale.native_name()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>

                        <a href="/login" class="site-nav__link">
                            "→ "
                            {move || i18n.t("header.login")}
                        </a>
                        <a href="/register" class="btn btn--accent">
                            "+ "
                            {move || i18n.t("header.register")}
                        </a>
                    </div>
                </div>
            </div>

            <MobileMenu />
        </header>
    }
}
