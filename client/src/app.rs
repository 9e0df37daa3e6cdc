//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loading_screen::LoadingScreen;
use crate::i18n::{self, I18n};
use crate::net::api::refresh_admin_settings;
use crate::pages::{
    about::{AboutHalaPage, AboutPage, CareersPage, NewsPage},
    admin::AdminPage,
    contact::ContactPage,
    forgot_password::ForgotPasswordPage,
    home::HomePage,
    legal::{PrivacyPage, TermsPage},
    login::LoginPage,
    not_found::NotFoundPage,
    register::RegisterPage,
    reset_password::ResetPasswordPage,
    services::ServicesPage,
};
use crate::state::settings::SettingsState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and settings contexts, keeps `<html lang dir>`
/// in step with the active language, and shows the splash for a moment on
/// start-up and after every language switch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let settings = RwSignal::new(SettingsState { loading: true, ..SettingsState::default() });
    provide_context(ui);
    provide_context(settings);
    let i18n = I18n::new(ui);

    // Browser-only start-up work, after hydration so the server markup
    // (always English) is adopted unchanged.
    Effect::new(move || {
        // Detected languages are shown but only explicit switches are saved.
        i18n.show_locale(i18n::read_preference());
        refresh_admin_settings(settings);
    });

    let locale = Memo::new(move |_| ui.with(|u| u.locale));
    let splash_generation = StoredValue::new(0_u64);
    Effect::new(move || {
        i18n::apply(locale.get());
        splash_generation.update_value(|g| *g += 1);
        ui.update(|u| u.loading = true);
        hide_splash_later(ui, splash_generation);
    });

    let loading = Signal::derive(move || ui.with(|u| u.loading));

    view! {
        <Stylesheet id="leptos" href="/pkg/hala.css"/>
        <Title text="Hala"/>

        <Router>
            <LoadingScreen loading=loading/>
            <Show when=move || !loading.get()>
                <Header/>
            </Show>
            <main class="site-main" class:site-main--hidden=move || loading.get()>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=(StaticSegment("about"), StaticSegment("about-hala")) view=AboutHalaPage/>
                    <Route path=(StaticSegment("about"), StaticSegment("careers")) view=CareersPage/>
                    <Route path=(StaticSegment("about"), StaticSegment("news")) view=NewsPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
            <Show when=move || !loading.get()>
                <Footer/>
            </Show>
        </Router>
    }
}

/// Clear the splash after `SPLASH_MS` unless a newer switch restarted it.
fn hide_splash_later(ui: RwSignal<UiState>, generation: StoredValue<u64>) {
    #[cfg(feature = "hydrate")]
    {
        let started = generation.get_value();
        gloo_timers::callback::Timeout::new(crate::state::ui::SPLASH_MS, move || {
            if generation.get_value() == started {
                ui.update(|u| u.loading = false);
            }
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
        ui.update(|u| u.loading = false);
    }
}
