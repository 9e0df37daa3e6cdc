//! Site footer: brand blurb, contact links, navigation and legal links.
//!
//! Contact details and legal-link visibility come from the admin settings
//! in context. The two optional props override the settings flags.

use leptos::prelude::*;

use crate::data::navigation::NAV_LINKS;
use crate::i18n::use_i18n;
use crate::state::settings::SettingsState;
use crate::util::calendar;

#[component]
pub fn Footer(
    #[prop(optional)] has_terms_and_conditions: Option<bool>,
    #[prop(optional)] has_privacy_policy: Option<bool>,
) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let i18n = use_i18n();
    let year = calendar::today().year();

    let show_terms = move || settings.with(|s| s.show_terms(has_terms_and_conditions));
    let show_privacy = move || settings.with(|s| s.show_privacy(has_privacy_policy));

    view! {
        <Show
            when=move || !settings.with(|s| s.loading)
            fallback=|| {
                view! {
                    <footer class="site-footer site-footer--loading">
                        <div class="pulse pulse--bar"></div>
                    </footer>
                }
            }
        >
            <footer class="site-footer">
                <div class="site-footer__grid">
                    <div class="site-footer__brand">
                        <h2 class="site-footer__logo">"Hala"</h2>
                        <p class="site-footer__blurb">{move || i18n.t("footer.logo.description")}</p>
                        <div class="site-footer__social">
                            <a
                                href=move || settings.with(|s| s.settings.whatsapp_link())
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link social-link--whatsapp"
                                title=move || i18n.t("footer.social.whatsapp")
                            >
                                "☏"
                            </a>
                            <a
                                href=move || settings.with(|s| s.settings.mailto_link())
                                class="social-link social-link--email"
                                title=move || i18n.t("footer.social.email")
                            >
                                "✉"
                            </a>
                        </div>
                    </div>

                    <div class="site-footer__column">
                        <h3>{move || i18n.t("footer.navigation.title")}</h3>
                        <ul>
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.path>
                                                {move || i18n.t_or(link.translation_key, link.default_text)}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="site-footer__column">
                        <h3>{move || i18n.t("footer.legal.title")}</h3>
                        <ul>
                            <Show when=show_terms>
                                <li>
                                    <a href="/terms">{move || i18n.t("footer.legal.terms")}</a>
                                </li>
                            </Show>
                            <Show when=show_privacy>
                                <li>
                                    <a href="/privacy">{move || i18n.t("footer.legal.privacy")}</a>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>

                <p class="site-footer__copyright">
                    {move || format!("© {year} Hala {}", i18n.t("footer.copyright"))}
                </p>
            </footer>
        </Show>
    }
}
