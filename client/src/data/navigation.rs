//! Static navigation tables shared by the header, mobile menu and footer.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Icon shown beside a link in the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Info,
    Tools,
    Envelope,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Info => "ℹ",
            Self::Tools => "⚙",
            Self::Envelope => "✉",
        }
    }
}

/// One navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub translation_key: &'static str,
    /// Text used when the key is missing from every bundle.
    pub default_text: &'static str,
    pub icon: NavIcon,
}

impl NavLink {
    const fn new(path: &'static str, translation_key: &'static str, default_text: &'static str, icon: NavIcon) -> Self {
        Self { path, translation_key, default_text, icon }
    }
}

/// Primary site sections, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink::new("/", "header.home", "Home", NavIcon::Home),
    NavLink::new("/about", "header.about", "About Us", NavIcon::Info),
    NavLink::new("/services", "header.services", "Services", NavIcon::Tools),
    NavLink::new("/contact", "header.contact", "Contact Us", NavIcon::Envelope),
];

/// Entries under the About dropdown.
pub const ABOUT_MENU: &[NavLink] = &[
    NavLink::new("/about/about-hala", "header.aboutHala", "Our Story", NavIcon::Info),
    NavLink::new("/about/careers", "header.careers", "Careers", NavIcon::Info),
    NavLink::new("/about/news", "header.news", "News", NavIcon::Info),
];

/// Top-level mobile entries; About is rendered as its own collapsible group.
pub fn mobile_main_links() -> impl Iterator<Item = &'static NavLink> {
    NAV_LINKS.iter().filter(|link| link.path != "/about")
}

/// Whether `link_path` should render as active for `current`. The home link
/// only matches exactly; section links also match their sub-pages.
pub fn is_active(link_path: &str, current: &str) -> bool {
    if link_path == "/" {
        return current == "/";
    }
    current == link_path || current.strip_prefix(link_path).is_some_and(|rest| rest.starts_with('/'))
}
