use crate::api::{LostFoundClient, NavigationClient};
use crate::config::AppConfig;
use crate::content::Page;
use crate::views::{AboutView, ChatView, ComingSoonView, LostFoundView, ServicesView};
use dioxus::prelude::*;
use std::sync::Arc;

const CAMPUS_CSS: Asset = asset!("/assets/campus.css");
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Backend clients shared by the views, built once from the runtime config.
#[derive(Clone)]
pub struct Backends {
    pub navigation: Arc<NavigationClient>,
    pub lost_found: Arc<LostFoundClient>,
}

impl Backends {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            navigation: Arc::new(NavigationClient::new(config.navigation_base())),
            lost_found: Arc::new(LostFoundClient::new(config.lost_and_found_base())),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = AppConfig::from_env();
        tracing::info!(
            navigation = %config.navigation_base(),
            lost_and_found = %config.lost_and_found_base(),
            "backends configured"
        );
        Backends::from_config(&config)
    });
    let active_page = use_signal(|| Page::Assistant);

    rsx! {
        document::Link { rel: "stylesheet", href: CAMPUS_CSS }
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        AppHeader { active_page }
        PagePanels { active_page }
    }
}

#[component]
fn AppHeader(active_page: Signal<Page>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "wordmark", "Campus Assistant" }
                PageNavigation { active_page }
            }
        }
    }
}

#[component]
fn PagePanels(active_page: Signal<Page>) -> Element {
    // The chat panel stays mounted so the conversation and its maps survive
    // switching pages; the others are rebuilt on each visit.
    let page = active_page();
    rsx! {
        div { class: "tab-panels",
            PagePanel {
                active: page == Page::Assistant,
                children: rsx!( ChatView {} ),
            }
            {match page {
                Page::Assistant => rsx! {},
                Page::LostAndFound => rsx! { LostFoundView {} },
                Page::Services => rsx! { ServicesView { active_page } },
                Page::About => rsx! { AboutView {} },
                Page::ComingSoon => rsx! { ComingSoonView {} },
            }}
        }
    }
}

#[component]
fn PagePanel(active: bool, children: Element) -> Element {
    let class_suffix = if active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!active).to_string(),
            {children}
        }
    }
}

#[component]
fn PageNavigation(active_page: Signal<Page>) -> Element {
    rsx! {
        div { class: "tabs",
            for page in Page::NAVIGATION {
                PageButton { key: "{page.label()}", active_page, page }
            }
        }
    }
}

#[component]
fn PageButton(active_page: Signal<Page>, page: Page) -> Element {
    let mut active_page = active_page;
    let class = if active_page() == page { "tab active" } else { "tab" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_page.set(page),
            "{page.label()}"
        }
    }
}
