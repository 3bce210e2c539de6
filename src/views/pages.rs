use crate::content::{Availability, FEATURES, Page, SERVICES, TEAM_MEMBERS};
use crate::countdown::{Countdown, CountdownTimer};
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn ServicesView(active_page: Signal<Page>) -> Element {
    let mut active_page = active_page;
    rsx! {
        div { class: "main-container services",
            for card in SERVICES.iter().copied() {
                div { key: "{card.title}", class: format_args!("service-card accent-{}", card.accent),
                    span { class: "service-icon", "data-icon": "{card.icon}" }
                    h3 { class: "section-title", "{card.title}" }
                    p { "{card.description}" }
                    button {
                        class: format_args!(
                            "btn {}",
                            if card.availability == Availability::Open { "btn-primary" } else { "btn-muted" }
                        ),
                        r#type: "button",
                        onclick: move |_| active_page.set(card.target),
                        "{card.availability.label()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "main-container about",
            div { class: "settings-section",
                h3 { class: "section-title", "Team" }
                for member in TEAM_MEMBERS.iter() {
                    div { key: "{member.name}", class: "team-member",
                        h4 { "{member.name}" }
                        p { class: "text-muted", "{member.role}" }
                        p { "{member.bio}" }
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Features" }
                for feature in FEATURES.iter() {
                    div { key: "{feature.name}", class: "feature",
                        h4 { "{feature.name}" }
                        p { "{feature.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ComingSoonView() -> Element {
    // Written from the timer task, hence the thread-safe signal.
    let mut countdown = use_signal_sync(Countdown::default);
    let timer = use_hook(move || {
        Rc::new(CountdownTimer::start(*countdown.peek(), move |remaining| {
            countdown.set(remaining)
        }))
    });
    use_drop(move || timer.stop());

    let remaining = countdown();
    rsx! {
        div { class: "main-container coming-soon",
            h2 { "Coming Soon" }
            p { class: "text-muted", "We're working hard to bring you something amazing." }
            div { class: "countdown",
                CountdownUnit { value: remaining.days, label: "Days" }
                CountdownUnit { value: remaining.hours, label: "Hours" }
                CountdownUnit { value: remaining.minutes, label: "Minutes" }
                CountdownUnit { value: remaining.seconds, label: "Seconds" }
            }
        }
    }
}

#[component]
fn CountdownUnit(value: u32, label: &'static str) -> Element {
    rsx! {
        div { class: "countdown-unit",
            span { class: "countdown-value", "{value:02}" }
            span { class: "countdown-label", "{label}" }
        }
    }
}
