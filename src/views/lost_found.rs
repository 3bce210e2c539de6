use crate::api::{LostFoundBackend, SelectedFile};
use crate::board::ItemBoard;
use crate::types::{Filter, Item, ItemKind};
use crate::ui::Backends;
use dioxus::html::FileEngine;
use dioxus::prelude::*;

#[component]
pub fn LostFoundView() -> Element {
    let backends = use_context::<Backends>();
    let lost_found = use_signal(move || backends.lost_found.clone());
    let mut board = use_signal(ItemBoard::new);

    use_future(move || async move {
        let client = lost_found.read().clone();
        let result = client.list_items().await;
        board.write().load_items(result, client.base_url());
    });

    let submit_item = move |ev: FormEvent| {
        ev.prevent_default();
        let form = board.read().prepare_upload();
        let client = lost_found.read().clone();
        spawn(async move {
            let result = client.upload(form).await;
            let refetch = board.write().finish_upload(result);
            if refetch {
                let items = client.list_items().await;
                board.write().load_items(items, client.base_url());
            }
        });
    };

    let on_file_selected = move |ev: FormEvent| async move {
        let Some(engine) = ev.files() else {
            return;
        };
        let mut picked = Vec::new();
        if let Some(name) = engine.files().into_iter().next() {
            if let Some(bytes) = engine.read_file(&name).await {
                picked.push(SelectedFile::new(name, bytes));
            }
        }
        board.write().on_file_selected(picked);
    };

    let snapshot = board.read().clone();
    let form = &snapshot.form;

    rsx! {
        div { class: "main-container lost-found",
            form { class: "report-form", onsubmit: submit_item,
                h3 { class: "section-title", "Report an item" }
                div { class: "theme-toggle",
                    for kind in [ItemKind::Lost, ItemKind::Found] {
                        button {
                            key: "{kind}",
                            class: format_args!("theme-option {}", if form.kind == kind { "active" } else { "" }),
                            r#type: "button",
                            onclick: move |_| board.write().form.kind = kind,
                            "{kind}"
                        }
                    }
                }
                textarea {
                    placeholder: "Description",
                    value: "{form.description}",
                    oninput: move |ev| board.write().form.description = ev.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Where was it? (optional)",
                    value: "{form.location}",
                    oninput: move |ev| board.write().form.location = ev.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Contact e-mail (optional)",
                    value: "{form.contact_info}",
                    oninput: move |ev| board.write().form.contact_info = ev.value(),
                }
                input {
                    key: "file-{snapshot.file_input_key()}",
                    id: "image",
                    r#type: "file",
                    accept: "image/*",
                    onchange: on_file_selected,
                }
                button { class: "btn btn-primary", r#type: "submit", "Submit" }
            }

            div { class: "doc-controls",
                for filter in Filter::ALL {
                    button {
                        key: "{filter.label()}",
                        class: format_args!("tag-pill {}", if snapshot.filter() == filter { "active" } else { "" }),
                        r#type: "button",
                        onclick: move |_| board.write().change_filter(filter),
                        "{filter.label()}"
                    }
                }
            }

            if snapshot.filtered_items().next().is_none() {
                p { class: "text-muted", "No items to show." }
            }
            for item in snapshot.filtered_items() {
                ItemCard { key: "{item.id}", item: item.clone(), board }
            }
        }
    }
}

#[component]
fn ItemCard(item: Item, board: Signal<ItemBoard>) -> Element {
    let mut board = board;
    let toggle_id = item.id.clone();

    rsx! {
        div { class: format_args!("item-card {}", item.kind),
            div { class: "item-header",
                onclick: move |_| board.write().toggle_expanded(&toggle_id),
                span { class: "tag-pill tag-pill-compact", "{item.kind}" }
                span { class: "item-description", "{item.description}" }
                if let Some(ts) = item.display_timestamp() {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
            if item.expanded {
                div { class: "item-details",
                    if let Some(src) = item.image_path.as_deref() {
                        img { class: "item-image", src: "{src}", alt: "{item.description}" }
                    }
                    if let Some(location) = item.location.as_deref() {
                        p { "Location: {location}" }
                    }
                    if let Some(contact) = item.contact_info.as_deref() {
                        p { "Contact: {contact}" }
                    }
                    if !item.detections.is_empty() {
                        div { class: "bubble-tags",
                            for detection in item.detections.iter() {
                                span { class: "tag-pill tag-pill-compact",
                                    {format!("{} {:.0}%", detection.name, detection.confidence * 100.0)}
                                }
                            }
                        }
                    }
                    if !item.matches.is_empty() {
                        h4 { "Possible matches" }
                        ul {
                            for candidate in item.matches.iter() {
                                li { key: "{candidate.id}",
                                    {format!("{} ({:.0}% similar)", candidate.description, candidate.similarity * 100.0)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
