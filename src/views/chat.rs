use crate::api::NavigationBackend;
use crate::chat::ChatSession;
use crate::map::{LeafletRenderer, MapRegistry, RETRY_DELAY, leaflet_outcome, leaflet_status_script};
use crate::types::{MapId, Sender};
use crate::ui::Backends;
use dioxus::prelude::*;

type ChatMaps = MapRegistry<LeafletRenderer<fn(&str)>>;

fn run_script(script: &str) {
    let _ = document::eval(script);
}

fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user",
        Sender::Bot => "assistant",
    }
}

#[component]
pub fn ChatView() -> Element {
    let backends = use_context::<Backends>();
    let navigation = use_signal(move || backends.navigation.clone());
    let mut session = use_signal(ChatSession::new);
    let maps = use_signal(|| -> ChatMaps {
        MapRegistry::new(LeafletRenderer::new(run_script as fn(&str)))
    });

    let mut send_message = move || {
        let Some(query) = session.write().begin_send() else {
            return;
        };
        let client = navigation.read().clone();
        spawn(async move {
            let result = client.ask(&query).await;
            session.write().complete(result);
        });
    };

    let snapshot = session.read().clone();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for (i, msg) in snapshot.messages().iter().enumerate() {
                        div { key: "{i}", class: format_args!("message-row {}", sender_class(msg.sender)),
                            if msg.sender == Sender::Bot { div { class: "avatar assistant", "C" } }
                            div { class: "message-stack",
                                div { class: format_args!("bubble {}", sender_class(msg.sender)), "{msg.text}" }
                                if let Some((map_id, _)) = msg.map_target() {
                                    MapAnchor { map_id, session, maps }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "composer",
                onsubmit: move |ev| {
                    ev.prevent_default();
                    send_message();
                },
                div { class: "composer-inner",
                    div { class: "hstack",
                        input {
                            r#type: "text",
                            placeholder: "Ask about a building, a room, a service…",
                            value: "{snapshot.input()}",
                            oninput: move |ev| session.write().set_input(ev.value()),
                            autofocus: true,
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: snapshot.input().trim().is_empty(),
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

/// Container a map is drawn into. Mounting it tells the registry the element exists;
/// dropping it releases the map. Leaflet loads from a CDN, so after each attempt the
/// page is asked whether the map is really there and a miss is retried.
#[component]
fn MapAnchor(map_id: MapId, session: Signal<ChatSession>, maps: Signal<ChatMaps>) -> Element {
    let mut maps = maps;
    use_drop(move || {
        // The registry may already be gone when the whole chat view unmounts.
        if let Ok(mut registry) = maps.try_write() {
            registry.anchor_unmounted(map_id);
        }
    });

    rsx! {
        div {
            id: "{map_id}",
            class: "chat-map",
            onmounted: move |_| async move {
                maps.write().anchor_mounted(map_id);
                loop {
                    let messages = session.read().messages().to_vec();
                    maps.write().sync(&messages);
                    tokio::time::sleep(RETRY_DELAY).await;

                    let status = document::eval(&leaflet_status_script(&map_id.to_string()))
                        .join::<String>()
                        .await
                        .unwrap_or_else(|err| format!("status check failed: {err:?}"));
                    let Err(err) = leaflet_outcome(map_id, &status) else {
                        break;
                    };
                    if !maps.write().creation_failed(err) {
                        break;
                    }
                }
            },
        }
    }
}
