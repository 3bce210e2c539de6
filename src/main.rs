#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // Optional; `AppConfig::from_env` falls back to the bundled defaults.
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!("no .env loaded: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn main() {
    let _ = tracing_subscriber::fmt::try_init();
    load_dotenv();
    dioxus::launch(campus_assistant::ui::App);
}
