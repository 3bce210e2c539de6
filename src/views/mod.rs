pub mod chat;
pub mod lost_found;
pub mod pages;

pub use chat::ChatView;
pub use lost_found::LostFoundView;
pub use pages::{AboutView, ComingSoonView, ServicesView};
