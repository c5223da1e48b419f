mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::{ContentReviewApp, run};
pub use message::Message;
pub use state::AppState;
