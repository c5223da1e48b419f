use crate::{
    gui::screens::{ScreenMessage, review_panel::ReviewPanelScreen},
    models::Locale,
};

#[derive(Debug, Clone)]
pub enum Message {
    ReviewPanel(ScreenMessage<ReviewPanelScreen>),
    LocaleSelected(Locale),
}
