use std::sync::Arc;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{column, container, pick_list, row, scrollable, text},
};

use crate::{
    analyzer::Analyzer,
    config::ReviewConfig,
    gui::{
        AppState, Message,
        screens::{Screen, ScreenMessage, review_panel::ReviewPanelScreen},
    },
    models::Locale,
};

pub struct ContentReviewApp {
    state: AppState,
    panel: ReviewPanelScreen,
}

impl ContentReviewApp {
    pub fn new(config: ReviewConfig, analyzer: Arc<dyn Analyzer>) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(config, analyzer),
                panel: ReviewPanelScreen::default(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        self.state.labels().title.to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LocaleSelected(locale) => {
                tracing::info!(locale = locale.code(), "locale changed");
                self.state.config.locale = locale;
                Task::none()
            }
            Message::ReviewPanel(ScreenMessage::ScreenMessage(msg)) => self
                .panel
                .update(msg, &mut self.state)
                .map(Message::ReviewPanel),
            Message::ReviewPanel(ScreenMessage::ParentMessage(never)) => match never {},
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let labels = self.state.labels();

        let header = row![
            text(labels.title).size(28).width(Length::Fill),
            pick_list(
                Locale::ALL,
                Some(self.state.config.locale),
                Message::LocaleSelected
            ),
        ]
        .align_y(Center)
        .spacing(20);

        let content = column![header, self.panel.view(&self.state).map(Message::ReviewPanel)]
            .spacing(20)
            .padding(20)
            .align_x(Center);

        container(scrollable(content))
            .center_x(Length::Fill)
            .into()
    }
}

/// Open the review window and block until it is closed
pub fn run(config: ReviewConfig, analyzer: Arc<dyn Analyzer>) -> iced::Result {
    iced::application(
        move || ContentReviewApp::new(config.clone(), analyzer.clone()),
        ContentReviewApp::update,
        ContentReviewApp::view,
    )
    .title(ContentReviewApp::title)
    .run()
}
