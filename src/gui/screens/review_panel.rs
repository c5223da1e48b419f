use std::{convert::Infallible, path::PathBuf};

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, image::Handle, text},
};
use rfd::AsyncFileDialog;

use crate::{
    error::ReviewError,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{report_view, step_bar},
    },
    intake::{self, IMAGE_EXTENSIONS},
    models::AnalysisReport,
    review::{AnalysisRequest, ReviewState},
};

/// Pick an image, run the analyzer, show the report
#[derive(Debug, Clone, Default)]
pub struct ReviewPanelScreen {
    review: ReviewState,
    /// Preview for the current selection, rebuilt on every new selection
    preview: Option<Handle>,
}

#[derive(Debug, Clone)]
pub enum ReviewPanelMessage {
    ChooseImage,
    ImagePicked(Option<PathBuf>),
    Analyze,
    AnalysisFinished(AnalysisRequest, Result<AnalysisReport, ReviewError>),
}

impl ReviewPanelScreen {
    fn apply(&mut self, transition: impl FnOnce(ReviewState) -> ReviewState) {
        self.review = transition(std::mem::take(&mut self.review));
    }
}

impl Screen for ReviewPanelScreen {
    type Message = ReviewPanelMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let labels = state.labels();

        let preview: Element<'_, ScreenMessage<Self>> = match &self.preview {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(320.0))
                .into(),
            None => container(text(labels.placeholder))
                .padding(24)
                .center_x(Length::Fill)
                .style(iced_widget::container::bordered_box)
                .into(),
        };

        let file_name = self
            .review
            .selection()
            .map(|selection| match selection.dimensions {
                Some((w, h)) => format!("{} ({w}x{h})", selection.file_name),
                None => selection.file_name.clone(),
            })
            .unwrap_or_default();

        let check_label = if self.review.is_analyzing() {
            labels.analyzing
        } else {
            labels.check
        };
        // Disabled while there is nothing to analyze or a run is in flight
        let check_button = button(text(check_label)).on_press_maybe(
            self.review
                .can_analyze()
                .then_some(ScreenMessage::ScreenMessage(ReviewPanelMessage::Analyze)),
        );

        let mut content = column![
            step_bar(self.review.phase(), labels),
            preview,
            text(file_name).size(14),
            button(text(labels.choose_image))
                .on_press(ScreenMessage::ScreenMessage(ReviewPanelMessage::ChooseImage)),
            check_button,
        ]
        .spacing(16)
        .padding(24)
        .max_width(640.0)
        .align_x(Center);

        if let Some(report) = self.review.report() {
            content = content.push(report_view(report));
        } else if let Some(failure) = self.review.failure() {
            content = content.push(text(format!("{}: {failure}", labels.analysis_failed)));
        }

        container(content).center_x(Length::Fill).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ReviewPanelMessage::ChooseImage => Task::perform(
                AsyncFileDialog::new()
                    .set_title(state.labels().choose_image)
                    .add_filter(state.labels().image_filter, IMAGE_EXTENSIONS)
                    .pick_file(),
                |handle| {
                    ScreenMessage::ScreenMessage(ReviewPanelMessage::ImagePicked(
                        handle.map(|data| data.path().to_path_buf()),
                    ))
                },
            ),
            ReviewPanelMessage::ImagePicked(None) => Task::none(),
            ReviewPanelMessage::ImagePicked(Some(path)) => {
                if let Some(picked) = intake::select_path(&path) {
                    self.apply(|review| review.select(picked));
                    self.preview = self
                        .review
                        .selection()
                        .map(|selection| Handle::from_path(&selection.preview.path));
                }
                Task::none()
            }
            ReviewPanelMessage::Analyze => {
                let (review, request) =
                    std::mem::take(&mut self.review).begin_analysis(state.profile());
                self.review = review;

                match request {
                    Some(request) => Task::perform(state.analyzer.analyze(&request), move |outcome| {
                        ScreenMessage::ScreenMessage(ReviewPanelMessage::AnalysisFinished(
                            request, outcome,
                        ))
                    }),
                    None => Task::none(),
                }
            }
            ReviewPanelMessage::AnalysisFinished(request, outcome) => {
                self.apply(|review| review.complete_analysis(&request, outcome));
                Task::none()
            }
        }
    }
}
