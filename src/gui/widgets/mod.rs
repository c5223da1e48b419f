use iced::{
    Color, Element, Length, Theme, border,
    widget::{Column, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    labels::Labels,
    models::{AnalysisReport, ReportStatus},
    render::{self, SectionBody},
    review::ReviewPhase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    ChooseImage,
    Analyze,
    Review,
}

impl Step {
    const ALL: [Step; 3] = [Step::ChooseImage, Step::Analyze, Step::Review];

    fn current(phase: ReviewPhase) -> Self {
        match phase {
            ReviewPhase::Empty => Step::ChooseImage,
            ReviewPhase::Selected | ReviewPhase::Analyzing => Step::Analyze,
            ReviewPhase::Reported => Step::Review,
        }
    }

    fn title(self, labels: &Labels) -> &'static str {
        let [image, check, report] = labels.step_titles();
        match self {
            Step::ChooseImage => image,
            Step::Analyze => check,
            Step::Review => report,
        }
    }

    fn style(self, other: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(2));
            // steps already passed are dimmed
            if self > other {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

/// Progress strip across the top of the panel
pub fn step_bar<'a, Message>(phase: ReviewPhase, labels: &Labels) -> Element<'a, Message>
where
    Message: 'a,
{
    let current = Step::current(phase);
    row(Step::ALL.into_iter().map(|step| -> Element<'a, Message> {
        container(text(step.title(labels)))
            .style(current.style(step))
            .padding(8)
            .width(Length::FillPortion(1))
            .into()
    }))
    .spacing(4)
    .into()
}

fn banner_style(status: ReportStatus) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let background = match status {
            ReportStatus::Ok => Color::from_rgb8(0xdc, 0xfc, 0xe7),
            ReportStatus::Warning => Color::from_rgb8(0xfe, 0xf9, 0xc3),
        };
        Style {
            text_color: Some(Color::BLACK),
            ..bordered_box(theme).background(background)
        }
    }
}

fn list<'a, Message: 'a>(items: &[String], numbered: bool) -> Element<'a, Message> {
    Column::with_children(items.iter().enumerate().map(|(i, item)| -> Element<'a, Message> {
        let line = if numbered {
            format!("{}. {item}", i + 1)
        } else {
            format!("• {item}")
        };
        text(line).into()
    }))
    .spacing(4)
    .into()
}

fn table<'a, Message: 'a>(columns: &[&'static str; 4], rows: &[[String; 4]]) -> Element<'a, Message> {
    let cell = |value: String| container(text(value)).width(Length::FillPortion(1));

    let header = row(columns.iter().map(|c| -> Element<'a, Message> { cell(c.to_string()).into() }))
        .spacing(8);
    let body = rows.iter().map(|r| -> Element<'a, Message> {
        row(r.iter().map(|v| -> Element<'a, Message> { cell(v.clone()).into() }))
            .spacing(8)
            .into()
    });

    Column::new()
        .push(header)
        .extend(body)
        .spacing(6)
        .into()
}

/// Read-only report panel: banner, then each section in order, labeled in
/// the language the report was produced in
pub fn report_view<'a, Message: 'a>(report: &AnalysisReport) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(12);

    for section in render::report_sections(report) {
        let body: Element<'a, Message> = match section.body {
            SectionBody::Banner(_) => text(section.heading).size(20).into(),
            SectionBody::Bullets(items) => column![text(section.heading).size(16), list(&items, false)]
                .spacing(4)
                .into(),
            SectionBody::Numbered(items) => column![text(section.heading).size(16), list(&items, true)]
                .spacing(4)
                .into(),
            SectionBody::Table { columns, rows } => column![text(section.heading).size(16), table(&columns, &rows)]
                .spacing(4)
                .into(),
            SectionBody::Paragraph(value) => text(format!("{} {value}", section.heading)).into(),
        };
        sections = sections.push(body);
    }

    container(sections)
        .padding(16)
        .width(Length::Fill)
        .style(banner_style(report.status))
        .into()
}
