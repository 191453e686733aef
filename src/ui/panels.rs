/// View fragments for the single screen
use iced::widget::image::{Handle, Image};
use iced::widget::{button, canvas, column, container, progress_bar, row, text, Column, Row};
use iced::alignment::Horizontal;
use iced::{Alignment, ContentFit, Element, Length, Theme};

use super::size_chart::SizeChart;
use crate::state::data::{format_kb, format_percent, CurrentImage};
use crate::state::level::CompressionLevel;
use crate::Message;

const PREVIEW_HEIGHT: f32 = 300.0;
const CHART_HEIGHT: f32 = 30.0;

/// Low / Medium / High buttons; the selected one is highlighted
pub fn level_selector<'a>(selected: CompressionLevel, enabled: bool) -> Element<'a, Message> {
    let buttons = CompressionLevel::ALL.iter().map(|&level| -> Element<'a, Message> {
        let style: fn(&Theme, button::Status) -> button::Style = if level == selected {
            button::primary
        } else {
            button::secondary
        };

        button(text(level.label()).width(Length::Fill).align_x(Horizontal::Center))
            .style(style)
            .width(Length::Fill)
            .padding(8)
            .on_press_maybe(enabled.then_some(Message::LevelSelected(level)))
            .into()
    });

    column![
        text("Compression level:").size(16),
        Row::with_children(buttons).spacing(10),
    ]
    .spacing(8)
    .into()
}

pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Processing image...").size(16))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(20)
        .into()
}

/// Progress bar with the percentage under it
pub fn upload_progress<'a>(progress: u8) -> Element<'a, Message> {
    column![
        progress_bar(0.0..=100.0, f32::from(progress)).height(10.0),
        text(format!("{}%", progress)).size(14),
    ]
    .spacing(5)
    .align_x(Alignment::Center)
    .into()
}

/// Preview of the output file plus its statistics
pub fn image_card(current: &CurrentImage) -> Element<'_, Message> {
    let preview = Image::new(Handle::from_path(&current.output))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fixed(PREVIEW_HEIGHT));

    let chart = canvas(SizeChart::new(current.original_size, current.compressed_size))
        .width(Length::Fill)
        .height(Length::Fixed(CHART_HEIGHT));

    let info = info_lines(current)
        .into_iter()
        .fold(Column::new().spacing(5), |col, line| col.push(text(line).size(14)));

    column![
        preview,
        text("Image info:").size(16),
        info,
        chart,
    ]
    .spacing(12)
    .into()
}

/// The lines of the info panel, in display order
pub fn info_lines(current: &CurrentImage) -> Vec<String> {
    let details = &current.details;
    let mut lines = vec![
        format!("Original size: {}", format_kb(current.original_size)),
        format!("Compressed size: {}", format_kb(current.compressed_size)),
        format!("Reduction: {}", format_percent(current.reduction_percent())),
        format!("Dimensions: {} x {} px", details.width, details.height),
    ];

    if current.output_dimensions != (details.width, details.height) {
        let (w, h) = current.output_dimensions;
        lines.push(format!("Output dimensions: {} x {} px", w, h));
    }

    lines.push(format!("File name: {}", details.file_name));
    lines.push(format!("Type: {}", details.mime_type));
    lines.push(format!("Level: {}", current.level));
    lines.push(current.decision.describe().to_string());
    lines
}

/// Row holding the pick and upload buttons
pub fn actions<'a>(has_image: bool, enabled: bool) -> Element<'a, Message> {
    let mut actions = row![button(text("Pick Photo").width(Length::Fill).align_x(Horizontal::Center))
        .width(Length::Fill)
        .padding(12)
        .on_press_maybe(enabled.then_some(Message::PickImage))]
    .spacing(10);

    if has_image {
        actions = actions.push(
            button(text("Upload to Server").width(Length::Fill).align_x(Horizontal::Center))
                .style(button::success)
                .width(Length::Fill)
                .padding(12)
                .on_press_maybe(enabled.then_some(Message::Upload)),
        );
    }

    actions.into()
}
