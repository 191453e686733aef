use iced::widget::{column, container, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use std::path::PathBuf;

mod compress;
mod config;
mod error;
mod notify;
mod picker;
mod state;
mod ui;
mod upload;

use compress::{cleanup, CompressOptions};
use config::Settings;
use error::SessionError;
use notify::{DialogNotifier, Notifier};
use state::data::{CompressionOutcome, CurrentImage, PickedImage};
use state::level::CompressionLevel;
use state::session::Session;
use upload::UploadPlan;

/// Main application state
struct PhotoSqueeze {
    /// Everything the screen renders
    session: Session,
    /// Loaded at startup, saved when the tier changes
    settings: Settings,
    /// `None` when there is no config directory; the tier is then not persisted
    settings_path: Option<PathBuf>,
    upload_plan: UploadPlan,
    notifier: Box<dyn Notifier>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Pick Photo"
    PickImage,
    /// Metadata of the picked file was read
    Picked(Result<PickedImage, String>),
    /// Background compression finished for `(source, tier)`
    Compressed(PickedImage, CompressionLevel, Result<CompressionOutcome, String>),
    /// User clicked one of the tier buttons
    LevelSelected(CompressionLevel),
    /// User clicked "Upload to Server"
    Upload,
    /// Simulated upload tick completed
    UploadStepDone(u8),
}

impl PhotoSqueeze {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let settings_path = match config::settings_path() {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("{}; the selected level will not be remembered", e);
                None
            }
        };

        // Outputs from an earlier run are never shown again
        if settings.output_dir.is_none() {
            cleanup::clear_output_dir(&settings.resolved_output_dir());
        }

        let app = Self::with_parts(settings, settings_path, Box::new(DialogNotifier));

        log::info!(
            "🎨 Photo Squeeze ready (level: {}, output: {})",
            app.session.level,
            app.settings.resolved_output_dir().display()
        );

        (app, Task::none())
    }

    fn with_parts(
        settings: Settings,
        settings_path: Option<PathBuf>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        PhotoSqueeze {
            session: Session::new(settings.default_level),
            upload_plan: UploadPlan::new(settings.upload),
            settings,
            settings_path,
            notifier,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                if let Err(e) = self.session.begin_loading() {
                    log::warn!("Ignoring pick request: {}", e);
                    return Task::none();
                }

                // Show the native file picker dialog
                match picker::pick_image_file() {
                    Some(path) => Task::perform(
                        async move { picker::inspect(path).await.map_err(|e| e.to_string()) },
                        Message::Picked,
                    ),
                    None => {
                        log::info!("User cancelled image selection");
                        self.session.cancel_loading("Selection cancelled.");
                        Task::none()
                    }
                }
            }
            Message::Picked(Ok(picked)) => self.compress(picked, self.session.level),
            Message::Picked(Err(e)) => {
                self.session.cancel_loading("Could not open the selected image.");
                self.notifier
                    .error("Error", &format!("Could not pick image: {}", e));
                Task::none()
            }
            Message::Compressed(picked, level, Ok(outcome)) => {
                self.replace_current(CurrentImage::from_outcome(&picked, level, outcome));
                Task::none()
            }
            Message::Compressed(picked, level, Err(e)) => {
                // Fall back to showing the source
                self.replace_current(CurrentImage::uncompressed(&picked, level));
                self.notifier
                    .error("Error", &format!("Could not compress image: {}", e));
                Task::none()
            }
            Message::LevelSelected(level) => match self.session.select_level(level) {
                Ok(source) => {
                    self.remember_level(level);
                    match source {
                        Some(picked) => self.compress(picked, level),
                        None => Task::none(),
                    }
                }
                Err(e) => {
                    log::warn!("Ignoring level change: {}", e);
                    Task::none()
                }
            },
            Message::Upload => match self.session.begin_upload() {
                Ok(()) => {
                    log::info!("⬆️  Starting simulated upload");
                    self.schedule_upload_step(0)
                }
                Err(SessionError::NoImage) => {
                    self.notifier
                        .info("Notice", &SessionError::NoImage.to_string());
                    Task::none()
                }
                Err(e) => {
                    log::warn!("Ignoring upload request: {}", e);
                    Task::none()
                }
            },
            Message::UploadStepDone(step) => {
                self.session
                    .set_upload_progress(self.upload_plan.progress_at(step));

                if self.upload_plan.is_last(step) {
                    self.notifier
                        .info("Success", "Image uploaded to the server successfully!");
                    self.session.finish_upload();
                    Task::none()
                } else {
                    self.schedule_upload_step(step + 1)
                }
            }
        }
    }

    /// Launch background compression of `picked` at `level`
    fn compress(&self, picked: PickedImage, level: CompressionLevel) -> Task<Message> {
        let options = CompressOptions::from(&self.settings);

        Task::perform(
            async move {
                let result = compress::compress(picked.clone(), level, options)
                    .await
                    .map_err(|e| e.to_string());
                (picked, level, result)
            },
            |(picked, level, result)| Message::Compressed(picked, level, result),
        )
    }

    /// Show `record` and delete the output it replaces
    fn replace_current(&mut self, record: CurrentImage) {
        let output = record.output.clone();
        if let Some(previous) = self.session.finish_compression(record) {
            if previous.output != output {
                cleanup::discard_output(&previous, &self.settings.resolved_output_dir());
            }
        }
    }

    fn schedule_upload_step(&self, step: u8) -> Task<Message> {
        let delay = self.upload_plan.next_delay();
        Task::perform(upload::wait_step(step, delay), Message::UploadStepDone)
    }

    /// Persist the chosen tier as the startup default
    fn remember_level(&mut self, level: CompressionLevel) {
        if self.settings.default_level == level {
            return;
        }
        self.settings.default_level = level;

        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                log::warn!("Failed to save settings: {}", e);
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let session = &self.session;
        let enabled = !session.is_busy();

        let mut content: Column<Message> = column![
            text("Compress Photos Without Cropping").size(28),
            ui::panels::actions(session.current.is_some(), enabled),
            ui::panels::level_selector(session.level, enabled),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center);

        if session.is_loading {
            content = content.push(ui::panels::loading());
        }

        if session.is_uploading {
            content = content.push(ui::panels::upload_progress(session.upload_progress));
        }

        if let Some(current) = &session.current {
            if !session.is_loading {
                content = content.push(ui::panels::image_card(current));
            }
        }

        content = content.push(text(&session.status).size(14));

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting photo-squeeze v{}", env!("CARGO_PKG_VERSION"));

    iced::application(
        "Photo Squeeze",
        PhotoSqueeze::update,
        PhotoSqueeze::view,
    )
    .theme(PhotoSqueeze::theme)
    .window_size((520.0, 820.0))
    .centered()
    .run_with(PhotoSqueeze::new)
}
