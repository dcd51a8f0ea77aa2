use std::path::PathBuf;

use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length, Task, Theme};

use facebox_core::detection::infrastructure::seeta_face_finder::SeetaFaceFinder;
use facebox_core::imaging::infrastructure::file_image_reader::FileImageReader;
use facebox_core::pipeline::scan_image_use_case::ScanImageUseCase;
use facebox_core::shared::constants::IMAGE_EXTENSIONS;

use crate::theme;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    PickImages,
    ImagesPicked(Option<Vec<PathBuf>>),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    scanner: ScanImageUseCase,
    results: Vec<ScanLine>,
    picking: bool,
}

/// One line of the results panel: `<path> → <status>`.
struct ScanLine {
    path: PathBuf,
    has_face: bool,
}

impl std::fmt::Display for ScanLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \u{2192} {}",
            self.path.display(),
            status_label(self.has_face)
        )
    }
}

fn status_label(has_face: bool) -> &'static str {
    if has_face {
        "\u{2705} Face found"
    } else {
        "\u{274C} No face"
    }
}

impl App {
    pub fn new(finder: SeetaFaceFinder) -> (Self, Task<Message>) {
        let scanner =
            ScanImageUseCase::new(Box::new(FileImageReader::new()), Box::new(finder), None);
        (
            Self {
                scanner,
                results: Vec::new(),
                picking: false,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImages => {
                if self.picking {
                    return Task::none();
                }
                self.picking = true;
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select images")
                            .add_filter("Images", IMAGE_EXTENSIONS)
                            .pick_files()
                            .await
                            .map(|handles| {
                                handles.iter().map(|h| h.path().to_path_buf()).collect()
                            })
                    },
                    Message::ImagesPicked,
                );
            }
            Message::ImagesPicked(Some(paths)) => {
                self.picking = false;
                self.process_selection(paths);
            }
            // Cancelled picker: prior results stay on screen.
            Message::ImagesPicked(None) => {
                self.picking = false;
            }
        }
        Task::none()
    }

    /// Scan every selected path in order, rebuilding the results panel
    /// from scratch.
    fn process_selection(&mut self, paths: Vec<PathBuf>) {
        log::info!("scanning {} selected file(s)", paths.len());
        self.results.clear();

        for path in paths {
            let report = self.scanner.execute(&path);
            self.results.push(ScanLine {
                has_face: report.outcome.has_face(),
                path,
            });
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let app_theme = self.theme();

        let pick_button = button(text("Select Images").size(15))
            .on_press_maybe((!self.picking).then_some(Message::PickImages))
            .padding([10, 24]);

        let results_panel: Element<'_, Message> = if self.results.is_empty() {
            container(
                text("Pick images to check them for faces")
                    .size(14)
                    .color(theme::tertiary_color(&app_theme)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
        } else {
            let mut lines = column![].spacing(4);
            for line in &self.results {
                lines = lines.push(text(line.to_string()).size(13));
            }
            container(scrollable(lines).height(Length::Fill))
                .width(Length::Fill)
                .padding(8)
                .style(container::rounded_box)
                .into()
        };

        column![pick_button, results_panel]
            .spacing(12)
            .padding(16)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }
}
