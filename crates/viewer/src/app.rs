use std::path::PathBuf;

use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Element, Length, Task, Theme};

use facebox_core::annotation::infrastructure::outline_annotator::OutlineAnnotator;
use facebox_core::detection::infrastructure::seeta_face_finder::SeetaFaceFinder;
use facebox_core::imaging::infrastructure::file_image_reader::FileImageReader;
use facebox_core::pipeline::scan_image_use_case::ScanImageUseCase;
use facebox_core::shared::constants::IMAGE_EXTENSIONS;

use crate::preview;
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
    preview: Option<image::Handle>,
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
        let scanner = ScanImageUseCase::new(
            Box::new(FileImageReader::new()),
            Box::new(finder),
            Some(Box::new(OutlineAnnotator::default())),
        );
        (
            Self {
                scanner,
                results: Vec::new(),
                preview: None,
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
    /// from scratch and leaving the preview on the last decodable image.
    fn process_selection(&mut self, paths: Vec<PathBuf>) {
        log::info!("scanning {} selected file(s)", paths.len());
        self.results.clear();

        for path in paths {
            let report = self.scanner.execute(&path);
            if let Some(frame) = report.annotated {
                if let Some(handle) = preview::to_handle(&frame) {
                    self.preview = Some(handle);
                }
            }
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

        let preview_area: Element<'_, Message> = match &self.preview {
            Some(handle) => scrollable(
                container(image(handle.clone()))
                    .width(Length::Fill)
                    .center_x(Length::Fill),
            )
            .height(Length::Fill)
            .into(),
            None => container(
                text("No image processed yet")
                    .size(14)
                    .color(theme::tertiary_color(&app_theme)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        };

        let mut lines = column![].spacing(4);
        for line in &self.results {
            lines = lines.push(text(line.to_string()).size(13));
        }
        let results_panel = container(scrollable(lines).height(Length::Fixed(170.0)))
            .width(Length::Fill)
            .padding(8)
            .style(container::rounded_box);

        column![pick_button, preview_area, results_panel]
            .spacing(12)
            .padding(16)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use facebox_core::detection::domain::face_finder::FaceFinder;
    use facebox_core::imaging::domain::image_reader::ImageReader;
    use facebox_core::shared::face_box::FaceBox;
    use facebox_core::shared::frame::Frame;

    // Reader that "decodes" anything not named missing*, marking frames
    // from face* files so the finder below can recognize them.
    struct FakeReader;

    impl ImageReader for FakeReader {
        fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
            let name = path.file_name().unwrap().to_string_lossy();
            if name.starts_with("missing") {
                return Err("no such file".into());
            }
            let marker = if name.starts_with("face") { 255 } else { 0 };
            let mut data = vec![0u8; 20 * 20 * 3];
            data[0] = marker;
            Ok(Frame::new(data, 20, 20))
        }
    }

    struct FakeFinder;

    impl FaceFinder for FakeFinder {
        fn find(&self, frame: &Frame) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>> {
            if frame.data()[0] == 255 {
                Ok(vec![FaceBox::new(2, 2, 8, 8)])
            } else {
                Ok(vec![])
            }
        }
    }

    fn test_app() -> App {
        App {
            scanner: ScanImageUseCase::new(
                Box::new(FakeReader),
                Box::new(FakeFinder),
                Some(Box::new(OutlineAnnotator::default())),
            ),
            results: Vec::new(),
            preview: None,
            picking: false,
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_one_line_per_path_in_selection_order() {
        let mut app = test_app();
        app.process_selection(paths(&["face.jpg", "blank.png", "missing.jpg"]));

        assert_eq!(app.results.len(), 3);
        assert!(app.results[0].has_face);
        assert!(!app.results[1].has_face);
        assert!(!app.results[2].has_face);
        assert_eq!(app.results[0].path, PathBuf::from("face.jpg"));
        assert_eq!(app.results[2].path, PathBuf::from("missing.jpg"));
    }

    #[test]
    fn test_new_selection_replaces_old_lines() {
        let mut app = test_app();
        app.process_selection(paths(&["face.jpg", "blank.png", "other.bmp"]));
        app.process_selection(paths(&["blank.png"]));

        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].path, PathBuf::from("blank.png"));
    }

    #[test]
    fn test_preview_follows_last_decodable_path() {
        let mut app = test_app();
        assert!(app.preview.is_none());

        app.process_selection(paths(&["face.jpg", "blank.png"]));
        assert!(app.preview.is_some());
    }

    #[test]
    fn test_unreadable_selection_keeps_previous_preview() {
        let mut app = test_app();
        app.process_selection(paths(&["face.jpg"]));
        assert!(app.preview.is_some());

        // A follow-up batch with nothing decodable leaves the old image up.
        app.process_selection(paths(&["missing1.jpg", "missing2.jpg"]));
        assert!(app.preview.is_some());
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    fn test_line_format_and_labels() {
        let with_face = ScanLine {
            path: PathBuf::from("face.jpg"),
            has_face: true,
        };
        let without = ScanLine {
            path: PathBuf::from("blank.png"),
            has_face: false,
        };
        assert_eq!(with_face.to_string(), "face.jpg \u{2192} \u{2705} Face found");
        assert_eq!(without.to_string(), "blank.png \u{2192} \u{274C} No face");
    }
}
