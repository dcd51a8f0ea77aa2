mod app;
mod preview;
mod theme;

use app::App;
use facebox_core::detection::infrastructure::seeta_face_finder::SeetaFaceFinder;
use facebox_core::shared::constants::{MODEL_NAME, MODEL_URL};
use facebox_core::shared::model_resolver;

fn main() -> iced::Result {
    env_logger::init();

    // A missing or unparseable model leaves nothing to run; bail before
    // any window appears.
    let model_path = model_resolver::resolve(MODEL_NAME, MODEL_URL).unwrap_or_else(|e| {
        eprintln!("Error: could not obtain the face detection model: {e}");
        std::process::exit(1);
    });
    let finder = SeetaFaceFinder::from_file(&model_path).unwrap_or_else(|e| {
        eprintln!("Error: could not load the face detection model: {e}");
        std::process::exit(1);
    });

    iced::application(move || App::new(finder.clone()), App::update, App::view)
        .title("Face Box Viewer")
        .theme(App::theme)
        .window(iced::window::Settings {
            size: iced::Size::new(800.0, 600.0),
            ..Default::default()
        })
        .run()
}
