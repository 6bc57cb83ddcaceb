mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, Theme, window};

/// Launch the reading aid window.
pub fn run_app(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(state::WINDOW_WIDTH, state::WINDOW_HEIGHT),
        ..window::Settings::default()
    };

    iced::application("Legible", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.settings.theme))
        .run_with(move || App::bootstrap(config))
}
