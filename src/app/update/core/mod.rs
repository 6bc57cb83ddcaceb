mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::{App, PLAYBACK_POLL_INTERVAL};
use iced::time;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        if app.speech.is_playing() {
            time::every(PLAYBACK_POLL_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        self.run_effects(effects)
    }
}
