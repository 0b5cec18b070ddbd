use crossterm::event::Event as CrosstermEvent;

use crate::api::client::ApiError;
use crate::api::dtos::CreateEventResponse;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The in-flight create-event call settled, one way or the other
    MintSettled {
        result: Result<CreateEventResponse, ApiError>,
    },

    /// Tick for UI refresh (20 FPS)
    Tick,
}
