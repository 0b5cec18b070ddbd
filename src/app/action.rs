use crate::api::dtos::CreateEventRequest;

/// Side effects the reducer asks the main loop to perform.
#[derive(Debug)]
pub enum Action {
    /// Issue the create-event call for an already-validated record.
    SubmitMint { request: CreateEventRequest },
    Quit,
}
