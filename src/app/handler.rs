use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::api::client::ApiError;
use crate::api::dtos::{CreateEventRequest, CreateEventResponse};
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::mint::form::FormFocus;
use crate::mint::validate;
use crate::session::WalletSession;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::MintSettled { result } => {
            handle_mint_settled(state, result);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            state.expire_toasts();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &AppState, _mouse: MouseEvent) -> Vec<Action> {
    if state.active_dialog.is_some() {
        // Clicking the backdrop around an open dialog never dismisses it.
        return vec![];
    }
    vec![]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // An open dialog captures all keyboard input
    if state.active_dialog == Some(DialogId::MintEvent) {
        return handle_mint_dialog_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        // The launcher is the only other writer of the active-dialog selector.
        // Opening does not reset the draft: after a failed mint the user's
        // input is preserved for correction and resubmission.
        KeyCode::Char('m') | KeyCode::F(2) => {
            state.active_dialog = Some(DialogId::MintEvent);
            vec![]
        }
        KeyCode::Char('1') => {
            state.view = View::Events;
            vec![]
        }
        KeyCode::Char('2') => {
            state.view = View::Help;
            vec![]
        }
        KeyCode::Char('w') => {
            toggle_wallet(state);
            vec![]
        }
        KeyCode::Up => {
            state.select_prev_event();
            vec![]
        }
        KeyCode::Down => {
            state.select_next_event();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mint_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        // Generic close: hide the dialog, keep whatever was typed
        KeyCode::Esc => {
            state.active_dialog = None;
            vec![]
        }
        KeyCode::Tab => {
            state.mint.draft.focus_next();
            vec![]
        }
        KeyCode::BackTab => {
            state.mint.draft.focus_prev();
            vec![]
        }
        _ => match state.mint.draft.focus {
            FormFocus::Field(_) => handle_field_key(state, key),
            FormFocus::Visibility => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    state.mint.draft.is_public = !state.mint.draft.is_public;
                    vec![]
                }
                _ => vec![],
            },
            FormFocus::Submit => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => try_submit(state),
                _ => vec![],
            },
            FormFocus::Cancel => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    // Explicit cancel discards the draft before closing
                    state.mint.draft.reset();
                    state.active_dialog = None;
                    vec![]
                }
                _ => vec![],
            },
        },
    }
}

fn handle_field_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let draft = &mut state.mint.draft;
    let mut edited = false;

    match key.code {
        KeyCode::Enter => draft.focus_next(),
        KeyCode::Char(c) => {
            if let Some(input) = draft.focused_field_mut() {
                input.insert_char(c);
                edited = true;
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = draft.focused_field_mut() {
                input.delete_back();
                edited = true;
            }
        }
        KeyCode::Delete => {
            if let Some(input) = draft.focused_field_mut() {
                input.delete_forward();
                edited = true;
            }
        }
        KeyCode::Left => {
            if let Some(input) = draft.focused_field_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = draft.focused_field_mut() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = draft.focused_field_mut() {
                input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(input) = draft.focused_field_mut() {
                input.move_end();
            }
        }
        _ => {}
    }

    // Revalidate on every change so inline errors track the draft
    if edited {
        draft.revalidate();
    }
    vec![]
}

/// No-op unless every submit precondition holds; the UI renders the
/// affordance as disabled in exactly the same cases.
fn try_submit(state: &mut AppState) -> Vec<Action> {
    if state.mint.in_flight || !state.wallet.is_connected() || !state.auth.is_authenticated() {
        return vec![];
    }
    let values = match validate::validate(&state.mint.draft) {
        Ok(values) => values,
        Err(errors) => {
            state.mint.draft.errors = errors;
            return vec![];
        }
    };
    let Some(network_id) = state.wallet.network_id else {
        return vec![];
    };

    let request = CreateEventRequest::from_values(&values, network_id);
    state.mint.in_flight = true;
    state.mint.pending = Some(values);
    tracing::info!(title = %request.title, network_id, "mint submitted");
    vec![Action::SubmitMint { request }]
}

/// Settle the submission: notify, reset on success, clear the loading flag,
/// and close the dialog regardless of outcome — in that order.
fn handle_mint_settled(state: &mut AppState, result: Result<CreateEventResponse, ApiError>) {
    match result {
        Ok(response) => {
            tracing::info!(event_id = response.event_id, "mint confirmed");
            state.push_toast(
                format!("Event #{} minted", response.event_id),
                Severity::Success,
            );
            if let Some(values) = state.mint.pending.take() {
                state.events.push(EventSummary::from_mint(response.event_id, &values));
            }
            state.mint.draft.reset();
        }
        Err(ApiError::Server(message)) => {
            tracing::warn!(%message, "mint rejected by server");
            state.push_toast(format!("Mint rejected: {}", message), Severity::Error);
            state.mint.pending = None;
        }
        Err(ApiError::Transport(message)) => {
            tracing::warn!(%message, "mint request failed");
            state.push_toast(format!("Mint failed: {}", message), Severity::Error);
            state.mint.pending = None;
        }
    }
    state.mint.in_flight = false;
    state.mint.task = None;
    state.active_dialog = None;
    state.dirty = true;
}

fn toggle_wallet(state: &mut AppState) {
    if state.wallet.is_connected() {
        state.wallet = WalletSession::disconnected();
        state.push_toast("Wallet disconnected".to_string(), Severity::Success);
        return;
    }
    state.wallet = WalletSession::from_config(&state.config.wallet);
    match state.wallet.short_account() {
        Some(account) if state.wallet.is_connected() => {
            state.push_toast(format!("Wallet connected: {}", account), Severity::Success);
        }
        _ => {
            state.wallet = WalletSession::disconnected();
            state.push_toast(
                "No wallet configured — set [wallet] in config.toml".to_string(),
                Severity::Error,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{MouseButton, MouseEventKind};

    fn connected_state() -> AppState {
        let mut config = AppConfig::default();
        config.wallet.account = Some("0x1234567890abcdef".into());
        config.wallet.network_id = Some(5);
        config.wallet.auto_connect = true;
        config.auth.token = Some("session-token".into());
        AppState::new(config)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn fill_valid_draft(state: &mut AppState) {
        let draft = &mut state.mint.draft;
        draft.title.set_text("Launch party");
        draft.description.set_text("An evening of demos.");
        draft.location.set_text("Berlin");
        draft.image_url.set_text("https://img.example.com/launch.png");
        draft.token_count.set_text("50");
        draft.date_start.set_text("2026-09-01");
        draft.date_end.set_text("2026-09-02");
        draft.is_public = true;
    }

    fn submit(state: &mut AppState) -> Vec<Action> {
        state.mint.draft.focus = FormFocus::Submit;
        handle_event(state, key(KeyCode::Enter))
    }

    #[test]
    fn happy_path_mints_resets_and_closes() {
        let mut state = connected_state();
        handle_event(&mut state, key(KeyCode::Char('m')));
        assert_eq!(state.active_dialog, Some(DialogId::MintEvent));

        fill_valid_draft(&mut state);
        let actions = submit(&mut state);
        assert!(state.mint.in_flight);
        let Some(Action::SubmitMint { request }) = actions.first() else {
            panic!("expected a submit action");
        };
        assert_eq!(request.network_id, 5);
        assert!(!request.is_managed, "public event must not be managed");

        handle_event(
            &mut state,
            AppEvent::MintSettled {
                result: Ok(CreateEventResponse { event_id: 42 }),
            },
        );

        let toast = state.toasts.last().unwrap();
        assert!(toast.message.contains("42"));
        assert_eq!(toast.severity, Severity::Success);
        assert!(state.mint.draft.title.text.is_empty(), "form must reset");
        assert!(!state.mint.in_flight);
        assert_eq!(state.active_dialog, None);
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].id, 42);
    }

    #[test]
    fn server_rejection_preserves_form_and_closes() {
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);
        submit(&mut state);

        handle_event(
            &mut state,
            AppEvent::MintSettled {
                result: Err(ApiError::Server("limit exceeded".into())),
            },
        );

        let toast = state.toasts.last().unwrap();
        assert!(toast.message.contains("limit exceeded"));
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(state.mint.draft.title.text, "Launch party");
        assert_eq!(state.active_dialog, None);
        assert!(state.events.is_empty());
        assert!(!state.mint.in_flight);
    }

    #[test]
    fn transport_failure_shows_underlying_message() {
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);
        submit(&mut state);

        handle_event(
            &mut state,
            AppEvent::MintSettled {
                result: Err(ApiError::Transport("connection refused".into())),
            },
        );
        assert!(state.toasts.last().unwrap().message.contains("connection refused"));
        assert_eq!(state.active_dialog, None);
    }

    #[test]
    fn each_precondition_independently_disables_submit() {
        // Invalid form
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        assert!(!state.can_submit());
        assert!(submit(&mut state).is_empty());

        // No wallet
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);
        state.wallet = WalletSession::disconnected();
        assert!(!state.can_submit());
        assert!(submit(&mut state).is_empty());

        // Not authenticated
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);
        state.auth.token = None;
        assert!(!state.can_submit());
        assert!(submit(&mut state).is_empty());

        // Submission already in flight
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);
        assert!(state.can_submit());
        assert_eq!(submit(&mut state).len(), 1);
        assert!(!state.can_submit());
        assert!(submit(&mut state).is_empty(), "no concurrent submissions");
    }

    #[test]
    fn backdrop_click_leaves_dialog_open() {
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);

        let click = CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        let actions = handle_event(&mut state, AppEvent::Terminal(click));
        assert!(actions.is_empty());
        assert_eq!(state.active_dialog, Some(DialogId::MintEvent));
        assert_eq!(state.mint.draft.title.text, "Launch party");
    }

    #[test]
    fn cancel_resets_fields_and_closes() {
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);

        state.mint.draft.focus = FormFocus::Cancel;
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.active_dialog, None);
        assert!(state.mint.draft.title.text.is_empty());
    }

    #[test]
    fn escape_closes_without_reset() {
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        fill_valid_draft(&mut state);

        handle_event(&mut state, key(KeyCode::Esc));
        assert_eq!(state.active_dialog, None);
        assert_eq!(state.mint.draft.title.text, "Launch party");
    }

    #[test]
    fn editing_a_field_revalidates() {
        let mut state = connected_state();
        state.active_dialog = Some(DialogId::MintEvent);
        handle_event(&mut state, key(KeyCode::Char('x')));
        assert!(!state.mint.draft.errors.is_empty());
        assert!(!state
            .mint
            .draft
            .errors
            .contains_key(&crate::mint::validate::FormField::Title));
    }

    #[test]
    fn toasts_expire_after_ttl() {
        let mut state = connected_state();
        state.push_toast("hello".into(), Severity::Success);
        for _ in 0..state.config.ui.toast_ttl_ticks + 1 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(state.toasts.is_empty());
    }
}
