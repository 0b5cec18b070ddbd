use chrono::NaiveDate;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::mint::form::MintDraft;
use crate::mint::validate::MintValues;
use crate::session::{AuthSession, WalletSession};

/// Identifiers for the application's modal dialogs. At most one is active;
/// `AppState::active_dialog` is the single process-wide selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogId {
    MintEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Events,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient notification shown in the toast surface.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub born: u64,
}

/// An event known to this session, appended after a successful mint.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub token_count: i64,
    pub is_public: bool,
}

impl EventSummary {
    pub fn from_mint(id: u64, values: &MintValues) -> Self {
        Self {
            id,
            title: values.title.clone(),
            location: values.location.clone(),
            date_start: values.date_start,
            date_end: values.date_end,
            token_count: values.token_count,
            is_public: values.is_public,
        }
    }
}

/// Mint dialog state: the draft plus the in-flight submission, if any.
///
/// `task` holds the spawned request so a future timeout/cancel policy can
/// abort it; today nothing does.
#[derive(Debug, Default)]
pub struct MintState {
    pub draft: MintDraft,
    pub in_flight: bool,
    pub pending: Option<MintValues>,
    pub task: Option<JoinHandle<()>>,
}

pub struct AppState {
    pub config: AppConfig,
    pub wallet: WalletSession,
    pub auth: AuthSession,
    pub active_dialog: Option<DialogId>,
    pub mint: MintState,
    pub events: Vec<EventSummary>,
    pub selected_event: usize,
    pub view: View,
    pub toasts: Vec<Toast>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let wallet = if config.wallet.auto_connect {
            WalletSession::from_config(&config.wallet)
        } else {
            WalletSession::disconnected()
        };
        let auth = AuthSession::from_config(&config.auth);
        Self {
            config,
            wallet,
            auth,
            active_dialog: None,
            mint: MintState::default(),
            events: Vec::new(),
            selected_event: 0,
            view: View::Events,
            toasts: Vec::new(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Submit affordance: valid draft, connected wallet, authenticated, and
    /// no submission already in flight.
    pub fn can_submit(&self) -> bool {
        !self.mint.in_flight
            && self.wallet.is_connected()
            && self.auth.is_authenticated()
            && self.mint.draft.is_valid()
    }

    pub fn push_toast(&mut self, message: String, severity: Severity) {
        self.toasts.push(Toast {
            message,
            severity,
            born: self.tick_count,
        });
        self.dirty = true;
    }

    pub fn expire_toasts(&mut self) {
        let ttl = self.config.ui.toast_ttl_ticks;
        let now = self.tick_count;
        let before = self.toasts.len();
        self.toasts.retain(|t| now.saturating_sub(t.born) < ttl);
        if self.toasts.len() != before {
            self.dirty = true;
        }
    }

    pub fn select_next_event(&mut self) {
        if !self.events.is_empty() && self.selected_event + 1 < self.events.len() {
            self.selected_event += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev_event(&mut self) {
        if self.selected_event > 0 {
            self.selected_event -= 1;
            self.dirty = true;
        }
    }
}
