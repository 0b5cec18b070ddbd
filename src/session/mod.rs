//! Wallet and auth session state.
//!
//! Both are consumed collaborators: mintdesk never performs a wallet
//! handshake or login itself, it only reflects what the configured session
//! provides and gates submission on it.

use crate::config::{AuthConfig, WalletConfig};

/// Connected wallet account, if any. Minting requires both an account and a
/// network id.
#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    pub account: Option<String>,
    pub network_id: Option<u64>,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        Self {
            account: config.account.clone(),
            network_id: config.network_id,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some() && self.network_id.is_some()
    }

    /// Short form for the status bar, e.g. `0x1234…cdef`.
    pub fn short_account(&self) -> Option<String> {
        self.account.as_ref().map(|acct| {
            if acct.len() > 12 {
                format!("{}…{}", &acct[..6], &acct[acct.len() - 4..])
            } else {
                acct.clone()
            }
        })
    }
}

/// Bearer-token session from the platform's auth provider.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    pub token: Option<String>,
}

impl AuthSession {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            token: config.token.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_requires_account_and_network() {
        let mut wallet = WalletSession::disconnected();
        assert!(!wallet.is_connected());
        wallet.account = Some("0x1234567890abcdef".into());
        assert!(!wallet.is_connected());
        wallet.network_id = Some(1);
        assert!(wallet.is_connected());
    }

    #[test]
    fn short_account_elides_middle() {
        let wallet = WalletSession {
            account: Some("0x1234567890abcdef1234".into()),
            network_id: Some(1),
        };
        assert_eq!(wallet.short_account().unwrap(), "0x1234…1234");
    }
}
