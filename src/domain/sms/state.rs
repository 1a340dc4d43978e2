//! SMS history state container — app-owned, SDK-provided update logic.

use super::Sms;
use crate::shared::ApiResponse;

pub const SEND_SMS_FALLBACK: &str = "Échec de l'envoi du SMS";
pub const FETCH_HISTORY_FALLBACK: &str = "Échec de la récupération de l'historique";

pub const SMS_SENT_MESSAGE: &str = "SMS envoyé avec succès";

/// Send history, newest first, plus per-send lifecycle flags.
///
/// Append-oriented: a send success prepends its record; nothing is ever
/// edited or removed locally. A history fetch replaces the list wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmsHistory {
    pub history: Vec<Sms>,
    pub current: Option<Sms>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Records known client-side. After a fetch this is the returned page
    /// length — the server reports no grand total.
    pub total_count: usize,
}

impl SmsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&Sms> {
        self.history.first()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: SmsEvent) {
        match event {
            SmsEvent::SendRequested | SmsEvent::HistoryRequested => {
                self.is_loading = true;
                self.error = None;
                self.success = None;
            }
            SmsEvent::SendSucceeded { sms } => {
                self.is_loading = false;
                self.history.insert(0, sms);
                self.total_count += 1;
                self.success = Some(SMS_SENT_MESSAGE.to_string());
            }
            SmsEvent::HistoryLoaded {
                history,
                total_count,
            } => {
                self.is_loading = false;
                self.history = history;
                self.total_count = total_count;
            }
            SmsEvent::SendFailed { message } | SmsEvent::HistoryFailed { message } => {
                self.is_loading = false;
                self.error = Some(message);
            }
            SmsEvent::CurrentSet { sms } => {
                self.current = Some(sms);
            }
            SmsEvent::CurrentCleared => {
                self.current = None;
            }
            SmsEvent::ErrorCleared => {
                self.error = None;
            }
            SmsEvent::SuccessCleared => {
                self.success = None;
            }
        }
    }
}

/// Tagged history transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SmsEvent {
    SendRequested,
    SendSucceeded { sms: Sms },
    SendFailed { message: String },
    HistoryRequested,
    HistoryLoaded { history: Vec<Sms>, total_count: usize },
    HistoryFailed { message: String },
    CurrentSet { sms: Sms },
    CurrentCleared,
    ErrorCleared,
    SuccessCleared,
}

impl SmsEvent {
    pub fn send_settled(resp: ApiResponse<Sms>) -> Self {
        match resp.data {
            Some(sms) if resp.success => SmsEvent::SendSucceeded { sms },
            _ => SmsEvent::SendFailed {
                message: resp.message_or(SEND_SMS_FALLBACK).to_string(),
            },
        }
    }

    /// Fold a settled history envelope. The count is derived from the page
    /// length because the endpoint returns no total.
    pub fn history_settled(resp: ApiResponse<Vec<Sms>>) -> Self {
        match resp.data {
            Some(history) if resp.success => SmsEvent::HistoryLoaded {
                total_count: history.len(),
                history,
            },
            _ => SmsEvent::HistoryFailed {
                message: resp.message_or(FETCH_HISTORY_FALLBACK).to_string(),
            },
        }
    }
}
