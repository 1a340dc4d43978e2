//! SMS sub-client — send, history, details, delivery status.

use crate::client::SunuSmsClient;
use crate::domain::sms::wire::{SmsResponse, SmsSend};
use crate::domain::sms::{DeliveryStatus, Sms};
use crate::error::GENERIC_ERROR;
use crate::shared::ApiResponse;

/// Sub-client for SMS operations.
pub struct SmsMessages<'a> {
    pub(crate) client: &'a SunuSmsClient,
}

impl<'a> SmsMessages<'a> {
    /// Send one SMS. The payload is validated client-side (recipient number,
    /// message presence, 160-character limit) before any request is issued.
    pub async fn send(&self, sms: SmsSend) -> ApiResponse<Sms> {
        let payload = match sms.normalized() {
            Ok(p) => p,
            Err(e) => return ApiResponse::err(e.to_string()),
        };
        into_domain(self.client.http.post("/sms/send", &payload).await)
    }

    /// Fetch a page of send history, newest first.
    pub async fn history(&self, skip: u32, limit: u32) -> ApiResponse<Vec<Sms>> {
        let path = format!("/sms/history?skip={}&limit={}", skip, limit);
        let resp: ApiResponse<Vec<SmsResponse>> = self.client.http.get(&path).await;
        match resp.data {
            Some(wire) if resp.success => {
                let mut records = Vec::with_capacity(wire.len());
                for record in wire {
                    match Sms::try_from(record) {
                        Ok(sms) => records.push(sms),
                        Err(e) => return ApiResponse::err(e.to_string()),
                    }
                }
                ApiResponse::ok(records)
            }
            _ => ApiResponse::err(resp.message_or(GENERIC_ERROR).to_string()),
        }
    }

    /// Fetch one sent message by id.
    pub async fn details(&self, id: &str) -> ApiResponse<Sms> {
        let path = format!("/sms/{}", urlencoding::encode(id));
        into_domain(self.client.http.get(&path).await)
    }

    /// Query the gateway-reported delivery status of a sent message.
    pub async fn delivery_status(&self, id: &str) -> ApiResponse<DeliveryStatus> {
        let path = format!("/sms/{}/status", urlencoding::encode(id));
        self.client.http.get(&path).await
    }
}

fn into_domain(resp: ApiResponse<SmsResponse>) -> ApiResponse<Sms> {
    match resp.data {
        Some(wire) if resp.success => match Sms::try_from(wire) {
            Ok(sms) => ApiResponse::ok(sms),
            Err(e) => ApiResponse::err(e.to_string()),
        },
        _ => ApiResponse::err(resp.message_or(GENERIC_ERROR).to_string()),
    }
}
