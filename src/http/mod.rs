//! HTTP client layer — `SmsHttp` with bearer injection and retry policies.

pub mod client;
pub mod retry;

pub use client::{SmsHttp, UnauthorizedHook};
pub use retry::{RetryConfig, RetryPolicy};
