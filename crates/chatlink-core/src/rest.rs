//! Uniform REST result envelope.
//!
//! Every synchronous API call resolves to `{code, data, message}`; the
//! actual HTTP plumbing lives outside this crate.

use serde::{Deserialize, Serialize};

use crate::error::{ChatlinkError, Result};

/// Success code used by the backend.
pub const CODE_OK: i32 = 200;

/// Wrapper around every synchronous API call outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestBean<T> {
    pub code: i32,
    #[serde(default)]
    pub data: Option<T>,
    pub message: String,
}

impl<T> RestBean<T> {
    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }

    /// Unwrap the payload, mapping a non-success code or an absent payload
    /// to a `Rest` error carrying the server's code and message.
    pub fn into_data(self) -> Result<T> {
        if !self.is_success() {
            return Err(ChatlinkError::Rest {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or(ChatlinkError::Rest {
            code: self.code,
            message: "success envelope with no data".into(),
        })
    }
}
