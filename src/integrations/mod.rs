//! External service integrations
//!
//! Two thin, synchronous HTTP clients used by standalone commands, never by
//! the dashboard itself:
//!
//! - `gemini`: one-shot text completion against the Generative Language API
//! - `sheets`: write a literal string into a cell of a named spreadsheet,
//!   authenticated with a service-account key (`credentials`)

pub mod credentials;
pub mod gemini;
pub mod sheets;

pub use credentials::{AccessToken, ServiceAccountKey};
pub use gemini::{GeminiClient, JEEVES_PROMPT};
pub use sheets::{CellRef, SheetsClient, ONLINE_MESSAGE};

use reqwest::blocking::Response;

use crate::error::{ExpenseError, ExpenseResult};

/// Turn a non-2xx response into an integration error carrying the body
fn ensure_success(
    response: Response,
    make_error: fn(String) -> ExpenseError,
) -> ExpenseResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(make_error(format!("HTTP {}: {}", status, body.trim())))
}
