//! Hello world function for AWS Lambda.
//!
//! [`handler`] is what the `hellofunc` bootstrap hands to the Lambda runtime,
//! and what the `hello-lambda` binary calls when invoking locally.

use serde_json::Value;

mod config;
mod error;
mod response;
#[cfg(test)]
mod test_logger;

pub use crate::config::{Config, LoggingConfig, DEFAULT_CONFIG_FILE};
pub use crate::error::{ConfigError, HandlerError};
pub use crate::response::{Message, Response};

/// Line written to the log sink on every invocation.
pub const LOG_LINE: &str = "Hello, logs!";

/// Message carried in the response body.
pub const GREETING: &str = "Hello from AWS Lambda!";

/// Handles one invocation. Neither the event nor the context is inspected.
pub fn handler<C>(_event: Value, _context: C) -> Result<Response, HandlerError> {
    log::info!("{}", LOG_LINE);
    Response::json(200, &Message::new(GREETING))
}

/// Runs [`handler`] and hands its outcome to `callback`, which is called exactly once.
pub fn invoke_with<C, F, R>(event: Value, context: C, callback: F) -> R
where
    F: FnOnce(Result<Response, HandlerError>) -> R,
{
    callback(handler(event, context))
}
