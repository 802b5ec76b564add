use hello_lambda::{ConfigError, HandlerError};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub(crate) enum InvokeError {
    #[error("Can't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("--repeat must be at least 1")]
    ZeroRepeat,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to init logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Handler failed: {0}")]
    Handler(#[from] HandlerError),

    #[error("Can't serialize response: {0}")]
    Output(serde_json::Error),
}

/// Reads a JSON document from `path`, or from stdin when the path is `-`.
/// A missing path yields `fallback`.
pub(crate) fn read_document(path: Option<&Path>, fallback: Value) -> Result<Value, InvokeError> {
    let path = match path {
        Some(path) => path,
        None => return Ok(fallback),
    };

    let read_err = |source| InvokeError::Read {
        path: path.to_owned(),
        source,
    };
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(read_err)?;
        text
    } else {
        fs::read_to_string(path).map_err(read_err)?
    };

    serde_json::from_str(&text).map_err(|source| InvokeError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Invokes the handler `repeat` times and renders each response as one JSON document.
pub(crate) fn invoke(
    event: &Value,
    context: &Value,
    repeat: u32,
    pretty: bool,
) -> Result<Vec<String>, InvokeError> {
    if repeat == 0 {
        return Err(InvokeError::ZeroRepeat);
    }

    (0..repeat)
        .map(|_| {
            let response =
                hello_lambda::invoke_with(event.clone(), context.clone(), |outcome| outcome)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&response)
            } else {
                serde_json::to_string(&response)
            };
            rendered.map_err(InvokeError::Output)
        })
        .collect()
}
