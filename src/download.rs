//! Downloads the time-series CSV, or reads a local copy of it.

use std::{fs, path::Path, time::Duration};

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::error::Error;

// Upper bound on the buffer reserved from a `Content-Length` header.
const MAX_PREALLOCATION: usize = 64 * 1024 * 1024;

/// Downloads `url` into memory, advancing `progress_bar` as chunks arrive.
///
/// No retry is attempted. `timeout` bounds the whole request when set.
pub async fn download_csv_with_progress(
    url: &str,
    timeout: Option<Duration>,
    progress_bar: ProgressBar,
) -> Result<String, Error> {
    let network = |source: reqwest::Error| Error::Network {
        url: url.to_string(),
        source,
    };

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(network)?;

    let response = client.get(url).send().await.map_err(network)?;

    if !response.status().is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    // Switch the spinner to a byte counter when the size is known
    let total_size = response.content_length().unwrap_or(0);
    debug!(url, total_size, "response received");
    if total_size > 0 {
        progress_bar.set_length(total_size);
        if let Ok(style) = ProgressStyle::with_template(
            "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {eta}",
        ) {
            progress_bar.set_style(style.progress_chars("=> "));
        }
    }

    let capacity = usize::try_from(total_size)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATION);
    let mut body = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(network)?;
        body.extend_from_slice(&chunk);
        progress_bar.set_position(body.len() as u64);
    }

    String::from_utf8(body)
        .map_err(|e| Error::Parse(format!("response from `{}` is not UTF-8: {}", url, e)))
}

/// Reads a previously downloaded copy of the dataset.
pub fn read_csv(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

// -- Tests -------------------------------------------------------------------
