//! Record sources and background acquisition.
//!
//! This module provides the data sources for the record collection:
//! - HTTP endpoint (the default)
//! - Local JSON file
//!
//! Acquisition runs once, off the UI thread, on a dedicated thread with its
//! own tokio runtime. The result arrives over a channel that the UI polls.

use crate::model::{FetchError, Record};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_URL};

/// Where the record collection comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone)]
pub enum RecordSource {
    /// HTTP `GET` of a URL.
    Http(HttpSource),
    /// Local JSON file.
    File(FileSource),
}

impl RecordSource {
    /// Load the full collection.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`.
    pub async fn load(&self) -> Result<Vec<Record>, FetchError> {
        match self {
            RecordSource::Http(source) => source.fetch().await,
            RecordSource::File(source) => source.load(),
        }
    }

    /// Human-readable origin for the header line.
    pub fn describe(&self) -> String {
        match self {
            RecordSource::Http(source) => source.url().to_string(),
            RecordSource::File(source) => source.path().display().to_string(),
        }
    }
}

/// Pick the source: a file path wins over the URL.
///
/// `timeout` only applies to HTTP requests.
pub fn detect_record_source(
    url: String,
    file: Option<PathBuf>,
    timeout: Option<Duration>,
) -> RecordSource {
    match file {
        Some(path) => RecordSource::File(FileSource::new(path)),
        None => RecordSource::Http(HttpSource::new(url).with_timeout(timeout)),
    }
}

/// Outcome of an acquisition.
pub type LoadResult = Result<Vec<Record>, FetchError>;

/// Handle to an in-flight acquisition.
///
/// Dropping the handle drops the receiver; the worker's send then fails and
/// the result is discarded instead of reaching state that no longer exists.
#[derive(Debug)]
pub struct PendingLoad {
    rx: Receiver<LoadResult>,
    finished: bool,
}

impl PendingLoad {
    /// Non-blocking check for the result. Yields it at most once.
    pub fn poll(&mut self) -> Option<LoadResult> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker exited without sending; only possible if it panicked
                self.finished = true;
                error!("Acquisition worker exited without a result");
                Some(Err(FetchError::Runtime(std::io::Error::other(
                    "acquisition worker exited without a result",
                ))))
            }
        }
    }

    /// Whether the result has already been taken.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// A handle whose result is already available. Used by tests.
    pub fn ready(result: LoadResult) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx, finished: false }
    }
}

/// Start loading `source` on a background thread.
pub fn spawn_acquisition(source: RecordSource) -> PendingLoad {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(source.load()),
            Err(err) => {
                error!("Failed to build acquisition runtime: {err}");
                Err(FetchError::Runtime(err))
            }
        };

        if tx.send(result).is_err() {
            debug!("View discarded before acquisition completed; dropping result");
        }
    });

    PendingLoad {
        rx,
        finished: false,
    }
}
