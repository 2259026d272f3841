use std::fs;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use shelf_paths::{DirectoryKind, FileName, LayoutError, SandboxLayout};

use crate::codec::{Codec, JsonCodec};
use crate::error::{StoreError, StoreResult};
use crate::lane::WorkLane;

/// Outcome handle for a `_checked` store or remove.
///
/// The job itself is unaffected by the ticket: dropping it discards the
/// outcome without cancelling anything (there is no cancellation).
#[derive(Debug)]
pub struct Ticket {
    rx: Receiver<StoreResult<()>>,
}

impl Ticket {
    /// Block until the queued job has executed and return its outcome.
    pub fn wait(self) -> StoreResult<()> {
        self.rx.recv().unwrap_or(Err(StoreError::LaneClosed))
    }
}

/// Named-file object store over the two sandboxed directory kinds.
///
/// Values are encoded through the store's [`Codec`] (JSON by default) and
/// written to the paths resolved by a [`SandboxLayout`]. All writes and
/// removes funnel through one FIFO work lane owned by this instance;
/// queued restores share the same lane, so a restore submitted after a
/// store of the same name observes that store's result. Reads may instead
/// run inline on the caller's thread via
/// [`restore_blocking`](Self::restore_blocking).
///
/// Dropping the store drains the lane: every previously submitted write
/// and remove lands on disk before `drop` returns.
pub struct ObjectStore<C: Codec = JsonCodec> {
    layout: Arc<SandboxLayout>,
    codec: Arc<C>,
    lane: WorkLane,
}

impl ObjectStore<JsonCodec> {
    /// Store over the discovered platform sandbox, encoding as JSON.
    pub fn new() -> Result<Self, LayoutError> {
        Ok(Self::with_layout(SandboxLayout::discover()?))
    }

    /// Store over an explicit layout, encoding as JSON.
    pub fn with_layout(layout: SandboxLayout) -> Self {
        Self::with_codec(layout, JsonCodec)
    }
}

impl<C: Codec> ObjectStore<C> {
    /// Store over an explicit layout and codec.
    pub fn with_codec(layout: SandboxLayout, codec: C) -> Self {
        Self {
            layout: Arc::new(layout),
            codec: Arc::new(codec),
            lane: WorkLane::new(),
        }
    }

    /// The path resolver backing this store.
    pub fn layout(&self) -> &SandboxLayout {
        &self.layout
    }

    /// Persist `value` under `name` in the given kind, fire-and-forget.
    ///
    /// Returns immediately; the queued job creates the kind's sandbox
    /// directory if absent, encodes the value, and overwrites any existing
    /// file at the resolved path. Every failure is logged and swallowed —
    /// callers that need the outcome use [`store_checked`](Self::store_checked).
    pub fn store<T>(&self, kind: DirectoryKind, value: T, name: FileName)
    where
        T: Serialize + Send + 'static,
    {
        let _ = self.store_checked(kind, value, name);
    }

    /// Persist `value` under `name`, reporting the outcome via a [`Ticket`].
    ///
    /// Runs on the same lane with the same semantics as
    /// [`store`](Self::store); the ticket only adds the typed result.
    pub fn store_checked<T>(&self, kind: DirectoryKind, value: T, name: FileName) -> Ticket
    where
        T: Serialize + Send + 'static,
    {
        let layout = Arc::clone(&self.layout);
        let codec = Arc::clone(&self.codec);
        let (done_tx, done_rx) = mpsc::channel();
        self.lane.submit(Box::new(move || {
            let outcome = write_value(&layout, codec.as_ref(), kind, &value, &name);
            if let Err(err) = &outcome {
                warn!(%name, %kind, error = %err, "store failed");
            }
            let _ = done_tx.send(outcome);
        }));
        Ticket { rx: done_rx }
    }

    /// Restore the value stored under `name`, delivering it to `completion`.
    ///
    /// If no file exists at the resolved path, `completion(None)` is
    /// invoked immediately on the calling thread without touching the
    /// lane. Otherwise the read and decode are queued, and `completion`
    /// runs on the store's work lane with `Some(value)` on success or
    /// `None` if the file could not be read or decoded — the two are
    /// indistinguishable by contract. Callers that need delivery on a
    /// specific thread forward the value through a channel.
    pub fn restore<T, F>(&self, kind: DirectoryKind, name: FileName, completion: F)
    where
        T: DeserializeOwned + 'static,
        F: FnOnce(Option<T>) + Send + 'static,
    {
        if !self.layout.exists(kind, &name) {
            completion(None);
            return;
        }
        let layout = Arc::clone(&self.layout);
        let codec = Arc::clone(&self.codec);
        self.lane.submit(Box::new(move || {
            completion(read_value(&layout, codec.as_ref(), kind, &name));
        }));
    }

    /// Restore the value stored under `name`, inline on the calling thread.
    ///
    /// Same contract as [`restore`](Self::restore), without the lane:
    /// `None` covers absent, unreadable, and undecodable alike.
    pub fn restore_blocking<T>(&self, kind: DirectoryKind, name: &FileName) -> Option<T>
    where
        T: DeserializeOwned,
    {
        if !self.layout.exists(kind, name) {
            return None;
        }
        read_value(&self.layout, self.codec.as_ref(), kind, name)
    }

    /// Delete the file stored under `name`, fire-and-forget.
    ///
    /// Returns immediately; absence is a no-op, and deletion failure is
    /// logged and swallowed.
    pub fn remove(&self, kind: DirectoryKind, name: FileName) {
        let _ = self.remove_checked(kind, name);
    }

    /// Delete the file stored under `name`, reporting the outcome via a
    /// [`Ticket`]. Removing a file that does not exist is `Ok(())`.
    pub fn remove_checked(&self, kind: DirectoryKind, name: FileName) -> Ticket {
        let layout = Arc::clone(&self.layout);
        let (done_tx, done_rx) = mpsc::channel();
        self.lane.submit(Box::new(move || {
            let outcome = remove_file(&layout, kind, &name);
            if let Err(err) = &outcome {
                warn!(%name, %kind, error = %err, "remove failed");
            }
            let _ = done_tx.send(outcome);
        }));
        Ticket { rx: done_rx }
    }

    /// Returns `true` iff a file currently exists for `name` in `kind`.
    ///
    /// Direct pass-through to the resolver; never queued. A store or
    /// remove still sitting in the lane is not yet observable here.
    pub fn exists(&self, kind: DirectoryKind, name: &FileName) -> bool {
        self.layout.exists(kind, name)
    }

    /// Block until every previously submitted store and remove has
    /// executed.
    pub fn flush(&self) {
        self.lane.flush();
    }
}

impl<C: Codec> std::fmt::Debug for ObjectStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStore")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// The queued write: ensure the sandbox directory, encode, overwrite.
fn write_value<C: Codec, T: Serialize>(
    layout: &SandboxLayout,
    codec: &C,
    kind: DirectoryKind,
    value: &T,
    name: &FileName,
) -> StoreResult<()> {
    let root = layout.root_path(kind);
    fs::create_dir_all(&root).map_err(|source| StoreError::CreateDir {
        path: root.clone(),
        source,
    })?;

    let bytes = codec.encode(value).map_err(|source| StoreError::Encode {
        name: name.resolved(),
        source,
    })?;

    let path = layout.file_path(kind, name);
    // Whether the file already existed is informational only; the write
    // creates and truncates in one step either way.
    let existed = path.is_file();
    fs::write(&path, &bytes).map_err(|source| StoreError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), existed, len = bytes.len(), "stored");
    Ok(())
}

/// The restore read: absent, unreadable, and undecodable all yield `None`.
fn read_value<C: Codec, T: DeserializeOwned>(
    layout: &SandboxLayout,
    codec: &C,
    kind: DirectoryKind,
    name: &FileName,
) -> Option<T> {
    let path = layout.file_path(kind, name);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "restore read failed");
            return None;
        }
    };
    match codec.decode(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "restore decode failed");
            None
        }
    }
}

/// The queued remove: absence is a no-op.
fn remove_file(layout: &SandboxLayout, kind: DirectoryKind, name: &FileName) -> StoreResult<()> {
    let path = layout.file_path(kind, name);
    if !path.is_file() {
        debug!(path = %path.display(), "remove skipped, file absent");
        return Ok(());
    }
    fs::remove_file(&path).map_err(|source| StoreError::Remove {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "removed");
    Ok(())
}
