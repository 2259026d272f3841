//! Named-file object persistence for the shelf sandbox.
//!
//! This crate stores arbitrary serializable values as named files under the
//! sandbox areas resolved by [`shelf_paths`]. Values are encoded through a
//! pluggable [`Codec`] (JSON by default) and written with no envelope,
//! header, or checksum — the file content is exactly the encoded bytes.
//!
//! # Key Types
//!
//! - [`ObjectStore`] — `store` / `restore` / `remove` / `exists` over the
//!   documents and caches areas
//! - [`Codec`] / [`JsonCodec`] — the structured-encoding capability
//! - [`Ticket`] — typed outcome handle for the `_checked` operations
//!
//! # Design Rules
//!
//! 1. All queued operations on one store instance funnel through a single
//!    FIFO work lane; no two queued jobs ever run concurrently.
//! 2. `store` and `remove` are fire-and-forget: every failure is logged
//!    and swallowed. The `_checked` variants report a typed [`StoreError`]
//!    through a [`Ticket`] instead; nothing is ever retried.
//! 3. Restore failures are indistinguishable from absence — a missing
//!    file, an unreadable file, and undecodable bytes all yield `None`.
//! 4. No schema or version tag is persisted; the caller supplies the
//!    expected type on restore.
//! 5. Separate store instances (or external processes) touching the same
//!    paths are uncoordinated and may race.

pub mod codec;
pub mod error;
mod lane;
pub mod store;

pub use codec::{Codec, CodecError, CodecResult, JsonCodec};
pub use error::{StoreError, StoreResult};
pub use store::{ObjectStore, Ticket};
