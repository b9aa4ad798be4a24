//! # Notesbook Architecture
//!
//! Notesbook keeps short notes, each a body of text plus a few `#tags`, in a
//! single JSON file. The library holds all behavior; the binary only parses
//! arguments and prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the book, the id generator and the backend          │
//! │  - Saves after every successful mutation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (field.rs, model.rs, records.rs, id.rs)             │
//! │  - Validated fields, records, the keyed record store        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - A [`field::Tag`] or [`field::Body`] can only hold a value its rule
//!   accepts; every write is validated.
//! - A [`model::Record`] never carries two equal tags and never changes id.
//! - Every entry of a [`records::RecordStore`] is stored under its record's id.
//! - A failed operation leaves the book exactly as it was.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation
//! - [`field`]: Validated string fields (`Tag`, `Body`)
//! - [`model`]: The `Record` type
//! - [`records`]: The keyed collection and its JSON mapping form
//! - [`id`]: Record id generation
//! - [`store`]: Persistence backends
//! - [`config`]: Configuration and data directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod id;
pub mod model;
pub mod records;
pub mod store;
