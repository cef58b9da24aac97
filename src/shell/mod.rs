//! Simulated terminal core.
//!
//! A boot-sequence animator feeding a line-oriented command interpreter
//! over a read-only project catalog:
//!
//! - `timeline`: cooperative scheduled-task list with cancellation handles
//! - `boot`: boot script, timing and the one-shot [`BootSequencer`]
//! - `command`: pure parse and dispatch of input lines
//! - `transcript`: append-only command/response log
//! - `session`: the widget instance tying them together
//!
//! # Usage
//!
//! ```
//! use std::time::Instant;
//! use folio::catalog::Catalog;
//! use folio::shell::{BootTiming, Session};
//!
//! let catalog = Catalog::builtin();
//! let mut session = Session::new(&catalog, BootTiming::instant(), Box::new(|| {}));
//! let now = Instant::now();
//! session.activate(now);
//! session.tick(now);
//!
//! session.submit("ls");
//! assert_eq!(session.transcript().len(), 2);
//! ```

pub mod boot;
pub mod command;
pub mod session;
pub mod timeline;
pub mod transcript;

pub use boot::{BootEvent, BootLine, BootPhase, BootSequencer, BootTiming, DEFAULT_BOOT_SCRIPT};
pub use command::{dispatch, normalize, Command, Output};
pub use session::{CloseHandler, InterpreterState, Session};
pub use timeline::{TaskHandle, Timeline};
pub use transcript::{EntryKind, Transcript, TranscriptEntry};
