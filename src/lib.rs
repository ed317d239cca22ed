//! herald - Composable console UI
//!
//! Seven semantically named output channels (log, output, success, info,
//! error, warn, running) plus a blocking line read, behind a single
//! capability trait. Cross-cutting behaviors are stacked as decorators, each
//! adding exactly one concern and delegating the write to its inner
//! implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  PrefixUi    │  per-channel tag prepended to the message
//! └──────┬───────┘
//!        │ delegates
//!        ▼
//! ┌──────────────┐
//! │  ColorUi     │  per-channel foreground/background escapes
//! └──────┬───────┘
//!        │ delegates
//!        ▼
//! ┌──────────────┐
//! │ ConcurrentUi │  one lock around the whole inner chain
//! └──────┬───────┘
//!        │ delegates
//!        ▼
//! ┌──────────────┐
//! │  BasicUi     │  direct writes to the caller's streams
//! └──────────────┘
//! ```
//!
//! Chains are built bottom-up and any stacking order is legal; every layer
//! satisfies the full [`Ui`] contract. Order is still observable: a
//! [`ConcurrentUi`] placed outermost makes the whole prefix+color+write
//! atomic, while one placed directly over [`BasicUi`] protects only the final
//! stream write.
//!
//! # Write-failure policy
//!
//! Channel writes are fire-and-forget across the entire crate. [`BasicUi`] is
//! the only component that touches real I/O; a failed sink write is recorded
//! with `tracing::warn!` and otherwise dropped. Decorators never observe,
//! swallow, or invent errors. Only [`Ui::ask`] returns a [`Result`].
//!
//! # Example
//!
//! ```no_run
//! use herald::{BasicUi, Color, ColorUi, ConcurrentUi, PrefixUi, Ui};
//!
//! let base = BasicUi::stdio();
//! let safe = ConcurrentUi::new(base);
//! let colored = ColorUi::new(
//!     Color::None,      // log
//!     Color::None,      // output
//!     Color::Green,     // success
//!     Color::Cyan,      // info
//!     Color::BrightRed, // error
//!     Color::Yellow,    // warn
//!     Color::Magenta,   // running
//!     safe,
//! );
//! let ui = PrefixUi::new("", "", "✓", "ℹ", "✗", "⚠", "…", colored);
//!
//! ui.running("fetching index");
//! ui.success("2 packages installed");
//! ```

mod basic;
mod color;
mod concurrent;
mod error;
mod prefix;
mod ui;

pub use basic::BasicUi;
pub use color::{Color, ColorUi};
pub use concurrent::ConcurrentUi;
pub use error::UiError;
pub use prefix::PrefixUi;
pub use ui::Ui;
