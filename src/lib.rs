//! Console Summary: grouped command summary screens for CLI applications
//!
//! Renders a title/version banner, a usage line, and a borderless table of
//! registered commands grouped by namespace prefix (`db:migrate` groups
//! under `db`). The host owns command registration and execution; this crate
//! only formats what it is handed and writes it to a sink.

pub mod descriptor;
pub mod error;
pub mod logging;
pub mod output;
pub mod style;
pub mod summary;

pub use descriptor::{ApplicationDescriptor, CommandDescriptor};
pub use error::SummaryError;
pub use output::{AnsiSink, OutputSink, PlainSink};
pub use style::SummaryStyle;
pub use summary::{group_by_namespace, SummaryRenderer};
