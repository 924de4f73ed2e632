//! Types and traits for recording values observed while running episodes.
//!
//! Environments return a [`Record`] with every step, and evaluators summarise
//! episodes into one. A [`Recorder`] decides where records go.
//!
//! ```rust
//! use toh_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(3.0));
//! record.insert("move", RecordValue::String("Pole 1 to Pole 3".to_string()));
//! assert_eq!(record.get_scalar("step").unwrap(), 3.0);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
