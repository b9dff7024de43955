//! Tooling primitives for inspecting foraging decisions.
//!
//! Engine-agnostic and lightweight: the controller emits [`TraceEvent`]s into whatever
//! [`TraceSink`] it was given, and tools render or assert on them later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, SharedTraceLog, TraceEvent, TraceLog, TraceSink, VecTraceSink};
