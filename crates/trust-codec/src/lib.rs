//! Defensive ingestion and serialization for the Data Trust governance core.
//!
//! The host platform hands the core serialized strings it does not control.
//! Every parser here follows the same contract: produce a typed value or a
//! documented default, and never fail past this boundary. Malformed JSON,
//! wrong shapes, and wrong primitive types all degrade — invalid elements are
//! dropped, empty results fall back to the built-in portfolio, and the caller
//! never sees an error.
//!
//! The one writer, [`serialize_change_history`], is the inverse of
//! [`parse_change_history`] for well-formed input and produces the pretty
//! `{"datasets": …}` document the host persists after every committed change.

pub mod history;
pub mod parse;

pub use history::{parse_change_history, serialize_change_history};
pub use parse::{
    merge_records, parse_detail_map, parse_option_list, parse_summaries, split_commas,
    split_lines,
};
