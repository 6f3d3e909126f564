//! Host Serial Protocol
//!
//! This crate defines the line-oriented text protocol between the host
//! computer and the Talos controller board. The protocol is designed for
//! minimal framing and easy debugging over a terminal.
//!
//! # Protocol Overview
//!
//! Commands are newline-terminated ASCII lines with a literal,
//! case-sensitive prefix:
//!
//! ```text
//! status
//! mode=<int>
//! led0=<int>,<int>,<int>   led1=...   led2=...
//! spindle=<0|1> laser=<0|1> air=<0|1> vacuum=<0|1> hood=<0|1>
//! pump_interval_ms=<int>
//! ```
//!
//! Replies are `done`, `args_error`, `unknown`, or (for `status`) a
//! multi-line `key=value` block. There are no checksums and no command
//! IDs; exactly one command is processed per completed line, in arrival
//! order. An oversized line is silently dropped - the host detects this
//! case by timeout, not by an error token.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod reply;
pub mod status;

pub use command::{parse, Actuator, Command, ParseError};
pub use line::{Line, LineAssembler, MAX_LINE};
pub use reply::Reply;
pub use status::StatusReport;
