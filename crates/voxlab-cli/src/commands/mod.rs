//! Command implementations for the voxlab CLI.
//!
//! Each command module exposes a `run` function that takes the parsed
//! arguments and returns an exit code. Commands print human-readable
//! colored output by default and a machine-readable JSON envelope when
//! `--json` is passed.

pub mod convert;
pub mod pitch;
pub mod spectrum;
pub mod synth;
