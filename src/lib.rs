//! Pair-a-Gone (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `pair_a_gone::{core,adapter,term,input,types}`. The implementation lives in
//! dedicated crates under `crates/`.

pub use pair_a_gone_adapter as adapter;
pub use pair_a_gone_core as core;
pub use pair_a_gone_input as input;
pub use pair_a_gone_term as term;
pub use pair_a_gone_types as types;
