//! File system moves with transaction support.
//!
//! File and directory moves are staged, then committed as a unit or undone.

pub mod transaction;

pub use transaction::Transaction;
