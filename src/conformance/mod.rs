/*!
 * Conformance Module
 * Exercises every hint through representative usage and checks functional results
 *
 * Only correctness is checked; performance effects of the hints are not observable
 * here and are never asserted.
 */

pub mod demo;
mod harness;

pub use demo::BranchOutcome;
pub use harness::{ConformanceHarness, ConformanceReport};
