//! The scheduling algorithms
//!
//! Every algorithm is a decision step of `Scheduler`, picked by its `Policy`.

mod fcfs;
mod priority;
mod round_robin;
mod srtf;
