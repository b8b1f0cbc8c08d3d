// src/progress.rs
use std::fmt;

/// Steps of one lookup, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Compiled,
    PlayerResolved,
    ResultsFetched,
    Decoded,
}

impl Stage {
    pub const COUNT: usize = 4;
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Compiled => "request compiled",
            Stage::PlayerResolved => "player resolved",
            Stage::ResultsFetched => "results page fetched",
            Stage::Decoded => "table decoded",
        })
    }
}

/// Progress reporting for a lookup. Front ends implement this to surface
/// status; every method has a no-op default.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
