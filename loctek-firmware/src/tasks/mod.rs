//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod desk_rx;
pub mod report;

pub use desk_rx::desk_rx_task;
pub use report::report_task;
