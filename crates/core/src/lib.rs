pub mod history;
pub mod snapshot;
pub mod timeline;

pub use history::{HistoryAction, TimeTravel};
pub use snapshot::{SnapshotError, read_snapshot, write_snapshot};
pub use timeline::Timeline;
