mod renderer;

use std::path::PathBuf;

use anyhow::Result;
use rewind_core::{TimeTravel, Timeline, read_snapshot, write_snapshot};
use rewind_demos::move_box::{self, BoxState};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: rewind [snapshot.json]");
        std::process::exit(1);
    }

    // With a path argument, history is restored from the snapshot at
    // startup (when it exists) and written back on quit.
    let snapshot_path = args.get(1).map(PathBuf::from);
    let timeline = match &snapshot_path {
        Some(path) if path.exists() => {
            let data = std::fs::read_to_string(path)?;
            read_snapshot::<BoxState>(&data)?
        }
        _ => Timeline::new(BoxState::default()),
    };

    let mut time_travel = TimeTravel::from_timeline(move_box::reduce, timeline);
    renderer::run_tui(&mut time_travel)?;

    if let Some(path) = snapshot_path {
        std::fs::write(&path, write_snapshot(time_travel.timeline())?)?;
    }
    Ok(())
}
