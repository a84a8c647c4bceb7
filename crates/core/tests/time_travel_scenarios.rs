use rewind_core::TimeTravel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Move { dx: i32, dy: i32 },
}

fn reduce(state: &mut Point, action: Action) {
    match action {
        Action::Move { dx, dy } => {
            state.x += dx;
            state.y += dy;
        }
    }
}

fn point(x: i32, y: i32) -> Point {
    Point { x, y }
}

#[test]
fn move_undo_redo_walkthrough() {
    let mut tt = TimeTravel::new(reduce, Point::default());

    tt.apply(Action::Move { dx: 1, dy: 0 });
    assert_eq!(tt.state(), &point(1, 0));
    assert_eq!(tt.timeline().past(), &[point(0, 0)]);
    assert!(tt.timeline().future().is_empty());

    tt.apply(Action::Move { dx: 0, dy: 1 });
    assert_eq!(tt.state(), &point(1, 1));
    assert_eq!(tt.timeline().past(), &[point(0, 0), point(1, 0)]);

    assert!(tt.undo());
    assert_eq!(tt.state(), &point(1, 0));
    assert_eq!(tt.timeline().past(), &[point(0, 0)]);
    assert_eq!(tt.timeline().future(), &[point(1, 1)]);

    assert!(tt.undo());
    assert_eq!(tt.state(), &point(0, 0));
    assert!(tt.timeline().past().is_empty());
    assert_eq!(tt.timeline().future(), &[point(1, 0), point(1, 1)]);

    assert!(tt.redo());
    assert_eq!(tt.state(), &point(1, 0));
    assert_eq!(tt.timeline().past(), &[point(0, 0)]);
    assert_eq!(tt.timeline().future(), &[point(1, 1)]);
}

#[test]
fn reset_rewinds_to_oldest_and_keeps_everything_redoable() {
    // Build past=[A,B,C], present=D, future=[E] where the states are the
    // x coordinates 0..=4.
    let mut tt = TimeTravel::new(reduce, Point::default());
    for _ in 0..4 {
        tt.apply(Action::Move { dx: 1, dy: 0 });
    }
    assert!(tt.undo());
    assert_eq!(tt.timeline().past(), &[point(0, 0), point(1, 0), point(2, 0)]);
    assert_eq!(tt.state(), &point(3, 0));
    assert_eq!(tt.timeline().future(), &[point(4, 0)]);

    assert!(tt.reset());
    assert_eq!(tt.state(), &point(0, 0));
    assert!(tt.timeline().past().is_empty());
    assert_eq!(
        tt.timeline().future(),
        &[point(1, 0), point(2, 0), point(3, 0), point(4, 0)]
    );
}

#[test]
fn undo_and_redo_at_the_boundaries_are_noops() {
    let mut tt = TimeTravel::new(reduce, Point::default());
    let fresh = tt.timeline().clone();
    assert!(!tt.undo());
    assert!(!tt.redo());
    assert!(!tt.reset());
    assert_eq!(tt.timeline(), &fresh);
}
