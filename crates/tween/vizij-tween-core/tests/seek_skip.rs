use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vizij_tween_core::{
    builder::{callback, dynamic, parallel, sequence, tween, wait},
    ease, DurationInfo, Tween,
};

fn cell(v: f32) -> Rc<RefCell<f32>> {
    Rc::new(RefCell::new(v))
}

#[test]
fn seek_is_idempotent() {
    let x = cell(0.0);
    let y = cell(100.0);
    let mut root = sequence()
        .add(tween(x.clone(), 10.0, 1.0, ease::linear))
        .add(
            parallel()
                .add_channel(tween(x.clone(), 20.0, 1.0, ease::linear))
                .add_channel(tween(y.clone(), 0.0, 2.0, ease::quad_in)),
        );

    root.seek_to(1.5);
    let first = (*x.borrow(), *y.borrow(), root.total_duration());
    root.seek_to(1.5);
    let second = (*x.borrow(), *y.borrow(), root.total_duration());
    assert_eq!(first, second);
    assert_eq!(first.0, 15.0);
}

#[test]
fn seek_walks_children_by_known_duration() {
    let x = cell(0.0);
    let y = cell(0.0);
    let mut seq = sequence()
        .add(tween(x.clone(), 4.0, 1.0, ease::linear))
        .add(wait(1.0))
        .add(tween(y.clone(), 8.0, 2.0, ease::linear));

    seq.seek_to(2.5);
    assert_eq!(seq.current_index(), 2);
    assert_eq!(*x.borrow(), 4.0);
    assert_eq!(*y.borrow(), 2.0);
    assert_eq!(seq.total_duration(), DurationInfo::known(4.0, 2.5));

    // Seeking backwards restores earlier values.
    seq.seek_to(0.5);
    assert_eq!(seq.current_index(), 0);
    assert_eq!(*x.borrow(), 2.0);
    assert_eq!(*y.borrow(), 0.0);

    // Past the end finishes everything.
    seq.seek_to(10.0);
    assert!(seq.is_done());
    assert_eq!(*y.borrow(), 8.0);
}

#[test]
fn seek_stops_at_unknown_child() {
    let x = cell(0.0);
    let gen_x = x.clone();
    let mut seq = sequence()
        .add(wait(1.0))
        .add(dynamic(move || tween(gen_x, 10.0, 2.0, ease::linear)))
        .add(wait(5.0));
    assert_eq!(seq.total_duration(), DurationInfo::Unknown);

    seq.seek_to(2.0);
    // 1s consumed by the wait, the remaining 1s handed to the dynamic child.
    assert_eq!(seq.current_index(), 1);
    assert_eq!(*x.borrow(), 5.0);
    assert_eq!(seq.total_duration(), DurationInfo::known(8.0, 2.0));
}

#[test]
fn parallel_seek_gives_every_channel_same_time() {
    let a = cell(0.0);
    let b = cell(0.0);
    let mut par = parallel()
        .add_channel(tween(a.clone(), 1.0, 1.0, ease::linear))
        .add_channel(tween(b.clone(), 4.0, 4.0, ease::linear));
    par.seek_to(2.0);
    assert_eq!(*a.borrow(), 1.0);
    assert_eq!(*b.borrow(), 2.0);
    assert!(!par.is_done());
}

#[test]
fn skip_to_end_finishes_nested_trees() {
    let x = cell(0.0);
    let y = cell(0.0);
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    let gen_y = y.clone();
    let mut root = sequence()
        .add(tween(x.clone(), 3.0, 1.0, ease::linear))
        .add(
            parallel()
                .add_channel(wait(10.0))
                .add_channel(dynamic(move || {
                    sequence()
                        .add(wait(2.0))
                        .add(tween(gen_y, 9.0, 1.0, ease::back_out))
                })),
        )
        .add(callback(move || f.set(true)));

    root.skip_to_end();
    assert!(root.is_done());
    assert_eq!(*x.borrow(), 3.0);
    assert_eq!(*y.borrow(), 9.0);
    assert!(fired.get());
    assert_eq!(root.total_duration(), DurationInfo::known(11.0, 11.0));
}

#[test]
fn skip_after_partial_progress() {
    let x = cell(0.0);
    let mut seq = sequence()
        .add(tween(x.clone(), 1.0, 1.0, ease::linear))
        .add(tween(x.clone(), 5.0, 1.0, ease::linear));
    seq.advance(1.25);
    seq.skip_to_end();
    assert!(seq.is_done());
    assert_eq!(*x.borrow(), 5.0);
}

#[test]
fn seek_past_unbuilt_dynamic_is_idempotent() {
    let x = cell(0.0);
    let y = cell(0.0);
    let gen_x = x.clone();
    let mut root = sequence()
        .add(dynamic(move || tween(gen_x, 10.0, 1.0, ease::linear)))
        .add(tween(y.clone(), 5.0, 1.0, ease::linear));

    root.seek_to(1.5);
    let first = (*x.borrow(), *y.borrow());
    assert_eq!(root.current_index(), 1);
    root.seek_to(1.5);
    let second = (*x.borrow(), *y.borrow());
    assert_eq!(first, second);
    assert_eq!(first, (10.0, 2.5));
    assert_eq!(root.total_duration(), DurationInfo::known(2.0, 1.5));
}

#[test]
fn dynamic_generator_runs_exactly_once() {
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let x = cell(0.0);
    let gen_x = x.clone();
    let mut root = sequence().add(dynamic(move || {
        c.set(c.get() + 1);
        tween(gen_x, 1.0, 1.0, ease::linear)
    }));

    assert_eq!(root.total_duration(), DurationInfo::Unknown);
    assert_eq!(calls.get(), 0);

    root.advance(0.25);
    root.seek_to(0.5);
    root.seek_to(0.75);
    root.advance(0.1);
    root.reset();
    root.advance(2.0);
    root.skip_to_end();
    assert_eq!(calls.get(), 1);
    assert!(root.is_done());
}

#[test]
#[should_panic(expected = "unknown")]
fn numeric_duration_of_unbuilt_tree_panics() {
    let root = sequence().add(dynamic(|| wait(1.0)));
    root.total_duration().value();
}
