use aethereal_core::{
    sheet_count, ActiveFaces, Face, ImagePage, NavIntent, PageContent, SheetStack, SwipeTracker,
};

fn build_content(pages: u32) -> Vec<PageContent> {
    (0..pages)
        .map(|id| {
            PageContent::Image(ImagePage {
                id,
                image_url: "page.jpg",
                caption: None,
            })
        })
        .collect()
}

fn stack_at(total: usize, current: usize) -> SheetStack {
    let mut stack = SheetStack::new(total);
    for _ in 0..current {
        assert!(stack.advance());
    }
    stack
}

#[test]
fn flip_state_matches_position_everywhere() {
    let total = 5;
    for current in 0..=total {
        let stack = stack_at(total, current);
        for index in 0..total {
            assert_eq!(stack.flip_state_of(index), index < current);
        }
    }
}

#[test]
fn advance_then_retreat_round_trips_inside_the_range() {
    let total = 4;
    for current in 1..total {
        let mut stack = stack_at(total, current);
        assert!(stack.advance());
        assert!(stack.retreat());
        assert_eq!(stack.current(), current);
    }
}

#[test]
fn moves_saturate_at_both_ends() {
    let mut stack = stack_at(4, 4);
    assert!(!stack.advance());
    assert_eq!(stack.current(), 4);

    let mut stack = SheetStack::new(4);
    assert!(!stack.retreat());
    assert_eq!(stack.current(), 0);
}

#[test]
fn z_order_stacks_each_pile() {
    let stack = stack_at(4, 2);
    assert_eq!(stack.z_order_of(0), 0);
    assert_eq!(stack.z_order_of(1), 1);
    assert_eq!(stack.z_order_of(2), 2);
    assert_eq!(stack.z_order_of(3), 1);
}

#[test]
fn z_order_ranks_hold_for_every_position() {
    let total = 6;
    for current in 0..=total {
        let stack = stack_at(total, current);
        for index in 1..current {
            assert!(stack.z_order_of(index) > stack.z_order_of(index - 1));
        }
        for index in (current + 1)..total {
            assert!(stack.z_order_of(index) < stack.z_order_of(index - 1));
        }
    }
}

#[test]
fn render_z_keeps_pile_order_and_lifts_the_turned_sheet() {
    let total = 6;
    let mut stack = SheetStack::new(total);
    let intents = [
        NavIntent::Forward,
        NavIntent::Forward,
        NavIntent::Forward,
        NavIntent::Backward,
        NavIntent::Forward,
        NavIntent::Forward,
        NavIntent::Backward,
        NavIntent::Backward,
    ];
    for intent in intents {
        assert!(stack.apply(intent));
        let current = stack.current();
        let turned = stack.last_turned().expect("a sheet turned");
        for index in 0..total {
            if index != turned {
                assert!(stack.render_z_of(turned) > stack.render_z_of(index));
            }
        }
        for index in 1..current {
            assert!(stack.render_z_of(index) > stack.render_z_of(index - 1));
        }
        for index in (current + 1)..total {
            assert!(stack.render_z_of(index) < stack.render_z_of(index - 1));
        }
    }
}

#[test]
fn active_faces_at_the_ends() {
    let total = 4;
    assert_eq!(
        SheetStack::new(total).active_faces(),
        ActiveFaces {
            front: Some(0),
            back: None,
        }
    );
    assert_eq!(
        stack_at(total, total).active_faces(),
        ActiveFaces {
            front: None,
            back: Some(total - 1),
        }
    );
}

#[test]
fn only_two_faces_are_active_mid_book() {
    let stack = stack_at(4, 2);
    let mut active = Vec::new();
    for index in 0..4 {
        for face in [Face::Front, Face::Back] {
            if stack.is_face_active(index, face) {
                active.push((index, face));
            }
        }
    }
    assert_eq!(active, vec![(1, Face::Back), (2, Face::Front)]);
}

#[test]
fn clicking_buried_sheets_does_nothing() {
    let mut stack = stack_at(4, 3);
    assert!(!stack.flip_sheet_at(1));
    assert!(!stack.flip_sheet_at(0));
    assert_eq!(stack.current(), 3);
}

#[test]
fn clicking_the_piles_turns_one_sheet() {
    let mut stack = stack_at(4, 2);
    assert!(stack.apply(NavIntent::FlipSheet(2)));
    assert_eq!(stack.current(), 3);
    assert!(stack.apply(NavIntent::FlipSheet(2)));
    assert_eq!(stack.current(), 2);
    assert!(stack.apply(NavIntent::FlipSheet(1)));
    assert_eq!(stack.current(), 1);
}

#[test]
fn status_label_names_the_last_turned_sheet() {
    let content = build_content(8);
    let total = sheet_count(content.len());
    assert_eq!(total, 4);
    assert_eq!(stack_at(total, 0).status_label(&content), "COVER");
    assert_eq!(stack_at(total, 1).status_label(&content), "0 — 1");
    assert_eq!(stack_at(total, 2).status_label(&content), "2 — 3");
    assert_eq!(stack_at(total, 3).status_label(&content), "4 — 5");
    assert_eq!(stack_at(total, total).status_label(&content), "END");
}

#[test]
fn status_label_after_two_turns_of_eight_pages() {
    let content = build_content(8);
    let mut stack = SheetStack::for_content(&content);
    assert!(stack.advance());
    assert!(stack.advance());
    assert_eq!(stack.status_label(&content), "2 — 3");
}

#[test]
fn spread_label_names_the_open_pages() {
    let content = build_content(8);
    let total = sheet_count(content.len());
    assert_eq!(stack_at(total, 0).spread_label(&content), "0");
    assert_eq!(stack_at(total, 2).spread_label(&content), "3 — 4");
    assert_eq!(stack_at(total, total).spread_label(&content), "7");
}

#[test]
fn open_spread_of_a_book_with_a_trailing_front() {
    let content = build_content(5);
    let stack = stack_at(sheet_count(content.len()), 2);
    let spread = stack.open_spread(&content);
    assert_eq!(spread.left.map(|page| page.id()), Some(3));
    assert_eq!(spread.right.map(|page| page.id()), Some(4));
    let last = stack_at(3, 3).open_spread(&content);
    assert!(last.left.is_none());
    assert!(last.right.is_none());
}

#[test]
fn swipes_step_exactly_once_past_the_threshold() {
    let mut stack = stack_at(4, 1);
    let mut swipe = SwipeTracker::default();

    swipe.begin(300.0);
    if let Some(intent) = swipe.finish(251.0) {
        stack.apply(intent);
    }
    assert_eq!(stack.current(), 1);

    swipe.begin(300.0);
    if let Some(intent) = swipe.finish(249.0) {
        stack.apply(intent);
    }
    assert_eq!(stack.current(), 2);

    swipe.begin(300.0);
    if let Some(intent) = swipe.finish(351.0) {
        stack.apply(intent);
    }
    assert_eq!(stack.current(), 1);
}

#[test]
fn rapid_triggers_apply_one_step_each() {
    let mut stack = SheetStack::new(3);
    let changed: Vec<bool> = (0..5).map(|_| stack.apply(NavIntent::Forward)).collect();
    assert_eq!(changed, vec![true, true, true, false, false]);
    assert_eq!(stack.current(), 3);
}
