use scrollview::{Label, Rect, ScrollView, ViewEvent};

/// 50 labels of height 20 in a 200-row viewport, content height 1000.
fn fifty_labels() -> ScrollView {
    let mut view = ScrollView::new(80, 200);
    for i in 1..=50 {
        view.add_child(Label::new(format!("Label {i}")).height(20));
    }
    view
}

// ============================================================================
// Drag Clamping
// ============================================================================

#[test]
fn test_drag_beyond_end_clamps_to_max() {
    let mut view = fifty_labels();

    view.on_scrollbar_dragged(2000);
    assert_eq!(view.scroll_y(), 800, "clamped to content - viewport");
}

#[test]
fn test_drag_within_range_is_taken_verbatim() {
    let mut view = fifty_labels();

    view.on_scrollbar_dragged(437);
    assert_eq!(view.scroll_y(), 437);
}

#[test]
fn test_drag_to_same_offset_reports_no_change() {
    let mut view = fifty_labels();
    view.on_scrollbar_dragged(100);

    assert!(!view.on_scrollbar_dragged(100), "offset unchanged");
    assert!(view.on_scrollbar_dragged(101), "offset moved");
}

#[test]
fn test_drag_when_content_fits_stays_at_zero() {
    let mut view = ScrollView::new(80, 24);
    view.add_child(Label::new("short").height(10));

    view.on_scrollbar_dragged(500);
    assert_eq!(view.scroll_y(), 0, "nothing to scroll");
}

// ============================================================================
// Shrink Clamping
// ============================================================================

#[test]
fn test_shrink_below_viewport_clamps_to_zero() {
    let mut view = fifty_labels();
    view.on_scrollbar_dragged(800);

    // Remove children until the content is shorter than the viewport.
    while view.content_size().1 > 150 {
        view.remove_child(0);
    }

    assert!(view.content_size().1 < 200);
    assert_eq!(view.scroll_y(), 0, "offset clamped down on shrink");
}

#[test]
fn test_shrink_partway_clamps_to_new_max() {
    let mut view = fifty_labels();
    view.on_scrollbar_dragged(800);

    // 30 children of height 20 remain: content 600, max offset 400.
    while view.children().len() > 30 {
        view.remove_child(0);
    }

    assert_eq!(view.content_size().1, 600);
    assert_eq!(view.scroll_y(), 400, "clamped to the new valid maximum");
}

#[test]
fn test_growth_preserves_offset() {
    let mut view = fifty_labels();
    view.on_scrollbar_dragged(800);

    view.add_child(Label::new("more").height(20));
    assert_eq!(view.scroll_y(), 800, "growing content never moves the view");
    assert_eq!(view.max_scroll(), 820);
}

// ============================================================================
// Wheel Scrolling
// ============================================================================

#[test]
fn test_wheel_clamps_at_both_ends() {
    let mut view = ScrollView::new(80, 10);
    for _ in 0..4 {
        view.add_child(Label::new("row").height(5));
    }

    assert!(!view.scroll_by(-3), "already at the top");
    assert_eq!(view.scroll_y(), 0);

    view.scroll_by(7);
    assert_eq!(view.scroll_y(), 7);

    view.scroll_by(100);
    assert_eq!(view.scroll_y(), 10, "clamped at content - viewport");
}

#[test]
fn test_wheel_on_fitting_content_is_inert() {
    let mut view = ScrollView::new(80, 24);
    view.add_child(Label::new("one"));

    assert!(!view.scroll_by(5));
    assert_eq!(view.scroll_y(), 0);
}

// ============================================================================
// Viewport Resize
// ============================================================================

#[test]
fn test_viewport_shrink_keeps_offset_valid() {
    let mut view = fifty_labels();
    view.on_scrollbar_dragged(800);

    // Taller viewport: less room to scroll.
    view.on_viewport_resized(80, 400);
    assert_eq!(view.scroll_y(), 600, "re-clamped against the new viewport");

    view.on_viewport_resized(80, 1200);
    assert_eq!(view.scroll_y(), 0, "viewport taller than content");
}

#[test]
fn test_viewport_resize_reports_change() {
    let mut view = fifty_labels();

    assert!(view.on_viewport_resized(100, 200), "width changed");
    assert!(!view.on_viewport_resized(100, 200), "same size again");
}

// ============================================================================
// Recompute Idempotence
// ============================================================================

#[test]
fn test_recompute_twice_is_idempotent() {
    let mut view = fifty_labels();
    view.on_scrollbar_dragged(300);

    let first = view.on_content_resized();
    assert!(!first, "no mutation since construction finished");

    let offset = view.scroll_y();
    let content = view.content_size();
    let second = view.on_content_resized();

    assert!(!second, "second call observes nothing to do");
    assert_eq!(view.scroll_y(), offset);
    assert_eq!(view.content_size(), content);
}

// ============================================================================
// Typed Event Dispatch
// ============================================================================

#[test]
fn test_handle_dispatches_all_payloads() {
    let mut view = fifty_labels();

    assert!(view.handle(&ViewEvent::ScrollbarDragged { offset: 50 }));
    assert_eq!(view.scroll_y(), 50);

    assert!(view.handle(&ViewEvent::WheelScrolled { delta: -10 }));
    assert_eq!(view.scroll_y(), 40);

    assert!(view.handle(&ViewEvent::ViewportResized {
        width: 80,
        height: 100,
    }));
    assert_eq!(view.viewport_size(), (80, 100));

    // Content unchanged: the resize notification finds a fixed point.
    assert!(!view.handle(&ViewEvent::ContentResized {
        area: Rect::from_size(7, 1000),
    }));
}

// ============================================================================
// Offset Invariant
// ============================================================================

#[test]
fn test_offset_stays_in_range_under_event_sequences() {
    let mut view = fifty_labels();

    let events = [
        ViewEvent::ScrollbarDragged { offset: 5000 },
        ViewEvent::WheelScrolled { delta: -100 },
        ViewEvent::WheelScrolled { delta: 17 },
        ViewEvent::ViewportResized {
            width: 80,
            height: 950,
        },
        ViewEvent::ScrollbarDragged { offset: 49 },
        ViewEvent::ViewportResized {
            width: 80,
            height: 200,
        },
        ViewEvent::WheelScrolled { delta: i16::MAX },
        ViewEvent::ContentResized {
            area: Rect::from_size(7, 1000),
        },
        ViewEvent::WheelScrolled { delta: i16::MIN },
        ViewEvent::ScrollbarDragged { offset: 800 },
    ];

    for event in &events {
        view.handle(event);
        let max = view.max_scroll();
        assert!(
            view.scroll_y() <= max,
            "offset {} exceeded max {} after {:?}",
            view.scroll_y(),
            max,
            event
        );
    }
}

#[test]
fn test_offset_is_zero_whenever_content_fits() {
    let mut view = ScrollView::new(80, 100);
    view.add_child(Label::new("a").height(30));
    view.add_child(Label::new("b").height(30));

    let events = [
        ViewEvent::ScrollbarDragged { offset: 10 },
        ViewEvent::WheelScrolled { delta: 25 },
        ViewEvent::ScrollbarDragged { offset: u16::MAX },
    ];

    for event in &events {
        view.handle(event);
        assert_eq!(view.scroll_y(), 0, "content shorter than viewport");
    }
}

// ============================================================================
// Scrollbar Freshness
// ============================================================================

#[test]
fn test_scrollbar_range_follows_every_mutation() {
    let mut view = ScrollView::new(80, 10);
    assert_eq!(view.scrollbar().range(), 0);

    view.add_child(Label::new("a").height(8));
    assert_eq!(view.scrollbar().range(), 8, "updated by the same call");

    view.add_child(Label::new("b").height(8));
    assert_eq!(view.scrollbar().range(), 16);

    view.remove_child(0);
    assert_eq!(view.scrollbar().range(), 8);
}

#[test]
fn test_scrollbar_position_mirrors_offset() {
    let mut view = fifty_labels();

    view.on_scrollbar_dragged(321);
    assert_eq!(view.scrollbar().position(), 321);

    view.scroll_by(-21);
    assert_eq!(view.scrollbar().position(), 300);
}
