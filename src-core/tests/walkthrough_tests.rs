use twotable_core::demo::{Agreement, DemoConfig, DemoController, LookingFor, Screen, SlotKey};

fn fresh() -> DemoController {
    DemoController::new(DemoConfig::default(), 0)
}

/// Drive a session up to the time picker with the system's restaurant agreed.
fn at_time_picker() -> DemoController {
    let mut c = fresh();
    c.go_to(4);
    c.like();
    c.tick(550);
    c.confirm_primary();
    assert_eq!(c.current_screen(), Screen::TIME_PICKER);
    c
}

fn pick(c: &mut DemoController, keys: &[(&str, &str)]) {
    for (day, time) in keys {
        c.toggle_your_slot(SlotKey::new(day, time));
    }
}

#[test]
fn test_full_walkthrough_with_overlap() {
    let mut c = fresh();

    c.toggle_tag("Books");
    c.set_looking_for(LookingFor::SomethingCasual);
    c.go_next();
    c.go_next();
    assert_eq!(c.current_screen(), Screen::MATCHING);

    c.tick(3050);
    assert_eq!(c.current_screen(), Screen::RESULTS);

    c.dislike();
    c.like();
    c.tick(3600);
    assert_eq!(c.current_screen(), Screen::RESTAURANTS);

    c.propose("garden");
    c.confirm_proposed();
    assert_eq!(c.current_screen(), Screen::TIME_PICKER);
    assert_eq!(c.booking().restaurant.as_deref(), Some("The Garden"));

    pick(&mut c, &[("Sunday", "19:30"), ("Friday", "18:30"), ("Saturday", "19:00")]);
    let outcome = c.lock_in().expect("lock-in should succeed");
    assert!(!outcome.is_no_overlap());

    assert_eq!(c.current_screen(), Screen::MAP);
    assert_eq!(c.max_unlocked(), Screen::MAP);
    assert_eq!(c.booking().time.as_deref(), Some("Saturday \u{b7} 19:00"));

    c.go_next();
    c.go_next();
    let summary = c.summary();
    assert_eq!(c.current_screen(), Screen::BOOKED);
    assert_eq!(summary.restaurant, "The Garden");
    assert_eq!(summary.time, "Saturday \u{b7} 19:00");
    assert_eq!(summary.partner, "Alex, 29");
    assert_eq!(summary.approved_by, None);
}

#[test]
fn test_screen_stays_in_range_and_under_high_water_mark() {
    let mut c = fresh();
    let moves = [1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];
    for (i, forward) in moves.iter().enumerate() {
        c.tick(i as u64 * 10);
        if *forward == 1 {
            c.go_next();
        } else {
            c.go_back();
        }
        let screen = c.current_screen().number();
        assert!((1..=9).contains(&screen));
        assert!(c.current_screen() <= c.max_unlocked());
    }
}

#[test]
fn test_out_of_range_jumps_are_ignored() {
    let mut c = fresh();
    c.go_to(0);
    c.go_to(10);
    assert_eq!(c.current_screen(), Screen::PROFILE);
}

#[test]
fn test_dislike_n_times() {
    let mut c = fresh();
    let k = c.config().candidates.len();
    for _ in 0..5 {
        c.dislike();
    }
    assert_eq!(c.active_index(), 5 % k);
}

#[test]
fn test_liked_match_is_retained() {
    let mut c = fresh();
    c.go_to(4);
    c.like();
    for _ in 0..3 {
        c.dislike();
    }
    c.tick(10_000);
    assert_eq!(c.liked_match().map(|m| m.name.as_str()), Some("Marcus, 31"));
    assert_eq!(c.summary().partner, "Marcus, 31");
}

#[test]
fn test_full_overlap_picks_first_in_grid_order() {
    let mut c = at_time_picker();
    pick(&mut c, &[("Sunday", "19:30"), ("Saturday", "19:00"), ("Friday", "20:30")]);
    assert_eq!(c.matched_slot(), Some(SlotKey::new("Friday", "20:30")));
}

#[test]
fn test_no_overlap_lock_in_is_approved() {
    let mut c = at_time_picker();
    pick(&mut c, &[("Friday", "18:30"), ("Saturday", "21:00"), ("Sunday", "17:30")]);
    assert_eq!(c.matched_slot(), None);

    let outcome = c.lock_in().expect("lock-in should succeed");
    assert!(outcome.is_no_overlap());
    assert!(c.no_overlap());
    assert_eq!(c.booking().time.as_deref(), Some("Friday \u{b7} 18:30"));
    assert_eq!(c.current_screen(), Screen::MAP);
    assert_eq!(c.summary().approved_by.as_deref(), Some("Marcus, 31"));
}

#[test]
fn test_lock_in_with_two_slots_is_noop() {
    let mut c = at_time_picker();
    pick(&mut c, &[("Friday", "20:30"), ("Saturday", "19:00")]);
    let before = c.view();

    assert!(c.lock_in().is_none());
    assert_eq!(c.view(), before);
    assert_eq!(c.booking().time, None);
    assert!(!c.no_overlap());
}

#[test]
fn test_lock_in_needs_agreed_restaurant() {
    let mut c = fresh();
    pick(&mut c, &[("Friday", "20:30"), ("Saturday", "19:00"), ("Sunday", "19:30")]);
    assert!(c.lock_in().is_none());
    assert_eq!(c.current_screen(), Screen::PROFILE);
}

#[test]
fn test_confirm_proposed_without_proposal_is_noop() {
    let mut c = fresh();
    c.go_to(5);
    let before = c.view();
    c.confirm_proposed();
    assert_eq!(c.view(), before);
    assert_eq!(c.current_screen(), Screen::RESTAURANTS);
}

#[test]
fn test_confirm_primary_pins_effective_restaurant() {
    let mut c = fresh();
    c.go_to(5);
    c.confirm_primary();
    assert_eq!(c.booking().restaurant.as_deref(), Some("Bella Vita"));
    assert_eq!(c.current_screen(), Screen::TIME_PICKER);
    assert_eq!(c.agreement(), Agreement::PrimaryConfirmed);

    c.propose("sakura");
    assert_eq!(c.effective_restaurant().map(|r| r.name.as_str()), Some("Bella Vita"));
}

#[test]
fn test_reconfirm_after_going_back_returns_to_time_picker() {
    let mut c = at_time_picker();
    c.go_back();
    assert_eq!(c.current_screen(), Screen::RESTAURANTS);

    c.confirm_primary();
    assert_eq!(c.current_screen(), Screen::TIME_PICKER);
    assert_eq!(c.agreement(), Agreement::PrimaryConfirmed);
    assert_eq!(c.booking().restaurant.as_deref(), Some("Bella Vita"));
}

#[test]
fn test_reconfirm_proposal_keeps_agreed_restaurant() {
    let mut c = fresh();
    c.go_to(5);
    c.propose("sakura");
    c.confirm_proposed();
    c.go_back();

    c.propose("garden");
    c.confirm_primary();
    assert_eq!(c.current_screen(), Screen::RESTAURANTS);

    c.confirm_proposed();
    assert_eq!(c.current_screen(), Screen::TIME_PICKER);
    assert_eq!(c.agreement(), Agreement::ProposedConfirmed);
    assert_eq!(c.booking().restaurant.as_deref(), Some("Sakura House"));
    assert_eq!(c.effective_restaurant().map(|r| r.id.as_str()), Some("sakura"));
}

#[test]
fn test_like_commit_discards_earlier_restaurant_choice() {
    let mut c = fresh();
    c.go_to(4);
    c.like();
    c.propose("garden");
    assert_eq!(c.proposed_restaurant().map(|r| r.id.as_str()), Some("garden"));

    c.tick(550);
    assert_eq!(c.current_screen(), Screen::RESTAURANTS);
    assert_eq!(c.proposed_restaurant(), None);
    assert_eq!(c.agreement(), Agreement::None);
    assert_eq!(c.effective_restaurant().map(|r| r.id.as_str()), Some("bella"));
}

#[test]
fn test_unconfirmed_proposal_does_not_change_effective() {
    let mut c = fresh();
    c.go_to(5);
    c.propose("sakura");
    assert_eq!(c.effective_restaurant().map(|r| r.id.as_str()), Some("bella"));
    assert_eq!(c.proposed_restaurant().map(|r| r.id.as_str()), Some("sakura"));
}

#[test]
fn test_tag_toggle_twice_restores() {
    let mut c = fresh();
    let before = c.profile().tags().clone();
    c.toggle_tag("Outdoors");
    c.toggle_tag("Outdoors");
    assert_eq!(c.profile().tags(), &before);
}

#[test]
fn test_direct_jump_shows_placeholders() {
    let mut c = fresh();
    c.go_to(9);
    let summary = c.summary();
    assert_eq!(summary.restaurant, "Bella Vita");
    assert_eq!(summary.time, "Saturday \u{b7} 20:30");
    assert_eq!(summary.partner, "your match");
}
