use serde::Serialize;
use tracing::{debug, info};

use super::booking::{self, Booking, BookingSummary, Fallbacks};
use super::config::{Candidate, DemoConfig, Restaurant};
use super::matches::MatchBrowser;
use super::profile::{LookingFor, ProfileStore};
use super::restaurant::{Agreement, RestaurantNegotiation};
use super::schedule::{LockOutcome, SlotKey, TimeNegotiation};
use super::sequencer::{Screen, ScreenSequencer};
use super::timers::{Millis, Scheduler, TaskId, TaskKind};

/// One run of the "finding your match" animation.
#[derive(Debug, Clone, Copy)]
struct MatchingRun {
    started_at: Millis,
    complete: TaskId,
    advance: Option<TaskId>,
}

/// State and transitions of the nine-screen product walkthrough.
///
/// The controller never reads a clock. [`tick`](Self::tick) moves its notion
/// of "now" forward and fires whatever timers are due; actions schedule
/// relative to the last tick. Invalid actions are silent no-ops.
///
/// Actions are not gated by screen: the rendering layer only offers each
/// action on its own screen, the same way the step indicator gates jumps.
#[derive(Debug)]
pub struct DemoController {
    config: DemoConfig,
    now: Millis,
    sequencer: ScreenSequencer,
    profile: ProfileStore,
    browser: MatchBrowser,
    restaurants: RestaurantNegotiation,
    times: TimeNegotiation,
    booking: Booking,
    no_overlap: bool,
    progress: u8,
    scheduler: Scheduler,
    matching: Option<MatchingRun>,
    rotation: Option<TaskId>,
    pending_like: Option<TaskId>,
}

impl DemoController {
    pub fn new(config: DemoConfig, now: Millis) -> Self {
        let profile = ProfileStore::with_tags(config.default_tags.iter().cloned());
        let restaurants = RestaurantNegotiation::new(config.default_restaurant_id.clone());
        Self {
            config,
            now,
            sequencer: ScreenSequencer::default(),
            profile,
            browser: MatchBrowser::default(),
            restaurants,
            times: TimeNegotiation::default(),
            booking: Booking::default(),
            no_overlap: false,
            progress: 0,
            scheduler: Scheduler::new(),
            matching: None,
            rotation: None,
            pending_like: None,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    // -- Clock --

    /// Advance the clock to `now` and fire every due task in order.
    /// A clock that goes backwards is ignored.
    pub fn tick(&mut self, now: Millis) {
        self.now = self.now.max(now);
        while let Some((id, kind, due)) = self.scheduler.pop_due(self.now) {
            self.fire(id, kind, due);
        }
        self.refresh_progress();
    }

    /// Whether a tick at `now` would change anything. Lets the page skip
    /// re-rendering on idle frames.
    pub fn needs_tick(&self, now: Millis) -> bool {
        let animating = self.matching.is_some_and(|run| run.advance.is_none());
        animating || self.scheduler.next_due().is_some_and(|due| due <= now)
    }

    /// Cancel every pending timer, including a like still waiting to commit.
    /// Call when the walkthrough unmounts.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        self.matching = None;
        self.rotation = None;
        self.pending_like = None;
        debug!("Demo walkthrough torn down");
    }

    fn fire(&mut self, id: TaskId, kind: TaskKind, due: Millis) {
        match kind {
            TaskKind::MatchingComplete => {
                let delay = self.config.timings.auto_advance_ms;
                if let Some(run) = self.matching.as_mut().filter(|run| run.complete == id) {
                    self.progress = 100;
                    run.advance = Some(self.scheduler.schedule(due + delay, TaskKind::AutoAdvance));
                }
            }
            TaskKind::AutoAdvance => {
                if self.sequencer.current() == Screen::MATCHING {
                    debug!("Matching finished, showing results");
                    self.navigate(|seq| seq.go_to(Screen::RESULTS.number()));
                }
            }
            TaskKind::AutoRotate => {
                if self.rotation == Some(id) && self.rotation_wanted() {
                    self.browser.rotate(self.config.candidates.len());
                }
            }
            TaskKind::CommitLike => {
                if self.pending_like == Some(id) {
                    self.pending_like = None;
                    self.commit_like();
                }
            }
        }
    }

    // -- Screen sequencer --

    pub fn current_screen(&self) -> Screen {
        self.sequencer.current()
    }

    pub fn max_unlocked(&self) -> Screen {
        self.sequencer.max_unlocked()
    }

    /// Gate for the step indicator; `go_to` itself does not check this.
    pub fn can_jump_to(&self, screen: Screen) -> bool {
        self.sequencer.can_jump_to(screen)
    }

    pub fn go_to(&mut self, n: u8) {
        self.navigate(|seq| seq.go_to(n));
    }

    pub fn go_next(&mut self) {
        self.navigate(ScreenSequencer::go_next);
    }

    pub fn go_back(&mut self) {
        self.navigate(ScreenSequencer::go_back);
    }

    fn navigate(&mut self, step: impl FnOnce(&mut ScreenSequencer) -> Option<Screen>) {
        self.browser.close_overlay();
        if let Some(left) = step(&mut self.sequencer) {
            self.on_screen_change(left);
        }
        self.sync_rotation();
    }

    fn on_screen_change(&mut self, left: Screen) {
        let entered = self.sequencer.current();
        debug!("Screen {} -> {}", left.number(), entered.number());

        if left == Screen::MATCHING {
            self.stop_matching();
        }
        if entered == Screen::MATCHING {
            self.start_matching();
        }
    }

    /// Matching progress, 0-100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    fn start_matching(&mut self) {
        let complete = self.scheduler.schedule(
            self.now + self.config.timings.matching_ms,
            TaskKind::MatchingComplete,
        );
        self.progress = 0;
        self.matching = Some(MatchingRun {
            started_at: self.now,
            complete,
            advance: None,
        });
    }

    fn stop_matching(&mut self) {
        if let Some(run) = self.matching.take() {
            self.scheduler.cancel(run.complete);
            if let Some(advance) = run.advance {
                self.scheduler.cancel(advance);
            }
        }
    }

    fn refresh_progress(&mut self) {
        let Some(run) = self.matching else {
            return;
        };
        if run.advance.is_some() {
            self.progress = 100;
            return;
        }
        let duration = self.config.timings.matching_ms.max(1);
        let elapsed = self.now.saturating_sub(run.started_at);
        let pct = (elapsed * 100 + duration / 2) / duration;
        self.progress = pct.min(100) as u8;
    }

    // -- Profile & preferences --

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.profile.toggle_tag(tag);
    }

    pub fn set_looking_for(&mut self, value: LookingFor) {
        self.profile.set_looking_for(value);
    }

    // -- Match browser --

    pub fn active_index(&self) -> usize {
        self.browser.active_index()
    }

    pub fn active_candidate(&self) -> Option<&Candidate> {
        self.browser.active(&self.config.candidates)
    }

    pub fn liked_match(&self) -> Option<&Candidate> {
        self.browser.liked()
    }

    pub fn overlay_open(&self) -> bool {
        self.browser.overlay_open()
    }

    pub fn dislike(&mut self) {
        self.browser.dislike(self.config.candidates.len());
    }

    pub fn view_profile(&mut self) {
        self.browser.open_overlay();
        self.sync_rotation();
    }

    pub fn close_profile(&mut self) {
        self.browser.close_overlay();
        self.sync_rotation();
    }

    /// Commit to the showing candidate. The restaurant reset and the move to
    /// screen 5 follow after a short delay; leaving the screen meanwhile does
    /// not cancel them, only [`teardown`](Self::teardown) does.
    pub fn like(&mut self) {
        let Some(liked) = self.browser.like(&self.config.candidates) else {
            return;
        };
        info!("Liked {}", liked.id);
        self.sync_rotation();
        let due = self.now + self.config.timings.like_commit_ms;
        self.pending_like = Some(self.scheduler.schedule(due, TaskKind::CommitLike));
    }

    pub fn like_pending(&self) -> bool {
        self.pending_like.is_some()
    }

    fn commit_like(&mut self) {
        self.restaurants.reset(&self.config.default_restaurant_id);
        self.navigate(|seq| seq.go_to(Screen::RESTAURANTS.number()));
        self.sequencer.unlock(Screen::RESTAURANTS);
    }

    fn rotation_wanted(&self) -> bool {
        self.sequencer.current() == Screen::RESULTS
            && !self.browser.overlay_open()
            && self.browser.liked().is_none()
    }

    fn sync_rotation(&mut self) {
        match (self.rotation_wanted(), self.rotation) {
            (true, None) => {
                let period = self.config.timings.rotate_ms;
                self.rotation = Some(self.scheduler.schedule_every(
                    self.now + period,
                    period,
                    TaskKind::AutoRotate,
                ));
            }
            (false, Some(id)) => {
                self.scheduler.cancel(id);
                self.rotation = None;
            }
            _ => {}
        }
    }

    pub fn auto_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    // -- Restaurant negotiation --

    pub fn primary_restaurant(&self) -> Option<&Restaurant> {
        self.config.restaurant(self.restaurants.primary_id())
    }

    pub fn proposed_restaurant(&self) -> Option<&Restaurant> {
        self.restaurants
            .proposed_id()
            .and_then(|id| self.config.restaurant(id))
    }

    pub fn effective_restaurant(&self) -> Option<&Restaurant> {
        self.restaurants.effective(&self.config.restaurants)
    }

    pub fn agreement(&self) -> Agreement {
        self.restaurants.agreement()
    }

    pub fn propose(&mut self, restaurant_id: &str) {
        self.restaurants.propose(restaurant_id, &self.config.restaurants);
    }

    pub fn confirm_primary(&mut self) {
        let chosen = self.restaurants.confirm_primary(&self.config.restaurants);
        self.settle_restaurant(chosen.map(|r| r.name.clone()));
    }

    /// No-op until something has been proposed.
    pub fn confirm_proposed(&mut self) {
        let chosen = self.restaurants.confirm_proposed(&self.config.restaurants);
        self.settle_restaurant(chosen.map(|r| r.name.clone()));
    }

    fn settle_restaurant(&mut self, name: Option<String>) {
        let Some(name) = name else {
            return;
        };
        info!("Restaurant agreed: {}", name);
        self.booking.restaurant = Some(name);
        self.navigate(|seq| seq.go_to(Screen::TIME_PICKER.number()));
    }

    // -- Time negotiation --

    pub fn your_slots(&self) -> &[SlotKey] {
        self.times.yours()
    }

    pub fn their_slots(&self) -> &[SlotKey] {
        &self.config.their_slots
    }

    pub fn matched_slot(&self) -> Option<SlotKey> {
        self.times.matched_slot(&self.config)
    }

    pub fn toggle_your_slot(&mut self, key: SlotKey) {
        self.times.toggle(key, &self.config);
    }

    /// Needs three picks and an agreed restaurant. Returns how the time was
    /// resolved, or `None` if nothing happened.
    pub fn lock_in(&mut self) -> Option<LockOutcome> {
        self.booking.restaurant.as_ref()?;
        let outcome = self.times.resolve(&self.config)?;

        self.no_overlap = outcome.is_no_overlap();
        self.booking.time = Some(outcome.slot().booking_label());
        info!(
            "Time locked in: {} (overlap: {})",
            outcome.slot(),
            !self.no_overlap
        );
        self.navigate(|seq| seq.go_to(Screen::MAP.number()));
        self.sequencer.unlock(Screen::MAP);
        Some(outcome)
    }

    pub fn no_overlap(&self) -> bool {
        self.no_overlap
    }

    // -- Booking summary --

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    pub fn summary(&self) -> BookingSummary {
        let matched = self.matched_slot().map(|slot| slot.booking_label());
        let liked = self.browser.liked();
        booking::project(
            &self.booking,
            self.no_overlap,
            Fallbacks {
                effective_restaurant: self.effective_restaurant().map(|r| r.name.as_str()),
                matched_slot_label: matched.as_deref(),
                partner: liked.map(|c| c.name.as_str()),
                partner_image: liked.map(|c| c.image.as_str()),
            },
        )
    }

    /// Serializable snapshot of everything the page renders.
    pub fn view(&self) -> DemoView {
        DemoView {
            screen: self.current_screen(),
            max_unlocked: self.max_unlocked(),
            progress: self.progress,
            tags: self.profile.tags().iter().cloned().collect(),
            looking_for: self.profile.looking_for(),
            active_candidate: self.active_candidate().map(|c| c.id.clone()),
            liked_match: self.liked_match().map(|c| c.id.clone()),
            overlay_open: self.overlay_open(),
            proposed_restaurant: self.restaurants.proposed_id().map(str::to_string),
            effective_restaurant: self.effective_restaurant().map(|r| r.id.clone()),
            agreement: self.agreement(),
            your_slots: self.your_slots().iter().map(SlotKey::label).collect(),
            matched_slot: self.matched_slot().map(|s| s.label()),
            no_overlap: self.no_overlap,
            summary: self.summary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoView {
    pub screen: Screen,
    pub max_unlocked: Screen,
    pub progress: u8,
    pub tags: Vec<String>,
    pub looking_for: LookingFor,
    pub active_candidate: Option<String>,
    pub liked_match: Option<String>,
    pub overlay_open: bool,
    pub proposed_restaurant: Option<String>,
    pub effective_restaurant: Option<String>,
    pub agreement: Agreement,
    pub your_slots: Vec<String>,
    pub matched_slot: Option<String>,
    pub no_overlap: bool,
    pub summary: BookingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DemoController {
        DemoController::new(DemoConfig::default(), 0)
    }

    #[test]
    fn test_matching_progress_interpolates_then_advances() {
        let mut c = controller();
        c.go_to(3);
        assert_eq!(c.progress(), 0);

        c.tick(1300);
        assert_eq!(c.progress(), 50);
        assert!(c.needs_tick(1316));

        c.tick(2600);
        assert_eq!(c.progress(), 100);
        assert_eq!(c.current_screen(), Screen::MATCHING);

        c.tick(3049);
        assert_eq!(c.current_screen(), Screen::MATCHING);
        c.tick(3050);
        assert_eq!(c.current_screen(), Screen::RESULTS);
        assert!(c.max_unlocked() >= Screen::RESULTS);
    }

    #[test]
    fn test_leaving_matching_cancels_timers() {
        let mut c = controller();
        c.go_to(3);
        c.tick(1000);
        c.go_back();
        c.tick(10_000);

        assert_eq!(c.current_screen(), Screen::PREFERENCES);
        assert_eq!(c.scheduler.pending(), 0);
        assert!(!c.needs_tick(20_000));
    }

    #[test]
    fn test_reentering_matching_restarts_from_zero() {
        let mut c = controller();
        c.go_to(3);
        c.tick(2000);
        c.go_back();
        c.go_next();
        assert_eq!(c.progress(), 0);
        c.tick(2000 + 2600 + 450);
        assert_eq!(c.current_screen(), Screen::RESULTS);
    }

    #[test]
    fn test_results_auto_rotate_pauses_for_overlay() {
        let mut c = controller();
        c.go_to(4);
        assert!(c.auto_rotating());

        c.tick(3600);
        assert_eq!(c.active_index(), 1);
        c.tick(7200);
        assert_eq!(c.active_index(), 0);

        c.view_profile();
        assert!(!c.auto_rotating());
        c.tick(20_000);
        assert_eq!(c.active_index(), 0);

        c.close_profile();
        c.tick(23_599);
        assert_eq!(c.active_index(), 0);
        c.tick(23_600);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_rotation_stops_when_leaving_results() {
        let mut c = controller();
        c.go_to(4);
        c.go_next();
        c.tick(50_000);
        assert_eq!(c.active_index(), 0);
        assert!(!c.auto_rotating());
    }

    #[test]
    fn test_like_commits_after_delay() {
        let mut c = controller();
        c.go_to(4);
        c.tick(100);
        c.like();
        assert!(!c.auto_rotating());
        assert_eq!(c.liked_match().map(|m| m.id.as_str()), Some("marcus"));

        c.tick(649);
        assert_eq!(c.current_screen(), Screen::RESULTS);
        c.tick(650);
        assert_eq!(c.current_screen(), Screen::RESTAURANTS);
        assert_eq!(c.max_unlocked(), Screen::RESTAURANTS);
        assert_eq!(c.agreement(), Agreement::None);
        assert_eq!(c.effective_restaurant().map(|r| r.id.as_str()), Some("bella"));
    }

    #[test]
    fn test_like_from_overlay() {
        let mut c = controller();
        c.go_to(4);
        c.dislike();
        c.view_profile();
        c.like();
        assert_eq!(c.liked_match().map(|m| m.id.as_str()), Some("alex"));
        c.tick(550);
        assert_eq!(c.current_screen(), Screen::RESTAURANTS);
        assert!(!c.overlay_open());
    }

    #[test]
    fn test_pending_like_survives_navigation() {
        let mut c = controller();
        c.go_to(4);
        c.like();
        c.go_to(2);
        c.tick(550);
        assert_eq!(c.current_screen(), Screen::RESTAURANTS);
    }

    #[test]
    fn test_teardown_cancels_pending_like() {
        let mut c = controller();
        c.go_to(4);
        c.like();
        assert!(c.like_pending());
        c.teardown();
        c.tick(10_000);
        assert_eq!(c.current_screen(), Screen::RESULTS);
        assert!(!c.like_pending());
    }

    #[test]
    fn test_second_like_is_ignored() {
        let mut c = controller();
        c.go_to(4);
        c.like();
        c.dislike();
        c.like();
        c.tick(550);
        assert_eq!(c.liked_match().map(|m| m.id.as_str()), Some("marcus"));
        assert_eq!(c.scheduler.pending(), 0);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut c = controller();
        c.tick(5000);
        c.tick(10);
        assert_eq!(c.now(), 5000);
    }

    #[test]
    fn test_view_snapshot_serializes() {
        let c = controller();
        let json = serde_json::to_value(c.view()).unwrap();
        assert_eq!(json["screen"], 1);
        assert_eq!(json["looking_for"], "Long-term");
        assert_eq!(json["agreement"], "none");
        assert_eq!(json["summary"]["time"], "Saturday \u{b7} 20:30");
        assert_eq!(json["tags"], serde_json::json!(["Foodie", "Traveler"]));
    }
}
