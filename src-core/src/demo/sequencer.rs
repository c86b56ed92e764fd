use serde::{Deserialize, Serialize};

/// One step of the nine-screen walkthrough. Always within `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Screen(u8);

impl Screen {
    pub const PROFILE: Screen = Screen(1);
    pub const PREFERENCES: Screen = Screen(2);
    pub const MATCHING: Screen = Screen(3);
    pub const RESULTS: Screen = Screen(4);
    pub const RESTAURANTS: Screen = Screen(5);
    pub const TIME_PICKER: Screen = Screen(6);
    pub const MAP: Screen = Screen(7);
    pub const SYNCED: Screen = Screen(8);
    pub const BOOKED: Screen = Screen(9);

    pub const FIRST: Screen = Screen::PROFILE;
    pub const LAST: Screen = Screen::BOOKED;

    pub fn new(n: u8) -> Option<Screen> {
        (Self::FIRST.0..=Self::LAST.0).contains(&n).then_some(Screen(n))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Screen> {
        (Self::FIRST.0..=Self::LAST.0).map(Screen)
    }

    pub fn next(self) -> Option<Screen> {
        Screen::new(self.0 + 1)
    }

    pub fn prev(self) -> Option<Screen> {
        Screen::new(self.0.saturating_sub(1))
    }

    pub fn title(self) -> &'static str {
        match self.0 {
            1 => "Your TwoTable profile",
            2 => "Dial in your night",
            3 => "Finding your match",
            4 => "Tap who you vibe with",
            5 => "We pick the restaurants",
            6 => "Pick a time together",
            7 => "See it on the map",
            8 => "Matched and synced",
            _ => "Your table is locked",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self.0 {
            1 => "A real person, not just a swipe.",
            2 => "We'll tune both the match and the table.",
            3 => "People, then places, in one flow.",
            4 => "Love = match. X = pass.",
            5 => "All within 25-45 minutes of you both.",
            6 => "You choose three, we find the overlap.",
            7 => "How far it is for both of you.",
            8 => "Same person, same time, same table.",
            _ => "Restaurant, time and details in one card.",
        }
    }
}

impl TryFrom<u8> for Screen {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Screen::new(n).ok_or_else(|| format!("screen {} is outside 1..=9", n))
    }
}

impl From<Screen> for u8 {
    fn from(screen: Screen) -> u8 {
        screen.0
    }
}

/// Current screen plus the high-water mark of screens reached.
///
/// The sequencer trusts its caller: `go_to` jumps anywhere in range. Refusing
/// jumps past `max_unlocked` is the step indicator's job (see [`Self::can_jump_to`]).
/// Every move raises the mark to the screen reached, so `current <= max_unlocked`
/// holds at all times and the mark never goes down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSequencer {
    current: Screen,
    max_unlocked: Screen,
}

impl Default for ScreenSequencer {
    fn default() -> Self {
        Self {
            current: Screen::FIRST,
            max_unlocked: Screen::FIRST,
        }
    }
}

impl ScreenSequencer {
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn max_unlocked(&self) -> Screen {
        self.max_unlocked
    }

    /// Whether the step indicator may offer a direct jump to `screen`.
    pub fn can_jump_to(&self, screen: Screen) -> bool {
        screen <= self.max_unlocked
    }

    /// Out-of-range numbers are ignored. Returns the screen left, if it changed.
    pub fn go_to(&mut self, n: u8) -> Option<Screen> {
        let target = Screen::new(n)?;
        self.move_to(target)
    }

    pub fn go_next(&mut self) -> Option<Screen> {
        let target = self.current.next()?;
        self.move_to(target)
    }

    pub fn go_back(&mut self) -> Option<Screen> {
        let target = self.current.prev()?;
        self.move_to(target)
    }

    pub fn unlock(&mut self, screen: Screen) {
        if screen > self.max_unlocked {
            self.max_unlocked = screen;
        }
    }

    fn move_to(&mut self, target: Screen) -> Option<Screen> {
        let previous = self.current;
        self.current = target;
        self.unlock(target);
        (previous != target).then_some(previous)
    }
}
