use super::config::Candidate;

/// Results carousel: which candidate is showing, the full-profile overlay,
/// and the one candidate liked this session.
#[derive(Debug, Clone, Default)]
pub struct MatchBrowser {
    active: usize,
    overlay_open: bool,
    liked: Option<Candidate>,
}

impl MatchBrowser {
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active<'a>(&self, pool: &'a [Candidate]) -> Option<&'a Candidate> {
        pool.get(self.active)
    }

    /// Pass on the current candidate. Wraps; no-op on an empty pool.
    pub fn dislike(&mut self, pool_len: usize) {
        self.advance(pool_len);
    }

    /// Same step as a dislike, driven by the carousel timer.
    pub fn rotate(&mut self, pool_len: usize) {
        self.advance(pool_len);
    }

    fn advance(&mut self, pool_len: usize) {
        if pool_len == 0 {
            return;
        }
        self.active = (self.active + 1) % pool_len;
    }

    /// Commit to the showing candidate. Only the first like counts; returns
    /// the newly liked candidate, or `None` if nothing changed.
    pub fn like(&mut self, pool: &[Candidate]) -> Option<&Candidate> {
        if self.liked.is_some() {
            return None;
        }
        let candidate = pool.get(self.active)?.clone();
        self.liked = Some(candidate);
        self.liked.as_ref()
    }

    pub fn liked(&self) -> Option<&Candidate> {
        self.liked.as_ref()
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::config::DemoConfig;

    #[test]
    fn test_dislike_wraps_modulo_pool() {
        let pool = DemoConfig::default().candidates;
        let mut browser = MatchBrowser::default();
        for n in 1..=7 {
            browser.dislike(pool.len());
            assert_eq!(browser.active_index(), n % pool.len());
        }
    }

    #[test]
    fn test_empty_pool_is_noop() {
        let mut browser = MatchBrowser::default();
        browser.dislike(0);
        assert_eq!(browser.active_index(), 0);
        assert!(browser.like(&[]).is_none());
        assert!(browser.liked().is_none());
    }

    #[test]
    fn test_first_like_sticks() {
        let pool = DemoConfig::default().candidates;
        let mut browser = MatchBrowser::default();
        browser.dislike(pool.len());
        assert_eq!(browser.like(&pool).map(|c| c.id.clone()), Some("alex".to_string()));

        browser.dislike(pool.len());
        assert!(browser.like(&pool).is_none());
        assert_eq!(browser.liked().map(|c| c.id.as_str()), Some("alex"));
    }

    #[test]
    fn test_overlay_does_not_move_carousel() {
        let mut browser = MatchBrowser::default();
        browser.dislike(2);
        browser.open_overlay();
        assert!(browser.overlay_open());
        browser.close_overlay();
        assert!(!browser.overlay_open());
        assert_eq!(browser.active_index(), 1);
    }
}
