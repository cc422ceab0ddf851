use super::geometry::{intersection_ratio, Rect, RootMargin};

/// Smallest visible fraction that reveals a candidate.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The viewport's bottom edge is pulled up by this many pixels before testing.
pub const REVEAL_BOTTOM_MARGIN: f64 = -50.0;

// Ratios come out of float math; 0.1 reported as 0.09999999999 still crosses.
const RATIO_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPolicy {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: RootMargin::bottom(REVEAL_BOTTOM_MARGIN),
        }
    }
}

impl RevealPolicy {
    pub fn crosses(&self, ratio: f64) -> bool {
        ratio + RATIO_TOLERANCE >= self.threshold
    }
}

/// One observation delivered by the host watcher.
#[derive(Debug, Clone)]
pub struct IntersectionEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug)]
struct RevealCandidate<T> {
    target: T,
    state: RevealState,
}

/// Registration of every candidate found under one container.
///
/// Candidates only ever move from `Hidden` to `Revealed`. Once stopped the
/// session ignores further observations.
#[derive(Debug)]
pub struct RevealSession<T> {
    candidates: Vec<RevealCandidate<T>>,
    policy: RevealPolicy,
    active: bool,
}

impl<T: PartialEq> RevealSession<T> {
    pub fn new(targets: impl IntoIterator<Item = T>, policy: RevealPolicy) -> Self {
        let mut candidates: Vec<RevealCandidate<T>> = Vec::new();
        for target in targets {
            if candidates.iter().any(|c| c.target == target) {
                continue;
            }
            candidates.push(RevealCandidate {
                target,
                state: RevealState::Hidden,
            });
        }
        Self {
            candidates,
            policy,
            active: true,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn targets(&self) -> impl Iterator<Item = &T> {
        self.candidates.iter().map(|c| &c.target)
    }

    #[cfg(test)]
    pub fn state(&self, target: &T) -> Option<RevealState> {
        self.candidates
            .iter()
            .find(|c| c.target == *target)
            .map(|c| c.state)
    }

    pub fn revealed_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.state == RevealState::Revealed)
            .count()
    }

    /// Applies one batch of observations, calling `on_reveal` for every
    /// candidate that becomes visible in this batch. Returns how many did.
    pub fn apply_entries<I, F>(&mut self, entries: I, mut on_reveal: F) -> usize
    where
        I: IntoIterator<Item = IntersectionEntry<T>>,
        F: FnMut(&T),
    {
        if !self.active {
            return 0;
        }
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting || !self.policy.crosses(entry.ratio) {
                continue;
            }
            if self.reveal(&entry.target, &mut on_reveal) {
                revealed += 1;
            }
        }
        revealed
    }

    /// Measures every still-hidden candidate against `viewport` and reveals the
    /// ones already past the threshold. Candidates that can't be measured are
    /// left to the watcher.
    pub fn sweep<M, F>(&mut self, viewport: &Rect, measure: M, on_reveal: F) -> usize
    where
        M: Fn(&T) -> Option<Rect>,
        F: FnMut(&T),
    {
        if !self.active {
            return 0;
        }
        let margin = self.policy.root_margin;
        let policy = self.policy;
        let mut on_reveal = on_reveal;
        let mut revealed = 0;
        for candidate in self.candidates.iter_mut() {
            if candidate.state == RevealState::Revealed {
                continue;
            }
            let Some(bounds) = measure(&candidate.target) else {
                continue;
            };
            let visible = intersection_ratio(&bounds, viewport, &margin)
                .map_or(false, |ratio| policy.crosses(ratio));
            if visible {
                candidate.state = RevealState::Revealed;
                on_reveal(&candidate.target);
                revealed += 1;
            }
        }
        revealed
    }

    /// Reveals everything still hidden, used when no watcher can be created.
    pub fn reveal_all<F: FnMut(&T)>(&mut self, mut on_reveal: F) -> usize {
        let mut revealed = 0;
        for candidate in self.candidates.iter_mut() {
            if candidate.state == RevealState::Hidden {
                candidate.state = RevealState::Revealed;
                on_reveal(&candidate.target);
                revealed += 1;
            }
        }
        revealed
    }

    /// Marks the session as released. Returns false if it already was.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    fn reveal<F: FnMut(&T)>(&mut self, target: &T, on_reveal: &mut F) -> bool {
        match self.candidates.iter_mut().find(|c| c.target == *target) {
            Some(candidate) if candidate.state == RevealState::Hidden => {
                candidate.state = RevealState::Revealed;
                on_reveal(&candidate.target);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: &'static str, ratio: f64) -> IntersectionEntry<&'static str> {
        IntersectionEntry {
            target,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    fn session(targets: &[&'static str]) -> RevealSession<&'static str> {
        RevealSession::new(targets.iter().copied(), RevealPolicy::default())
    }

    #[test]
    fn everything_starts_hidden() {
        let session = session(&["a", "b", "c"]);
        assert_eq!(session.len(), 3);
        for target in ["a", "b", "c"] {
            assert_eq!(session.state(&target), Some(RevealState::Hidden));
        }
        assert_eq!(session.revealed_count(), 0);
    }

    #[test]
    fn duplicate_targets_are_registered_once() {
        let session = session(&["a", "a", "b"]);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn exactly_ten_percent_reveals() {
        let mut session = session(&["a"]);
        let mut shown = Vec::new();
        session.apply_entries([entry("a", 0.1)], |t| shown.push(*t));
        assert_eq!(shown, vec!["a"]);
        assert_eq!(session.state(&"a"), Some(RevealState::Revealed));
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut session = session(&["a"]);
        let revealed = session.apply_entries([entry("a", 0.099)], |_| {});
        assert_eq!(revealed, 0);
        assert_eq!(session.state(&"a"), Some(RevealState::Hidden));
    }

    #[test]
    fn float_noise_at_the_threshold_still_reveals() {
        let mut session = session(&["a"]);
        let revealed = session.apply_entries([entry("a", 0.1 - 1e-12)], |_| {});
        assert_eq!(revealed, 1);
    }

    #[test]
    fn non_intersecting_entry_never_reveals() {
        let mut session = session(&["a"]);
        let revealed = session.apply_entries(
            [IntersectionEntry {
                target: "a",
                is_intersecting: false,
                ratio: 0.5,
            }],
            |_| {},
        );
        assert_eq!(revealed, 0);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut session = session(&["a"]);
        let mut calls = 0;
        session.apply_entries([entry("a", 0.8)], |_| calls += 1);
        session.apply_entries([entry("a", 0.0)], |_| calls += 1);
        session.apply_entries([entry("a", 1.0)], |_| calls += 1);
        assert_eq!(calls, 1);
        assert_eq!(session.state(&"a"), Some(RevealState::Revealed));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut session = session(&["a"]);
        assert_eq!(session.apply_entries([entry("zzz", 1.0)], |_| {}), 0);
        assert_eq!(session.state(&"zzz"), None);
    }

    #[test]
    fn stopped_session_ignores_entries_and_keeps_revealed() {
        let mut session = session(&["a", "b"]);
        session.apply_entries([entry("a", 1.0)], |_| {});
        assert!(session.stop());
        assert!(!session.stop());
        assert_eq!(session.apply_entries([entry("b", 1.0)], |_| {}), 0);
        assert_eq!(session.state(&"a"), Some(RevealState::Revealed));
        assert_eq!(session.state(&"b"), Some(RevealState::Hidden));
    }

    #[test]
    fn sweep_reveals_only_what_is_on_screen() {
        let mut session = session(&["top", "fold", "below"]);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let measure = |t: &&str| match *t {
            "top" => Some(Rect::new(0.0, 100.0, 1000.0, 200.0)),
            "fold" => Some(Rect::new(0.0, 770.0, 1000.0, 200.0)),
            _ => Some(Rect::new(0.0, 1600.0, 1000.0, 200.0)),
        };
        let mut shown = Vec::new();
        let revealed = session.sweep(&viewport, measure, |t| shown.push(*t));
        assert_eq!(revealed, 1);
        assert_eq!(shown, vec!["top"]);
        assert_eq!(session.state(&"fold"), Some(RevealState::Hidden));
        assert_eq!(session.state(&"below"), Some(RevealState::Hidden));
    }

    #[test]
    fn reveal_all_only_touches_hidden_candidates() {
        let mut session = session(&["a", "b", "c"]);
        session.apply_entries([entry("b", 1.0)], |_| {});
        let mut shown = Vec::new();
        assert_eq!(session.reveal_all(|t| shown.push(*t)), 2);
        assert_eq!(shown, vec!["a", "c"]);
        assert_eq!(session.revealed_count(), 3);
    }
}
