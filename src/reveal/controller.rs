use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::geometry::Rect;
use super::session::{IntersectionEntry, RevealPolicy, RevealSession};
#[cfg(test)]
use super::session::RevealState;

/// Callback a host invokes with each batch of intersection observations.
pub type EntrySink<T> = Box<dyn FnMut(Vec<IntersectionEntry<T>>)>;

/// What the controller needs from its environment: finding candidates,
/// watching them, and flipping them visible.
pub trait RevealHost {
    type Container: ?Sized;
    type Target: PartialEq + 'static;
    /// Live registration with the host watcher. Dropping it disconnects the
    /// watcher before its callback goes away.
    type Watch;

    fn find_candidates(&self, container: &Self::Container) -> Vec<Self::Target>;

    /// Starts watching `targets`. Returns `None` when the host has no usable
    /// intersection facility.
    fn watch(
        &self,
        targets: &[&Self::Target],
        policy: &RevealPolicy,
        sink: EntrySink<Self::Target>,
    ) -> Option<Self::Watch>;

    fn release(&self, watch: Self::Watch);

    fn show(&self, target: &Self::Target);

    fn viewport(&self) -> Option<Rect> {
        None
    }

    fn measure(&self, _target: &Self::Target) -> Option<Rect> {
        None
    }
}

pub struct ScrollRevealController<H: RevealHost> {
    host: Rc<H>,
    policy: RevealPolicy,
}

impl<H: RevealHost + 'static> ScrollRevealController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Rc::new(host),
            policy: RevealPolicy::default(),
        }
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Registers every candidate currently under `container` and starts watching them.
    pub fn start(&self, container: &H::Container) -> SessionHandle<H> {
        let targets = self.host.find_candidates(container);
        let session = Rc::new(RefCell::new(RevealSession::new(targets, self.policy)));
        let count = session.borrow().len();
        debug!("Starting reveal session with {} candidates", count);

        let watch = if count == 0 {
            None
        } else {
            let sink = entry_sink(Rc::downgrade(&session), Rc::clone(&self.host));
            let registered = {
                let borrowed = session.borrow();
                let targets: Vec<&H::Target> = borrowed.targets().collect();
                self.host.watch(&targets, &self.policy, sink)
            };
            if registered.is_none() {
                warn!("Intersection watcher unavailable, revealing {} candidates now", count);
                let host = &self.host;
                session.borrow_mut().reveal_all(|target| host.show(target));
            }
            registered
        };

        if let Some(viewport) = self.host.viewport() {
            let host = &self.host;
            let flushed = session.borrow_mut().sweep(
                &viewport,
                |target| host.measure(target),
                |target| host.show(target),
            );
            if flushed > 0 {
                debug!("Revealed {} candidates already in view", flushed);
            }
        }

        SessionHandle {
            host: Rc::clone(&self.host),
            session,
            watch: RefCell::new(watch),
        }
    }

    /// Same as [`SessionHandle::stop`].
    pub fn stop(&self, session: &SessionHandle<H>) {
        session.stop();
    }
}

fn entry_sink<H: RevealHost + 'static>(
    session: Weak<RefCell<RevealSession<H::Target>>>,
    host: Rc<H>,
) -> EntrySink<H::Target> {
    Box::new(move |entries| {
        let Some(session) = session.upgrade() else {
            return;
        };
        let Ok(mut session) = session.try_borrow_mut() else {
            warn!("Reveal session busy, dropping {} entries", entries.len());
            return;
        };
        session.apply_entries(entries, |target| host.show(target));
    })
}

/// A running reveal session. Dropping the handle stops it and releases the
/// host watch.
pub struct SessionHandle<H: RevealHost> {
    host: Rc<H>,
    session: Rc<RefCell<RevealSession<H::Target>>>,
    watch: RefCell<Option<H::Watch>>,
}

impl<H: RevealHost> SessionHandle<H> {
    /// Releases the host watch. Calling it again does nothing.
    pub fn stop(&self) {
        if let Some(watch) = self.watch.borrow_mut().take() {
            self.host.release(watch);
        }
        let mut session = self.session.borrow_mut();
        if session.stop() {
            debug!(
                "Reveal session stopped with {} of {} candidates revealed",
                session.revealed_count(),
                session.len()
            );
        }
    }
}

#[cfg(test)]
impl<H: RevealHost> SessionHandle<H> {
    pub fn is_active(&self) -> bool {
        self.session.borrow().is_active()
    }

    pub fn is_empty(&self) -> bool {
        self.session.borrow().is_empty()
    }

    pub fn state(&self, target: &H::Target) -> Option<RevealState> {
        self.session.borrow().state(target)
    }

    pub fn revealed_count(&self) -> usize {
        self.session.borrow().revealed_count()
    }
}

impl<H: RevealHost> Drop for SessionHandle<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    type Id = &'static str;

    /// In-memory host: a container is a list of ids, entries are pushed by hand.
    #[derive(Default)]
    struct FakeHost {
        unavailable: bool,
        viewport: Option<Rect>,
        bounds: HashMap<Id, Rect>,
        sink: RefCell<Option<EntrySink<Id>>>,
        watched: RefCell<Vec<Id>>,
        shown: RefCell<Vec<Id>>,
        releases: RefCell<usize>,
    }

    impl FakeHost {
        fn deliver(&self, entries: &[(Id, f64)]) {
            let batch = entries
                .iter()
                .map(|&(target, ratio)| IntersectionEntry {
                    target,
                    is_intersecting: ratio > 0.0,
                    ratio,
                })
                .collect();
            if let Some(sink) = self.sink.borrow_mut().as_mut() {
                sink(batch);
            }
        }
    }

    impl RevealHost for FakeHost {
        type Container = [Id];
        type Target = Id;
        type Watch = ();

        fn find_candidates(&self, container: &[Id]) -> Vec<Id> {
            container.to_vec()
        }

        fn watch(&self, targets: &[&Id], _policy: &RevealPolicy, sink: EntrySink<Id>) -> Option<()> {
            if self.unavailable {
                return None;
            }
            self.watched.borrow_mut().extend(targets.iter().map(|t| **t));
            *self.sink.borrow_mut() = Some(sink);
            Some(())
        }

        fn release(&self, _watch: ()) {
            *self.releases.borrow_mut() += 1;
            self.sink.borrow_mut().take();
        }

        fn show(&self, target: &Id) {
            self.shown.borrow_mut().push(*target);
        }

        fn viewport(&self) -> Option<Rect> {
            self.viewport
        }

        fn measure(&self, target: &Id) -> Option<Rect> {
            self.bounds.get(target).copied()
        }
    }

    #[test]
    fn candidates_stay_hidden_until_an_event_arrives() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a", "b"]);
        assert_eq!(*controller.host().watched.borrow(), vec!["a", "b"]);
        assert_eq!(handle.state(&"a"), Some(RevealState::Hidden));
        assert_eq!(handle.state(&"b"), Some(RevealState::Hidden));
        assert!(controller.host().shown.borrow().is_empty());
    }

    #[test]
    fn crossing_reveals_and_scrolling_out_does_not_hide() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a"]);
        controller.host().deliver(&[("a", 0.4)]);
        assert_eq!(handle.state(&"a"), Some(RevealState::Revealed));
        controller.host().deliver(&[("a", 0.0)]);
        controller.host().deliver(&[("a", 0.6)]);
        assert_eq!(handle.state(&"a"), Some(RevealState::Revealed));
        assert_eq!(*controller.host().shown.borrow(), vec!["a"]);
    }

    #[test]
    fn exact_threshold_overlap_reveals() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a"]);
        controller.host().deliver(&[("a", 0.1)]);
        assert_eq!(handle.state(&"a"), Some(RevealState::Revealed));
    }

    #[test]
    fn stop_keeps_revealed_and_is_idempotent() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a", "b"]);
        controller.host().deliver(&[("a", 1.0)]);

        controller.stop(&handle);
        assert!(!handle.is_active());
        assert_eq!(handle.state(&"a"), Some(RevealState::Revealed));
        assert_eq!(*controller.host().releases.borrow(), 1);

        handle.stop();
        assert_eq!(*controller.host().releases.borrow(), 1);
        assert_eq!(handle.state(&"a"), Some(RevealState::Revealed));
    }

    #[test]
    fn stray_entries_after_stop_are_ignored() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a"]);
        // grab the sink before release drops it, as a late browser callback would
        let mut sink = controller.host().sink.borrow_mut().take();
        handle.stop();
        if let Some(sink) = sink.as_mut() {
            sink(vec![IntersectionEntry {
                target: "a",
                is_intersecting: true,
                ratio: 1.0,
            }]);
        }
        assert_eq!(handle.state(&"a"), Some(RevealState::Hidden));
    }

    #[test]
    fn one_of_three_in_view_at_start_is_revealed_on_first_flush() {
        let mut host = FakeHost {
            viewport: Some(Rect::new(0.0, 0.0, 1200.0, 800.0)),
            ..FakeHost::default()
        };
        host.bounds.insert("hero", Rect::new(0.0, 120.0, 1200.0, 300.0));
        host.bounds.insert("cards", Rect::new(0.0, 900.0, 1200.0, 400.0));
        host.bounds.insert("cta", Rect::new(0.0, 1500.0, 1200.0, 300.0));
        let controller = ScrollRevealController::new(host);

        let handle = controller.start(&["hero", "cards", "cta"]);

        assert_eq!(handle.state(&"hero"), Some(RevealState::Revealed));
        assert_eq!(handle.state(&"cards"), Some(RevealState::Hidden));
        assert_eq!(handle.state(&"cta"), Some(RevealState::Hidden));
        assert_eq!(*controller.host().shown.borrow(), vec!["hero"]);
    }

    #[test]
    fn empty_container_gives_a_quiet_valid_session() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&[]);
        assert!(handle.is_empty());
        assert!(handle.is_active());
        assert!(controller.host().watched.borrow().is_empty());
        handle.stop();
        handle.stop();
        assert!(controller.host().shown.borrow().is_empty());
        assert_eq!(*controller.host().releases.borrow(), 0);
    }

    #[test]
    fn missing_watcher_reveals_everything_immediately() {
        let controller = ScrollRevealController::new(FakeHost {
            unavailable: true,
            ..FakeHost::default()
        });
        let handle = controller.start(&["a", "b", "c"]);
        assert_eq!(handle.revealed_count(), 3);
        assert_eq!(*controller.host().shown.borrow(), vec!["a", "b", "c"]);
        handle.stop();
        assert_eq!(handle.revealed_count(), 3);
    }

    #[test]
    fn dropped_session_is_not_kept_alive_by_the_host() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a"]);
        // keep the sink alive past the drop, as a browser callback still queued would
        let mut sink = controller.host().sink.borrow_mut().take();
        drop(handle);
        if let Some(sink) = sink.as_mut() {
            sink(vec![IntersectionEntry {
                target: "a",
                is_intersecting: true,
                ratio: 1.0,
            }]);
        }
        assert!(controller.host().shown.borrow().is_empty());
    }

    #[test]
    fn dropping_a_handle_releases_its_watch() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a", "b"]);
        drop(handle);
        assert_eq!(*controller.host().releases.borrow(), 1);
        assert!(controller.host().sink.borrow().is_none());
        controller.host().deliver(&[("a", 1.0)]);
        assert!(controller.host().shown.borrow().is_empty());
    }

    #[test]
    fn dropping_after_stop_does_not_release_twice() {
        let controller = ScrollRevealController::new(FakeHost::default());
        let handle = controller.start(&["a"]);
        controller.stop(&handle);
        drop(handle);
        assert_eq!(*controller.host().releases.borrow(), 1);
    }
}
