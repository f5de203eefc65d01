//! Adapter around the scroll-trigger animation library.
//!
//! The library keeps its own global registry of triggers and has a known
//! defect: refreshing while the renderer detaches nodes can throw from inside
//! its DOM bookkeeping. [`AnimationAdapter`] is the only code that talks to
//! the library. It validates targets, defers creation by a frame, tolerates
//! repeated teardown and turns the refresh defect into a logged warning plus
//! one delayed retry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, error, warn};
use thiserror::Error;

use super::scheduler::Scheduler;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TriggerError {
    #[error("scroll trigger library is not loaded")]
    Unavailable,
    #[error("stale DOM node: {0}")]
    StaleNode(String),
    #[error("{0}")]
    Library(String),
}

pub trait TriggerTarget {
    fn is_attached(&self) -> bool;
}

impl TriggerTarget for web_sys::Element {
    fn is_attached(&self) -> bool {
        self.is_connected()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

/// Configuration for one scroll trigger.
#[derive(Clone)]
pub struct TriggerSpec<T> {
    pub target: T,
    pub start: String,
    pub end: String,
    pub toggle_class: Option<String>,
    pub once: bool,
    pub on_toggle: Option<Rc<dyn Fn(bool)>>,
}

impl<T> TriggerSpec<T> {
    #[cfg(test)]
    pub fn new(target: T) -> Self {
        Self {
            target,
            start: "top 80%".to_string(),
            end: "bottom 20%".to_string(),
            toggle_class: None,
            once: false,
            on_toggle: None,
        }
    }
}

impl<T> fmt::Debug for TriggerSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerSpec")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("toggle_class", &self.toggle_class)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}

/// The capability offered by the scroll-trigger library.
pub trait ScrollTriggerApi {
    type Target: TriggerTarget + Clone + 'static;

    fn create(&self, id: TriggerId, spec: &TriggerSpec<Self::Target>) -> Result<(), TriggerError>;
    fn kill(&self, id: TriggerId) -> Result<(), TriggerError>;
    fn refresh(&self, safe: bool) -> Result<(), TriggerError>;
    fn kill_all(&self) -> Result<(), TriggerError>;
}

/// Handle returned by [`AnimationAdapter::create_trigger`]. A no-op handle
/// refers to nothing and is safe to kill any number of times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerHandle(Option<TriggerId>);

impl TriggerHandle {
    pub const NOOP: TriggerHandle = TriggerHandle(None);

    pub fn is_noop(&self) -> bool {
        self.0.is_none()
    }

    #[cfg(test)]
    pub fn id(&self) -> Option<TriggerId> {
        self.0
    }
}

enum Slot<T> {
    Pending(TriggerSpec<T>),
    Creating,
    Live,
}

struct State<T> {
    slots: HashMap<TriggerId, Slot<T>>,
    next_id: u64,
    cleanup_in_progress: bool,
    retry_pending: bool,
    destroyed: bool,
}

struct Inner<A: ScrollTriggerApi> {
    api: A,
    scheduler: Rc<dyn Scheduler>,
    retry_ms: u32,
    state: RefCell<State<A::Target>>,
}

/// Resets the cleanup flag however `kill_all` exits.
struct CleanupGuard<'a, A: ScrollTriggerApi>(&'a Inner<A>);

impl<A: ScrollTriggerApi> Drop for CleanupGuard<'_, A> {
    fn drop(&mut self) {
        self.0.state.borrow_mut().cleanup_in_progress = false;
    }
}

pub struct AnimationAdapter<A: ScrollTriggerApi> {
    inner: Rc<Inner<A>>,
}

impl<A: ScrollTriggerApi> Clone for AnimationAdapter<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: ScrollTriggerApi> PartialEq for AnimationAdapter<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A: ScrollTriggerApi + 'static> AnimationAdapter<A> {
    pub fn new(api: A, scheduler: Rc<dyn Scheduler>, retry_ms: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                scheduler,
                retry_ms,
                state: RefCell::new(State {
                    slots: HashMap::new(),
                    next_id: 0,
                    cleanup_in_progress: false,
                    retry_pending: false,
                    destroyed: false,
                }),
            }),
        }
    }

    /// Registers a trigger; the library sees it on the next animation frame.
    pub fn create_trigger(&self, spec: TriggerSpec<A::Target>) -> TriggerHandle {
        if !spec.target.is_attached() {
            warn!("ScrollTrigger: trigger element is not connected to DOM");
            return TriggerHandle::NOOP;
        }

        let id = {
            let mut state = self.inner.state.borrow_mut();
            if state.destroyed {
                debug!("ScrollTrigger: adapter destroyed, ignoring {:?}", spec);
                return TriggerHandle::NOOP;
            }
            let id = TriggerId(state.next_id);
            state.next_id += 1;
            state.slots.insert(id, Slot::Pending(spec));
            id
        };

        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        self.inner.scheduler.next_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.materialize(id);
            }
        }));
        TriggerHandle(Some(id))
    }

    /// Releases one trigger. Unknown and already-released handles are ignored.
    pub fn kill_trigger(&self, handle: TriggerHandle) {
        if let Some(id) = handle.0 {
            self.inner.release(id);
        }
    }

    /// Releases every trigger this adapter created.
    pub fn kill_all(&self) {
        self.inner.kill_all();
    }

    /// Recomputes trigger positions. A stale-node failure is recovered with
    /// one delayed safe refresh; any other library error is returned.
    pub fn refresh(&self) -> Result<(), TriggerError> {
        {
            let state = self.inner.state.borrow();
            if state.cleanup_in_progress || state.destroyed {
                debug!("ScrollTrigger: skipping refresh during cleanup");
                return Ok(());
            }
        }
        match self.inner.api.refresh(false) {
            Ok(()) => Ok(()),
            Err(TriggerError::StaleNode(message)) => {
                warn!("ScrollTrigger refresh error caught and handled: {}", message);
                Inner::schedule_retry(&self.inner);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Tears the adapter down. Later creations return no-op handles.
    pub fn destroy(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.destroyed {
                return;
            }
            state.destroyed = true;
        }
        self.inner.kill_all();
        match self.inner.api.kill_all() {
            Ok(()) | Err(TriggerError::Unavailable) => {}
            Err(err) => error!("Error cleaning up ScrollTriggers: {}", err),
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.inner
            .state
            .borrow()
            .slots
            .values()
            .filter(|slot| matches!(slot, Slot::Live))
            .count()
    }

    #[cfg(test)]
    pub fn is_destroyed(&self) -> bool {
        self.inner.state.borrow().destroyed
    }
}

impl<A: ScrollTriggerApi + 'static> Inner<A> {
    fn materialize(&self, id: TriggerId) {
        let spec = {
            let mut state = self.state.borrow_mut();
            if state.destroyed {
                return;
            }
            match state.slots.remove(&id) {
                Some(Slot::Pending(spec)) => {
                    state.slots.insert(id, Slot::Creating);
                    spec
                }
                Some(other) => {
                    state.slots.insert(id, other);
                    return;
                }
                // Killed before its frame came around.
                None => return,
            }
        };

        if !spec.target.is_attached() {
            warn!("ScrollTrigger: trigger element detached before creation");
            self.state.borrow_mut().slots.remove(&id);
            return;
        }

        let created = self.api.create(id, &spec);
        let mut state = self.state.borrow_mut();
        match created {
            Ok(()) => {
                if let Some(slot) = state.slots.get_mut(&id) {
                    *slot = Slot::Live;
                    return;
                }
                // Released while the library was creating it.
                drop(state);
                if let Err(err) = self.api.kill(id) {
                    error!("Error killing ScrollTrigger: {}", err);
                }
            }
            Err(err) => {
                state.slots.remove(&id);
                match err {
                    TriggerError::Unavailable => debug!("ScrollTrigger unavailable, trigger skipped"),
                    err => error!("Error creating ScrollTrigger: {}", err),
                }
            }
        }
    }

    fn release(&self, id: TriggerId) {
        let slot = self.state.borrow_mut().slots.remove(&id);
        if let Some(Slot::Live) = slot {
            if let Err(err) = self.api.kill(id) {
                error!("Error killing ScrollTrigger: {}", err);
            }
        }
    }

    fn kill_all(&self) {
        let live: Vec<TriggerId> = {
            let mut state = self.state.borrow_mut();
            if state.cleanup_in_progress {
                debug!("ScrollTrigger cleanup already running");
                return;
            }
            state.cleanup_in_progress = true;
            let mut live: Vec<TriggerId> = state
                .slots
                .iter()
                .filter(|(_, slot)| matches!(slot, Slot::Live))
                .map(|(id, _)| *id)
                .collect();
            live.sort();
            state.slots.clear();
            live
        };
        let _guard = CleanupGuard(self);

        for id in live {
            if let Err(err) = self.api.kill(id) {
                error!("Error killing ScrollTrigger: {}", err);
            }
        }
    }

    fn schedule_retry(this: &Rc<Self>) {
        {
            let mut state = this.state.borrow_mut();
            if state.retry_pending {
                return;
            }
            state.retry_pending = true;
        }
        let weak = Rc::downgrade(this);
        this.scheduler.after(
            this.retry_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                {
                    let mut state = inner.state.borrow_mut();
                    state.retry_pending = false;
                    if state.destroyed || state.cleanup_in_progress {
                        return;
                    }
                }
                if let Err(err) = inner.api.refresh(true) {
                    warn!("ScrollTrigger refresh after recovery failed: {}", err);
                }
            }),
        );
    }
}

/// Owns the triggers of one view and releases them when dropped.
pub struct TriggerScope<A: ScrollTriggerApi + 'static> {
    adapter: AnimationAdapter<A>,
    handles: RefCell<Vec<TriggerHandle>>,
}

impl<A: ScrollTriggerApi + 'static> TriggerScope<A> {
    pub fn new(adapter: AnimationAdapter<A>) -> Self {
        Self {
            adapter,
            handles: RefCell::new(Vec::new()),
        }
    }

    pub fn create(&self, spec: TriggerSpec<A::Target>) -> TriggerHandle {
        let handle = self.adapter.create_trigger(spec);
        if !handle.is_noop() {
            self.handles.borrow_mut().push(handle);
        }
        handle
    }

    pub fn release(&self) {
        let handles = std::mem::take(&mut *self.handles.borrow_mut());
        for handle in handles {
            self.adapter.kill_trigger(handle);
        }
    }
}

impl<A: ScrollTriggerApi + 'static> Drop for TriggerScope<A> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::animation::scheduler::testing::ManualScheduler;

    #[derive(Clone)]
    struct FakeNode(Rc<Cell<bool>>);

    impl FakeNode {
        fn attached() -> Self {
            FakeNode(Rc::new(Cell::new(true)))
        }

        fn detach(&self) {
            self.0.set(false);
        }
    }

    impl TriggerTarget for FakeNode {
        fn is_attached(&self) -> bool {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Calls {
        created: Vec<TriggerId>,
        killed: Vec<TriggerId>,
        refreshes: Vec<bool>,
        kill_all: usize,
    }

    /// Scripted stand-in for the library.
    #[derive(Clone, Default)]
    struct FakeLibrary {
        calls: Rc<RefCell<Calls>>,
        refresh_failures: Rc<RefCell<Vec<TriggerError>>>,
        fail_kill: Rc<Cell<bool>>,
    }

    impl FakeLibrary {
        fn fail_next_refresh(&self, err: TriggerError) {
            self.refresh_failures.borrow_mut().push(err);
        }
    }

    impl ScrollTriggerApi for FakeLibrary {
        type Target = FakeNode;

        fn create(&self, id: TriggerId, _spec: &TriggerSpec<FakeNode>) -> Result<(), TriggerError> {
            self.calls.borrow_mut().created.push(id);
            Ok(())
        }

        fn kill(&self, id: TriggerId) -> Result<(), TriggerError> {
            self.calls.borrow_mut().killed.push(id);
            if self.fail_kill.get() {
                return Err(TriggerError::Library("already dead".into()));
            }
            Ok(())
        }

        fn refresh(&self, safe: bool) -> Result<(), TriggerError> {
            self.calls.borrow_mut().refreshes.push(safe);
            match self.refresh_failures.borrow_mut().pop() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn kill_all(&self) -> Result<(), TriggerError> {
            self.calls.borrow_mut().kill_all += 1;
            Ok(())
        }
    }

    fn setup() -> (AnimationAdapter<FakeLibrary>, FakeLibrary, ManualScheduler) {
        let library = FakeLibrary::default();
        let scheduler = ManualScheduler::default();
        let adapter = AnimationAdapter::new(library.clone(), Rc::new(scheduler.clone()), 100);
        (adapter, library, scheduler)
    }

    #[test]
    fn creation_is_deferred_one_frame() {
        let (adapter, library, scheduler) = setup();
        let handle = adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        assert!(!handle.is_noop());
        assert!(library.calls.borrow().created.is_empty());
        assert_eq!(adapter.active_count(), 0);

        scheduler.run_frames();
        assert_eq!(library.calls.borrow().created, vec![handle.id().unwrap()]);
        assert_eq!(adapter.active_count(), 1);
    }

    #[test]
    fn detached_target_yields_noop_handle() {
        let (adapter, library, scheduler) = setup();
        let node = FakeNode::attached();
        node.detach();
        let handle = adapter.create_trigger(TriggerSpec::new(node));
        assert!(handle.is_noop());
        assert_eq!(scheduler.pending_frames(), 0);
        adapter.kill_trigger(handle);
        assert!(library.calls.borrow().killed.is_empty());
    }

    #[test]
    fn target_detached_before_frame_is_never_created() {
        let (adapter, library, scheduler) = setup();
        let node = FakeNode::attached();
        adapter.create_trigger(TriggerSpec::new(node.clone()));
        node.detach();
        scheduler.run_frames();
        assert!(library.calls.borrow().created.is_empty());
        assert_eq!(adapter.active_count(), 0);
    }

    #[test]
    fn killing_twice_does_not_panic_or_double_kill() {
        let (adapter, library, scheduler) = setup();
        let handle = adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        scheduler.run_frames();

        adapter.kill_trigger(handle);
        adapter.kill_trigger(handle);
        adapter.kill_trigger(TriggerHandle::NOOP);
        assert_eq!(library.calls.borrow().killed.len(), 1);
    }

    #[test]
    fn kill_before_frame_cancels_creation() {
        let (adapter, library, scheduler) = setup();
        let handle = adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        adapter.kill_trigger(handle);
        scheduler.run_frames();
        assert!(library.calls.borrow().created.is_empty());
        assert!(library.calls.borrow().killed.is_empty());
    }

    #[test]
    fn library_kill_errors_are_swallowed() {
        let (adapter, library, scheduler) = setup();
        let handle = adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        scheduler.run_frames();
        library.fail_kill.set(true);
        adapter.kill_trigger(handle);
        adapter.kill_all();
        assert_eq!(adapter.active_count(), 0);
    }

    #[test]
    fn stale_node_refresh_is_recovered_with_one_retry() {
        let (adapter, library, scheduler) = setup();
        library.fail_next_refresh(TriggerError::StaleNode(
            "Failed to execute 'removeChild' on 'Node'".into(),
        ));

        assert_eq!(adapter.refresh(), Ok(()));
        assert_eq!(scheduler.pending_delayed(), vec![100]);

        scheduler.run_delayed();
        assert_eq!(library.calls.borrow().refreshes, vec![false, true]);
        assert!(scheduler.pending_delayed().is_empty());
    }

    #[test]
    fn repeated_stale_errors_share_one_pending_retry() {
        let (adapter, library, scheduler) = setup();
        for _ in 0..3 {
            library.fail_next_refresh(TriggerError::StaleNode("removeChild".into()));
        }
        adapter.refresh().unwrap();
        adapter.refresh().unwrap();
        assert_eq!(scheduler.pending_delayed().len(), 1);

        // The retry itself fails; it is logged and not rescheduled.
        scheduler.run_delayed();
        assert!(scheduler.pending_delayed().is_empty());
    }

    #[test]
    fn other_refresh_errors_propagate() {
        let (adapter, library, scheduler) = setup();
        library.fail_next_refresh(TriggerError::Library("boom".into()));
        assert_eq!(adapter.refresh(), Err(TriggerError::Library("boom".into())));
        assert!(scheduler.pending_delayed().is_empty());
    }

    #[test]
    fn kill_all_releases_live_triggers_once() {
        let (adapter, library, scheduler) = setup();
        for _ in 0..3 {
            adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        }
        scheduler.run_frames();
        assert_eq!(adapter.active_count(), 3);

        adapter.kill_all();
        adapter.kill_all();
        assert_eq!(library.calls.borrow().killed.len(), 3);
        assert_eq!(adapter.active_count(), 0);
    }

    #[test]
    fn scope_releases_its_triggers_on_drop() {
        let (adapter, library, scheduler) = setup();
        let kept = adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        {
            let scope = TriggerScope::new(adapter.clone());
            scope.create(TriggerSpec::new(FakeNode::attached()));
            scope.create(TriggerSpec::new(FakeNode::attached()));
            scheduler.run_frames();
            assert_eq!(adapter.active_count(), 3);
        }
        assert_eq!(adapter.active_count(), 1);
        assert!(!library.calls.borrow().killed.contains(&kept.id().unwrap()));
    }

    #[test]
    fn scope_dropped_mid_transition_cancels_pending_creation() {
        let (adapter, library, scheduler) = setup();
        {
            let scope = TriggerScope::new(adapter.clone());
            scope.create(TriggerSpec::new(FakeNode::attached()));
        }
        scheduler.run_frames();
        assert!(library.calls.borrow().created.is_empty());
    }

    #[test]
    fn destroyed_adapter_refuses_new_triggers() {
        let (adapter, library, scheduler) = setup();
        adapter.create_trigger(TriggerSpec::new(FakeNode::attached()));
        scheduler.run_frames();

        adapter.destroy();
        adapter.destroy();
        assert_eq!(library.calls.borrow().kill_all, 1);
        assert!(adapter.is_destroyed());
        assert!(adapter
            .create_trigger(TriggerSpec::new(FakeNode::attached()))
            .is_noop());
        assert_eq!(adapter.refresh(), Ok(()));
        assert!(library.calls.borrow().refreshes.is_empty());
    }

    #[test]
    fn retry_is_skipped_after_destroy() {
        let (adapter, library, scheduler) = setup();
        library.fail_next_refresh(TriggerError::StaleNode("removeChild".into()));
        adapter.refresh().unwrap();
        adapter.destroy();
        scheduler.run_delayed();
        assert_eq!(library.calls.borrow().refreshes, vec![false]);
    }
}
