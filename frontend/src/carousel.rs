//! Auto-advancing carousel shared by the team and portfolio sections.
//!
//! [`Carousel`] is the state machine; it owns its timer through a [`Ticker`]
//! so there is never more than one repeating timer per carousel. The
//! browser ticker is backed by `gloo_timers` intervals and [`use_carousel`]
//! exposes the machine to components.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

/// Source of repeating timers.
pub trait Ticker {
    fn every(&mut self, period_ms: u32) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarouselState {
    #[default]
    Idle,
    Running,
}

impl CarouselState {
    /// Screen readers should not announce slides that rotate on their own.
    pub fn aria_live(self) -> &'static str {
        match self {
            CarouselState::Idle => "polite",
            CarouselState::Running => "off",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_ms: u32,
    /// Delay used after a manual selection, usually longer than autoplay.
    pub reset_ms: u32,
    pub transition_ms: u32,
}

impl CarouselConfig {
    pub fn team() -> Self {
        let timing = config::timing();
        Self {
            autoplay_ms: timing.team_autoplay_ms,
            reset_ms: timing.team_reset_ms,
            transition_ms: timing.carousel_transition_ms,
        }
    }

    pub fn portfolio() -> Self {
        let timing = config::timing();
        Self {
            autoplay_ms: timing.portfolio_autoplay_ms,
            reset_ms: timing.portfolio_reset_ms,
            transition_ms: timing.carousel_transition_ms,
        }
    }
}

/// Snapshot handed to the view layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselView {
    pub index: usize,
    pub animating: bool,
    pub direction: Direction,
    pub state: CarouselState,
}

pub struct Carousel<T: Ticker> {
    ticker: T,
    len: usize,
    index: usize,
    timer: Option<TimerId>,
    animating: bool,
    direction: Direction,
    config: CarouselConfig,
}

impl<T: Ticker> Carousel<T> {
    pub fn new(len: usize, config: CarouselConfig, ticker: T) -> Self {
        Self {
            ticker,
            len,
            index: 0,
            timer: None,
            animating: false,
            direction: Direction::Forward,
            config,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> CarouselState {
        if self.timer.is_some() {
            CarouselState::Running
        } else {
            CarouselState::Idle
        }
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.index(),
            animating: self.is_animating(),
            direction: self.direction(),
            state: self.state(),
        }
    }

    /// Starts auto-advancing every `delay_ms`, replacing any running timer.
    /// Carousels with fewer than two items have nothing to rotate.
    pub fn start(&mut self, delay_ms: u32) {
        self.cancel_timer();
        if self.len <= 1 {
            return;
        }
        self.timer = Some(self.ticker.every(delay_ms));
    }

    pub fn stop(&mut self) {
        self.cancel_timer();
    }

    /// Handles a timer firing. Ticks from a timer that was already replaced
    /// are dropped.
    pub fn tick(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            debug!("Dropping stale carousel tick {:?}", id);
            return false;
        }
        self.advance();
        true
    }

    pub fn advance(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.direction = Direction::Forward;
    }

    /// Jumps to `index` and restarts the timer with the reset delay.
    /// Ignored while a transition is still animating or when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let direction = if index >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.select_towards(index, direction)
    }

    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.select_towards((self.index + 1) % self.len, Direction::Forward)
    }

    pub fn prev(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.select_towards((self.index + self.len - 1) % self.len, Direction::Backward)
    }

    pub fn finish_transition(&mut self) {
        self.animating = false;
    }

    fn select_towards(&mut self, index: usize, direction: Direction) -> bool {
        if self.animating || index >= self.len {
            return false;
        }
        self.index = index;
        self.direction = direction;
        self.animating = true;
        self.start(self.config.reset_ms);
        true
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.ticker.cancel(id);
        }
    }
}

impl<T: Ticker> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// [`Ticker`] backed by `gloo_timers` intervals. Each firing emits the
/// timer's id through `on_tick`.
pub struct IntervalTicker {
    next_id: u32,
    intervals: HashMap<TimerId, Interval>,
    on_tick: Callback<TimerId>,
}

impl IntervalTicker {
    pub fn new(on_tick: Callback<TimerId>) -> Self {
        Self {
            next_id: 0,
            intervals: HashMap::new(),
            on_tick,
        }
    }
}

impl Ticker for IntervalTicker {
    fn every(&mut self, period_ms: u32) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let on_tick = self.on_tick.clone();
        self.intervals
            .insert(id, Interval::new(period_ms, move || on_tick.emit(id)));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        // Dropping the interval clears it.
        self.intervals.remove(&id);
    }
}

#[derive(Clone, PartialEq)]
pub struct UseCarouselHandle {
    pub view: CarouselView,
    pub select: Callback<usize>,
    pub next: Callback<()>,
    pub prev: Callback<()>,
}

type SharedCarousel = Rc<RefCell<Option<Carousel<IntervalTicker>>>>;

/// Runs `action` on the mounted carousel. Returns the new view only when the
/// action was accepted.
fn act<T: Ticker>(
    slot: &mut Option<Carousel<T>>,
    action: impl FnOnce(&mut Carousel<T>) -> bool,
) -> Option<CarouselView> {
    match slot.as_mut() {
        Some(carousel) => action(carousel).then(|| carousel.view()),
        None => None,
    }
}

fn apply(
    cell: &SharedCarousel,
    view: &UseStateSetter<CarouselView>,
    finish: &Rc<RefCell<Option<Timeout>>>,
    transition_ms: u32,
    action: impl FnOnce(&mut Carousel<IntervalTicker>) -> bool,
) {
    let snapshot = act(&mut *cell.borrow_mut(), action);
    let Some(snapshot) = snapshot else {
        return;
    };
    view.set(snapshot);

    let cell = cell.clone();
    let view = view.clone();
    *finish.borrow_mut() = Some(Timeout::new(transition_ms, move || {
        let snapshot = cell.borrow_mut().as_mut().map(|carousel| {
            carousel.finish_transition();
            carousel.view()
        });
        if let Some(snapshot) = snapshot {
            view.set(snapshot);
        }
    }));
}

/// Runs a [`Carousel`] over `len` items for the lifetime of the component.
#[hook]
pub fn use_carousel(len: usize, config: CarouselConfig) -> UseCarouselHandle {
    let view = use_state(CarouselView::default);
    let cell: SharedCarousel = use_mut_ref(|| None);
    let finish: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let cell = cell.clone();
        let finish = finish.clone();
        let setter = view.setter();
        use_effect_with_deps(
            move |(len, config)| {
                let on_tick = {
                    let cell = cell.clone();
                    let setter = setter.clone();
                    Callback::from(move |id: TimerId| {
                        let snapshot = cell
                            .borrow_mut()
                            .as_mut()
                            .and_then(|carousel| carousel.tick(id).then(|| carousel.view()));
                        if let Some(snapshot) = snapshot {
                            setter.set(snapshot);
                        }
                    })
                };
                let mut carousel = Carousel::new(*len, config.clone(), IntervalTicker::new(on_tick));
                carousel.start(config.autoplay_ms);
                setter.set(carousel.view());
                *cell.borrow_mut() = Some(carousel);

                move || {
                    finish.borrow_mut().take();
                    let stopped = cell.borrow_mut().take();
                    drop(stopped);
                }
            },
            (len, config.clone()),
        );
    }

    let transition_ms = config.transition_ms;
    let make = |action: fn(&mut Carousel<IntervalTicker>) -> bool| {
        let cell = cell.clone();
        let finish = finish.clone();
        let setter = view.setter();
        Callback::from(move |_: ()| apply(&cell, &setter, &finish, transition_ms, action))
    };
    let next = make(|carousel| carousel.next());
    let prev = make(|carousel| carousel.prev());
    let select = {
        let cell = cell.clone();
        let finish = finish.clone();
        let setter = view.setter();
        Callback::from(move |index: usize| {
            apply(&cell, &setter, &finish, transition_ms, |carousel| carousel.select(index))
        })
    };

    UseCarouselHandle {
        view: *view,
        select,
        next,
        prev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u32,
        timers: Vec<FakeTimer>,
        starts: usize,
        cancels: usize,
    }

    struct FakeTimer {
        id: TimerId,
        period: u64,
        due: u64,
        active: bool,
    }

    impl Clock {
        fn active_timers(&self) -> usize {
            self.timers.iter().filter(|t| t.active).count()
        }
    }

    #[derive(Clone, Default)]
    struct FakeTicker(Rc<RefCell<Clock>>);

    impl Ticker for FakeTicker {
        fn every(&mut self, period_ms: u32) -> TimerId {
            let mut clock = self.0.borrow_mut();
            let id = TimerId(clock.next_id);
            clock.next_id += 1;
            clock.starts += 1;
            let due = clock.now + u64::from(period_ms);
            clock.timers.push(FakeTimer {
                id,
                period: u64::from(period_ms),
                due,
                active: true,
            });
            id
        }

        fn cancel(&mut self, id: TimerId) {
            let mut clock = self.0.borrow_mut();
            clock.cancels += 1;
            if let Some(timer) = clock.timers.iter_mut().find(|t| t.id == id) {
                timer.active = false;
            }
        }
    }

    fn carousel(len: usize, autoplay_ms: u32, reset_ms: u32) -> (Carousel<FakeTicker>, FakeTicker) {
        let ticker = FakeTicker::default();
        let config = CarouselConfig {
            autoplay_ms,
            reset_ms,
            transition_ms: 350,
        };
        (Carousel::new(len, config, ticker.clone()), ticker)
    }

    /// Advances simulated time to `until`, firing due timers in order.
    /// Returns the times at which the carousel advanced.
    fn run_until(ticker: &FakeTicker, carousel: &mut Carousel<FakeTicker>, until: u64) -> Vec<u64> {
        let mut fired = Vec::new();
        loop {
            let next = {
                let clock = ticker.0.borrow();
                clock
                    .timers
                    .iter()
                    .filter(|t| t.active)
                    .min_by_key(|t| t.due)
                    .map(|t| (t.id, t.due))
            };
            match next {
                Some((id, due)) if due <= until => {
                    {
                        let mut clock = ticker.0.borrow_mut();
                        clock.now = due;
                        if let Some(timer) = clock.timers.iter_mut().find(|t| t.id == id) {
                            timer.due += timer.period;
                        }
                    }
                    if carousel.tick(id) {
                        fired.push(due);
                    }
                }
                _ => {
                    ticker.0.borrow_mut().now = until;
                    return fired;
                }
            }
        }
    }

    #[test]
    fn auto_advances_once_per_period() {
        let (mut carousel, ticker) = carousel(4, 5_000, 15_000);
        carousel.start(5_000);
        assert_eq!(carousel.state(), CarouselState::Running);

        let fired = run_until(&ticker, &mut carousel, 15_000);
        assert_eq!(fired, vec![5_000, 10_000, 15_000]);
        assert_eq!(carousel.index(), 3 % 4);
    }

    #[test]
    fn wraps_around_after_last_item() {
        let (mut carousel, ticker) = carousel(4, 5_000, 15_000);
        carousel.start(5_000);
        run_until(&ticker, &mut carousel, 20_000);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn manual_selection_resets_the_timer() {
        let (mut carousel, ticker) = carousel(4, 5_000, 15_000);
        carousel.start(5_000);
        assert!(run_until(&ticker, &mut carousel, 2_000).is_empty());

        assert!(carousel.select(2));
        carousel.finish_transition();
        assert_eq!(carousel.index(), 2);

        // Nothing at the originally scheduled t=5000.
        assert!(run_until(&ticker, &mut carousel, 16_999).is_empty());
        let fired = run_until(&ticker, &mut carousel, 17_000);
        assert_eq!(fired, vec![17_000]);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn exactly_one_timer_survives_any_start_select_sequence() {
        let (mut carousel, ticker) = carousel(5, 1_000, 3_000);
        carousel.start(1_000);
        for index in [3, 1, 4, 0, 0, 2] {
            carousel.select(index);
            carousel.finish_transition();
        }
        carousel.start(1_000);
        carousel.start(2_000);

        let clock = ticker.0.borrow();
        assert_eq!(clock.active_timers(), 1);
        assert_eq!(clock.cancels, clock.starts - 1);
    }

    #[test]
    fn selection_is_ignored_while_animating() {
        let (mut carousel, ticker) = carousel(4, 5_000, 15_000);
        carousel.start(5_000);
        assert!(carousel.select(1));
        assert!(!carousel.select(3));
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 1);
        assert_eq!(ticker.0.borrow().starts, 2);

        carousel.finish_transition();
        assert!(carousel.select(3));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let (mut carousel, _ticker) = carousel(3, 5_000, 15_000);
        assert!(!carousel.select(3));
        assert!(!carousel.select(usize::MAX));
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        for len in 1..=6usize {
            let (mut carousel, _ticker) = carousel(len, 1_000, 2_000);
            carousel.start(1_000);
            let mut seed = 0x2545_f491_u64.wrapping_mul(len as u64 + 1);
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                match seed % 5 {
                    0 => carousel.advance(),
                    1 => {
                        carousel.select((seed >> 8) as usize % (len + 2));
                    }
                    2 => {
                        carousel.next();
                    }
                    3 => {
                        carousel.prev();
                    }
                    _ => carousel.finish_transition(),
                }
                assert!(carousel.index() < len);
            }
        }
    }

    #[test]
    fn stale_ticks_from_cancelled_timers_are_dropped() {
        let (mut carousel, ticker) = carousel(4, 5_000, 15_000);
        carousel.start(5_000);
        let first = TimerId(0);
        carousel.select(1);
        assert!(!carousel.tick(first));
        assert_eq!(carousel.index(), 1);
        assert_eq!(ticker.0.borrow().active_timers(), 1);
    }

    #[test]
    fn prev_and_next_wrap_with_direction() {
        let (mut carousel, _ticker) = carousel(3, 5_000, 15_000);
        assert!(carousel.prev());
        assert_eq!((carousel.index(), carousel.direction()), (2, Direction::Backward));
        carousel.finish_transition();
        assert!(carousel.next());
        assert_eq!((carousel.index(), carousel.direction()), (0, Direction::Forward));
    }

    #[test]
    fn empty_and_single_item_carousels_never_move() {
        for len in [0, 1] {
            let (mut carousel, ticker) = carousel(len, 5_000, 15_000);
            carousel.start(5_000);
            assert_eq!(carousel.state(), CarouselState::Idle);
            assert_eq!(ticker.0.borrow().starts, 0);
            for _ in 0..10 {
                carousel.advance();
                assert_eq!(carousel.index(), 0);
            }
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.index(), 0);
        }
    }

    #[test]
    fn stop_is_idempotent_and_drop_releases_timer() {
        let (mut carousel, ticker) = carousel(3, 5_000, 15_000);
        carousel.start(5_000);
        carousel.stop();
        carousel.stop();
        assert_eq!(carousel.state(), CarouselState::Idle);
        assert_eq!(ticker.0.borrow().cancels, 1);

        carousel.start(5_000);
        drop(carousel);
        assert_eq!(ticker.0.borrow().active_timers(), 0);
    }

    #[test]
    fn act_reports_a_view_only_for_accepted_actions() {
        let (carousel, ticker) = carousel(3, 5_000, 15_000);
        let mut slot = Some(carousel);

        let view = act(&mut slot, |c| c.select(2)).unwrap();
        assert_eq!(view.index, 2);
        assert!(view.animating);
        assert_eq!(view.state, CarouselState::Running);
        assert_eq!(view.state.aria_live(), "off");

        assert_eq!(act(&mut slot, |c| c.select(0)), None);
        assert_eq!(act(&mut slot, |c| c.select(7)), None);
        assert_eq!(ticker.0.borrow().starts, 1);

        slot = None;
        assert_eq!(act(&mut slot, |c: &mut Carousel<FakeTicker>| c.next()), None);
        assert_eq!(ticker.0.borrow().active_timers(), 0);
    }
}
