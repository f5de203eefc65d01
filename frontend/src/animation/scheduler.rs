use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub type Task = Box<dyn FnOnce()>;

/// Deferred work on the browser event loop.
pub trait Scheduler {
    /// Runs `task` on the next animation frame.
    fn next_frame(&self, task: Task);
    /// Runs `task` after `delay_ms`.
    fn after(&self, delay_ms: u32, task: Task);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, task: Task) {
        let Some(window) = web_sys::window() else {
            task();
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            warn!("requestAnimationFrame unavailable, dropping frame task: {:?}", err);
        }
    }

    fn after(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, move || task()).forget();
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Scheduler, Task};

    #[derive(Default)]
    struct Queues {
        frames: Vec<Task>,
        delayed: Vec<(u32, Task)>,
    }

    /// Queues tasks until the test flushes them.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queues: Rc<RefCell<Queues>>,
    }

    impl ManualScheduler {
        pub fn pending_frames(&self) -> usize {
            self.queues.borrow().frames.len()
        }

        pub fn pending_delayed(&self) -> Vec<u32> {
            self.queues.borrow().delayed.iter().map(|(d, _)| *d).collect()
        }

        pub fn run_frames(&self) {
            let tasks = std::mem::take(&mut self.queues.borrow_mut().frames);
            for task in tasks {
                task();
            }
        }

        pub fn run_delayed(&self) {
            let tasks = std::mem::take(&mut self.queues.borrow_mut().delayed);
            for (_, task) in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn next_frame(&self, task: Task) {
            self.queues.borrow_mut().frames.push(task);
        }

        fn after(&self, delay_ms: u32, task: Task) {
            self.queues.borrow_mut().delayed.push((delay_ms, task));
        }
    }
}
