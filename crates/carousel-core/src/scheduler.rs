//! Frame scheduling contract.
//!
//! The animation loop never sleeps or blocks: each frame runs a bounded tick
//! and then asks the host for the next one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Runs a callback at the host's next display refresh.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Run `tick` once per frame, forever, rescheduling at the end of each frame.
pub fn run_frames<S, F>(scheduler: Rc<S>, tick: F)
where
    S: FrameScheduler + 'static,
    F: FnMut() + 'static,
{
    schedule_next(scheduler, Rc::new(RefCell::new(tick)));
}

fn schedule_next<S, F>(scheduler: Rc<S>, tick: Rc<RefCell<F>>)
where
    S: FrameScheduler + 'static,
    F: FnMut() + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move || {
        (tick.borrow_mut())();
        schedule_next(next, tick);
    }));
}

/// Scheduler pumped explicitly by the host, e.g. from a windowing event loop.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the callbacks queued before this call; returns how many ran.
    ///
    /// Callbacks requested while running wait for the next call.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let n = batch.len();
        for cb in batch {
            cb();
        }
        n
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn each_frame_schedules_exactly_one_more() {
        let scheduler = Rc::new(ManualScheduler::new());
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        run_frames(Rc::clone(&scheduler), move || c.set(c.get() + 1));
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.pending(), 1);
        for expected in 1..=5 {
            assert_eq!(scheduler.run_pending(), 1);
            assert_eq!(count.get(), expected);
            assert_eq!(scheduler.pending(), 1);
        }
    }
}
