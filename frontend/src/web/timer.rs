//! 定时器封装模块
//!
//! 基于 `gloo-timers` 实现核心的 [`Scheduler`]。

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use h5bridge::{Scheduler, TimerId};

/// `setTimeout` 接受的最大延迟（有符号 32 位）
const MAX_DELAY_MS: u32 = i32::MAX as u32;

fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(MAX_DELAY_MS)
        .min(MAX_DELAY_MS)
}

/// 活跃句柄表
///
/// 句柄 drop 即取消。正在执行回调的句柄在回调返回之前不能 drop，
/// 因此执行完毕的句柄先记入 `fired`，下次操作时再回收。
struct Timers<H> {
    active: HashMap<TimerId, H>,
    fired: Vec<TimerId>,
    firing: Option<TimerId>,
}

impl<H> Default for Timers<H> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
            fired: Vec::new(),
            firing: None,
        }
    }
}

impl<H> Timers<H> {
    fn purge_fired(&mut self) {
        for id in self.fired.drain(..) {
            self.active.remove(&id);
        }
    }

    fn insert(&mut self, id: TimerId, handle: H) {
        self.purge_fired();
        self.active.insert(id, handle);
    }

    fn remove(&mut self, id: TimerId) {
        self.purge_fired();
        if self.firing == Some(id) {
            return;
        }
        self.active.remove(&id);
    }

    fn begin(&mut self, id: TimerId) {
        self.firing = Some(id);
    }

    fn finish(&mut self, id: TimerId) {
        self.firing = None;
        self.fired.push(id);
    }
}

/// 浏览器 `setTimeout` 调度器
///
/// 回调中可以再次调度或取消定时器。
#[derive(Default)]
pub struct GlooScheduler {
    timers: Rc<RefCell<Timers<Timeout>>>,
    next_id: Cell<u64>,
}

impl Scheduler for GlooScheduler {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let timers = Rc::clone(&self.timers);
        let timeout = Timeout::new(delay_millis(delay), move || {
            timers.borrow_mut().begin(id);
            task();
            timers.borrow_mut().finish(id);
        });

        self.timers.borrow_mut().insert(id, timeout);
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        // drop 即调用 clearTimeout
        self.timers.borrow_mut().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// drop 时记录的句柄
    struct Handle(Rc<Cell<bool>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    fn handle() -> (Handle, Rc<Cell<bool>>) {
        let dropped = Rc::new(Cell::new(false));
        (Handle(dropped.clone()), dropped)
    }

    #[test]
    fn delay_is_clamped_to_set_timeout_range() {
        assert_eq!(delay_millis(Duration::from_millis(300)), 300);
        assert_eq!(delay_millis(Duration::from_millis(i32::MAX as u64 + 1)), MAX_DELAY_MS);
        assert_eq!(delay_millis(Duration::from_secs(u64::MAX)), MAX_DELAY_MS);
    }

    #[test]
    fn scheduling_inside_callback_keeps_running_handle() {
        let mut timers = Timers::default();
        let (first, first_dropped) = handle();
        timers.insert(TimerId(0), first);

        timers.begin(TimerId(0));
        let (second, _) = handle();
        timers.insert(TimerId(1), second);
        assert!(!first_dropped.get());
        timers.finish(TimerId(0));

        let (third, _) = handle();
        timers.insert(TimerId(2), third);
        assert!(first_dropped.get());
        assert_eq!(timers.active.len(), 2);
    }

    #[test]
    fn clearing_running_handle_is_deferred() {
        let mut timers = Timers::default();
        let (first, first_dropped) = handle();
        timers.insert(TimerId(0), first);

        timers.begin(TimerId(0));
        timers.remove(TimerId(0));
        assert!(!first_dropped.get());
        timers.finish(TimerId(0));

        timers.remove(TimerId(7));
        assert!(first_dropped.get());
        assert!(timers.active.is_empty());
    }

    #[test]
    fn clearing_pending_handle_drops_it() {
        let mut timers = Timers::default();
        let (first, first_dropped) = handle();
        timers.insert(TimerId(0), first);

        timers.remove(TimerId(0));
        assert!(first_dropped.get());
    }
}
