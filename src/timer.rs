use gloo_timers::callback::Timeout;

/// Pending delayed tasks that can be cancelled as a group.
#[derive(Default)]
pub struct TaskQueue {
    pending: Vec<Timeout>,
}

impl TaskQueue {
    pub fn schedule<F>(&mut self, millis: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending.push(Timeout::new(millis, task));
    }

    /// Dropping a `Timeout` clears it, so nothing queued here runs afterwards.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

/// Runs `task` after `millis` with no way to cancel it.
pub fn detach<F>(millis: u32, task: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, task).forget();
}
