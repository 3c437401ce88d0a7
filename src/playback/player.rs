use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Background auto-advance over a finished trace.
///
/// Walks a step position forward at a fixed delay, reporting each new
/// step through the callback. It never touches the trace itself, only a
/// position, so stopping playback cannot affect simulation results.
/// Cancellation is cooperative: the stop flag is checked after every
/// sleep, before the next step is published.
pub struct Autoplay {
    stop: Arc<AtomicBool>,
    position: Arc<AtomicUsize>,
    handle: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Start advancing from `start` toward `len - 1`, waiting `delay`
    /// before each step. The callback runs on the playback thread.
    pub fn spawn<F>(len: usize, start: usize, delay: Duration, mut on_step: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let position = Arc::new(AtomicUsize::new(start));

        let handle = {
            let stop = Arc::clone(&stop);
            let position = Arc::clone(&position);

            thread::spawn(move || {
                loop {
                    let current = position.load(Ordering::Relaxed);
                    if len == 0 || current >= len - 1 {
                        break;
                    }

                    thread::sleep(delay);
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }

                    position.store(current + 1, Ordering::Relaxed);
                    on_step(current + 1);
                }
            })
        };

        Self {
            stop,
            position,
            handle: Some(handle),
        }
    }

    /// Step the playback has reached so far.
    pub fn position(&self) -> usize {
        self.position.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Signal the playback thread and wait for it. Safe to call again
    /// after it already stopped.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Wait for playback to reach the final step on its own.
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}
