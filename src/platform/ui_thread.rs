use std::sync::mpsc;
use std::thread::ThreadId;

use crate::foundation::error::{LayeredError, LayeredResult};

type Job<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Create a hand-off queue owned by the calling thread, which becomes the UI thread.
///
/// `T` is the state only the UI thread may touch (windows, controls, the shared buffer). Other
/// threads reach it through [`UiHandle::invoke`], which blocks until the UI thread has run the
/// closure.
pub fn ui_queue<T>() -> (UiQueue<T>, UiHandle<T>) {
    let (tx, rx) = mpsc::channel();
    let ui_thread = std::thread::current().id();
    (UiQueue { rx, ui_thread }, UiHandle { tx, ui_thread })
}

/// Receiving end, drained by the UI thread's message loop.
pub struct UiQueue<T> {
    rx: mpsc::Receiver<Job<T>>,
    ui_thread: ThreadId,
}

impl<T> UiQueue<T> {
    /// Run every job already queued, without waiting. Returns how many ran.
    pub fn pump(&self, state: &mut T) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job(state);
            ran += 1;
        }
        ran
    }

    /// Block until one job arrives and run it. Fails once every handle is gone.
    pub fn run_next(&self, state: &mut T) -> LayeredResult<()> {
        let job = self
            .rx
            .recv()
            .map_err(|_| LayeredError::platform("every UI handle was dropped"))?;
        job(state);
        Ok(())
    }

    pub fn ui_thread(&self) -> ThreadId {
        self.ui_thread
    }
}

/// Sending end; clone it into worker threads.
pub struct UiHandle<T> {
    tx: mpsc::Sender<Job<T>>,
    ui_thread: ThreadId,
}

impl<T> Clone for UiHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            ui_thread: self.ui_thread,
        }
    }
}

impl<T> std::fmt::Debug for UiHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle")
            .field("ui_thread", &self.ui_thread)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> UiHandle<T> {
    /// Run `f` on the UI thread and wait for its result.
    ///
    /// Calling this from the UI thread itself is an error: the queue would never be drained.
    pub fn invoke<R, F>(&self, f: F) -> LayeredResult<R>
    where
        R: Send + 'static,
        F: FnOnce(&mut T) -> R + Send + 'static,
    {
        if std::thread::current().id() == self.ui_thread {
            return Err(LayeredError::platform(
                "invoke called on the UI thread; call the operation directly",
            ));
        }
        let (reply_tx, reply_rx) = mpsc::sync_channel::<R>(1);
        self.tx
            .send(Box::new(move |state: &mut T| {
                // The caller may have given up waiting; nothing to do then.
                let _ = reply_tx.send(f(state));
            }))
            .map_err(|_| LayeredError::platform("UI thread is not accepting work"))?;
        reply_rx
            .recv()
            .map_err(|_| LayeredError::platform("UI thread dropped the call before replying"))
    }

    pub fn is_ui_thread(&self) -> bool {
        std::thread::current().id() == self.ui_thread
    }
}

#[cfg(test)]
#[path = "../../tests/unit/platform/ui_thread.rs"]
mod tests;
