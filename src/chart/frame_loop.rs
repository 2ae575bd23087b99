use log::debug;

/// Identifies one run of a [`FrameLoop`]. Stale handles never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Per-component "run every frame" state.
///
/// At most one handle is live at a time: starting again invalidates the
/// previous run, stopping invalidates the current one. The host repaints
/// only while [`FrameLoop::is_running`] is true.
#[derive(Debug, Default)]
pub struct FrameLoop {
    next_id: u64,
    active: Option<FrameHandle>,
    frames: u64,
}

impl FrameLoop {
    pub fn start(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        if let Some(old) = self.active.replace(handle) {
            debug!("frame loop {:?} replaced by {:?}", old, handle);
        } else {
            debug!("frame loop {:?} started", handle);
        }
        handle
    }

    /// Returns `true` if a loop was running.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                debug!("frame loop {:?} stopped after {} frames", handle, self.frames);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_live(&self, handle: FrameHandle) -> bool {
        self.active == Some(handle)
    }

    /// Total frames run since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs `frame` if `handle` is still the live run.
    pub fn run_frame<F: FnOnce()>(&mut self, handle: FrameHandle, frame: F) -> bool {
        if !self.is_live(handle) {
            return false;
        }
        frame();
        self.frames += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_only_live_handle() {
        let mut frames = FrameLoop::default();
        let first = frames.start();
        let mut calls = 0;
        assert!(frames.run_frame(first, || calls += 1));

        let second = frames.start();
        assert!(!frames.run_frame(first, || calls += 1));
        assert!(frames.run_frame(second, || calls += 1));
        assert_eq!(calls, 2);
        assert_eq!(frames.frames(), 2);
    }

    #[test]
    fn stop_invalidates() {
        let mut frames = FrameLoop::default();
        let handle = frames.start();
        assert!(frames.stop());
        assert!(!frames.stop());
        assert!(!frames.is_running());
        assert!(!frames.run_frame(handle, || panic!("stale frame ran")));
    }
}
