//! Frame-loop gating.
//!
//! The host calls [`Scheduler::request_frame`] whenever an input might make
//! the loop runnable, and [`Scheduler::begin_frame`] at the top of every
//! animation-frame callback. The loop keeps running only while the element
//! intersects the viewport and the document is in the foreground.

#[derive(Clone, Debug)]
pub struct Scheduler {
    intersecting: bool,
    document_active: bool,
    reduced_motion: bool,
    running: bool,
    halted: bool,
}

impl Scheduler {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            intersecting: true,
            document_active: true,
            reduced_motion,
            running: false,
            halted: false,
        }
    }

    pub fn can_run(&self) -> bool {
        self.intersecting && self.document_active && !self.reduced_motion && !self.halted
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true when the caller should schedule a frame now.
    pub fn set_intersecting(&mut self, intersecting: bool) -> bool {
        self.intersecting = intersecting;
        self.request_frame()
    }

    /// Returns true when the caller should schedule a frame now.
    pub fn set_document_active(&mut self, active: bool) -> bool {
        self.document_active = active;
        self.request_frame()
    }

    /// Marks the loop running and returns true if a frame must be scheduled.
    pub fn request_frame(&mut self) -> bool {
        if self.running || !self.can_run() {
            return false;
        }
        self.running = true;
        true
    }

    /// Returns false, and stops the loop, when this frame should not render.
    pub fn begin_frame(&mut self) -> bool {
        if !self.can_run() {
            self.running = false;
            return false;
        }
        true
    }

    /// Host element detached; no further frames, whatever the observers report later.
    pub fn halt(&mut self) {
        self.halted = true;
        self.running = false;
    }
}
