use std::time::{Duration, Instant};

use crate::core::CancellationToken;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Source of frames paced by the host
///
/// `next()` returns when the next frame is due; `None` means the host is gone.
pub trait FrameSource: Iterator<Item = FrameInfo> {
    /// Get the total number of frames yielded
    fn frame_count(&self) -> u64;
}

/// Infinite iterator that yields frame information as fast as it is polled
///
/// The window event loop drives this once per `RedrawRequested`, so pacing
/// comes from the surface's vsync.
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

impl FrameSource for FrameIterator {
    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

/// Frame source that sleeps to hold a fixed rate, for runs without a display
pub struct PacedFrames {
    inner: FrameIterator,
    interval: Duration,
    next_due: Instant,
}

impl PacedFrames {
    pub fn new(hz: f32) -> Self {
        let interval = Duration::from_secs_f32(1.0 / hz.max(1.0));
        Self {
            inner: FrameIterator::new(),
            interval,
            next_due: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Iterator for PacedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        if now < self.next_due {
            std::thread::sleep(self.next_due - now);
        }
        // Don't try to catch up after a stall
        self.next_due = Instant::now().max(self.next_due) + self.interval;
        self.inner.next()
    }
}

impl FrameSource for PacedFrames {
    fn frame_count(&self) -> u64 {
        self.inner.frame_count()
    }
}

/// Next frame from `source`, or `None` once `token` is cancelled
///
/// A cancelled token never advances the source. Hosts that receive frames as
/// events (the winit redraw callback) call this once per event.
pub fn next_frame<S>(source: &mut S, token: &CancellationToken) -> Option<FrameInfo>
where
    S: FrameSource + ?Sized,
{
    if token.is_cancelled() {
        return None;
    }
    source.next()
}

/// Run `step` once per frame until `token` is cancelled or the source ends
///
/// The token is checked before every frame. Returns the number of frames run.
pub fn run_until_cancelled<S, F>(source: &mut S, token: &CancellationToken, mut step: F) -> u64
where
    S: FrameSource + ?Sized,
    F: FnMut(&FrameInfo),
{
    let mut ran = 0;
    while let Some(frame) = next_frame(source, token) {
        step(&frame);
        ran += 1;
    }
    ran
}

/// Frames-per-second meter, reporting once per interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    elapsed: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count a frame; returns the new reading when an interval completes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }
}
