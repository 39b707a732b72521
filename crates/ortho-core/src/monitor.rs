// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Frame-rate and page-switch timing

use std::fmt;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Frame-rate and page-switch timing
///
/// A monitor is owned by whoever drives frames (usually via
/// [`crate::PagingCoordinator::with_monitor`]) and is active only between
/// [`Self::start`] and [`Self::stop`].
#[derive(Clone, Debug, Default)]
pub struct FrameMonitor {
    running: bool,
    window_start: Option<Instant>,
    frames: u32,
    fps: Option<f32>,
    switch_start: Option<Instant>,
    last_switch: Option<Duration>,
}

/// A snapshot of [`FrameMonitor`] measurements
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Frames per second over the last complete window
    pub fps: Option<f32>,
    /// Duration of the last completed page switch
    pub last_page_switch: Option<Duration>,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fps {
            Some(fps) => write!(f, "FPS: {fps:.0}")?,
            None => write!(f, "FPS: --")?,
        }
        if let Some(d) = self.last_page_switch {
            write!(f, " | switch: {:.1}ms", d.as_secs_f64() * 1e3)?;
        }
        Ok(())
    }
}

impl FrameMonitor {
    /// Construct (stopped)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring
    pub fn start(&mut self, now: Instant) {
        log::debug!("FrameMonitor::start");
        self.running = true;
        self.window_start = Some(now);
        self.frames = 0;
    }

    /// Stop measuring
    ///
    /// Results obtained so far remain available.
    pub fn stop(&mut self) {
        log::debug!("FrameMonitor::stop");
        self.running = false;
        self.window_start = None;
        self.switch_start = None;
    }

    /// True between [`Self::start`] and [`Self::stop`]
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record a frame
    ///
    /// Frames per second are published each time a full second has elapsed.
    pub fn frame(&mut self, now: Instant) {
        let Some(start) = self.window_start else {
            return;
        };
        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= WINDOW {
            let fps = self.frames as f32 / elapsed.as_secs_f32();
            log::trace!("FrameMonitor: fps={fps}");
            self.fps = Some(fps);
            self.frames = 0;
            self.window_start = Some(now);
        }
    }

    /// Last published frames per second
    #[inline]
    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    /// Note the start of a page switch
    ///
    /// Ignored when not running or if a switch is already being timed.
    pub fn begin_page_switch(&mut self, now: Instant) {
        if self.running && self.switch_start.is_none() {
            self.switch_start = Some(now);
        }
    }

    /// Note the end of a page switch, returning its duration
    pub fn end_page_switch(&mut self, now: Instant) -> Option<Duration> {
        let start = self.switch_start.take()?;
        let d = now.saturating_duration_since(start);
        self.last_switch = Some(d);
        Some(d)
    }

    /// Current measurements
    pub fn report(&self) -> FrameReport {
        FrameReport {
            fps: self.fps,
            last_page_switch: self.last_switch,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fps_over_one_second() {
        let t0 = Instant::now();
        let mut m = FrameMonitor::new();
        m.frame(t0);
        assert_eq!(m.fps(), None);

        m.start(t0);
        for i in 1..=60u64 {
            m.frame(t0 + Duration::from_micros(i * 16_667));
        }
        let fps = m.fps().unwrap();
        assert!((fps - 60.0).abs() < 0.1);
        assert_eq!(m.report().to_string(), "FPS: 60");
    }

    #[test]
    fn page_switch_timing() {
        let t0 = Instant::now();
        let mut m = FrameMonitor::new();
        m.begin_page_switch(t0);
        assert_eq!(m.end_page_switch(t0), None);

        m.start(t0);
        m.begin_page_switch(t0);
        m.begin_page_switch(t0 + Duration::from_millis(100));
        let d = m.end_page_switch(t0 + Duration::from_millis(250));
        assert_eq!(d, Some(Duration::from_millis(250)));
        m.stop();
        assert!(!m.is_running());
        let report = m.report();
        assert_eq!(report.last_page_switch, Some(Duration::from_millis(250)));
        assert_eq!(report.to_string(), "FPS: -- | switch: 250.0ms");
    }
}
