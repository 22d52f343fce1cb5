use crate::app::{LoopReport, RenderLoop};
use crate::config::Config;
use crate::error::Result;
use crate::input::TerminalInput;
use crate::render::{TerminalSession, TerminalSurface};
use std::time::Duration;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Paces presentation at a fixed frame rate.
///
/// The interval is created on first use so a pacer can be built outside a runtime.
#[derive(Debug)]
pub struct FramePacer {
    period: Option<Duration>,
    interval: Option<Interval>,
}

impl FramePacer {
    /// Pacer for `frame_rate` frames per second; zero means unpaced.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            period: Self::frame_period(frame_rate),
            interval: None,
        }
    }

    /// Pacer that never waits.
    pub fn unpaced() -> Self {
        Self::new(0)
    }

    pub fn frame_period(frame_rate: u32) -> Option<Duration> {
        (frame_rate > 0).then(|| Duration::from_secs(1) / frame_rate)
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Wait for the next frame slot. Late frames skip missed slots instead of bursting.
    pub async fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };

        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        interval.tick().await;
    }
}

/// Run the loop interactively on the current terminal until quit or `frame_limit`.
pub async fn run_interactive(config: &Config, frame_limit: Option<u64>) -> Result<LoopReport> {
    let mut session = TerminalSession::enter()?;

    let mut surface = TerminalSurface::stdout(config)?;
    surface.set_key_releases(session.reports_key_releases());
    let mut render_loop = RenderLoop::from_config(TerminalInput::new(), surface, config);
    let mut pacer = FramePacer::new(config.frame_rate);

    let report = render_loop.run(&mut pacer, frame_limit).await;
    log::debug!("{} input events handled", render_loop.input().events_seen());

    session.restore()?;
    report
}
