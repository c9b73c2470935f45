use tokio_util::sync::CancellationToken;

use crate::compositor::Compositor;
use crate::frame::Frame;
use crate::sink::DrawingSink;
use crate::time_sample::TimeSource;

/// Drives the compositor at a fixed cadence until cancelled.
///
/// The delay is applied after each presented frame, so the effective period is
/// `interval` plus the time it took to compose and present.
pub struct RenderTask<S, T> {
    interval: std::time::Duration,
    cancellation_token: CancellationToken,
    sink: S,
    clock: T,
    compositor: Compositor,
    process_state: crate::systemd::ProcessState,
}

impl<S, T> RenderTask<S, T>
where
    S: DrawingSink,
    T: TimeSource,
    crate::error::Error: From<S::Error>,
{
    pub fn new(
        interval: std::time::Duration,
        cancellation_token: CancellationToken,
        sink: S,
        clock: T,
        process_state: crate::systemd::ProcessState,
    ) -> Self {
        Self {
            interval,
            cancellation_token,
            sink,
            clock,
            compositor: Compositor::new(),
            process_state,
        }
    }

    /// Runs until the token is cancelled. Any error of the clock or the sink ends the loop.
    pub async fn run(mut self) -> Result<(), crate::error::Error> {
        let mut frame = Frame::default();
        let mut frames: u64 = 0;

        loop {
            let sample = self.clock.now()?;
            self.compositor
                .compose(sample, &mut frame)
                .unwrap_or_else(|never| match never {});

            frame = self.sink.present(frame)?;
            self.process_state.watchdog();
            frames += 1;
            tracing::trace!(?sample, frames, "Presented frame");

            let Some(()) = self
                .cancellation_token
                .run_until_cancelled(tokio::time::sleep(self.interval))
                .await
            else {
                tracing::info!(frames, "Ending render loop");
                break;
            };
        }

        Ok(())
    }
}
