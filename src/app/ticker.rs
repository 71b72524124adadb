use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::app::session::ClockSession;
use crate::domain::ports::{Clock, DisplaySink};
use crate::utils::error::Result;

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Samples the session once per period and hands the frame to a sink.
///
/// The interval lives inside [`Ticker::run`], so it is cancelled as soon as
/// `run` returns or its future is dropped.
pub struct Ticker<C: Clock, S: DisplaySink> {
    session: ClockSession<C>,
    sink: S,
    period: Duration,
    max_ticks: Option<u64>,
}

impl<C: Clock, S: DisplaySink> Ticker<C, S> {
    pub fn new(session: ClockSession<C>, sink: S) -> Self {
        Self {
            session,
            sink,
            period: DEFAULT_TICK,
            max_ticks: None,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn session_mut(&mut self) -> &mut ClockSession<C> {
        &mut self.session
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs until `shutdown` turns true (or its sender is dropped) or
    /// `max_ticks` frames have been rendered. Returns the number rendered.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<u64> {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            "⏱️ Ticker started: period={}ms, max_ticks={:?}",
            self.period.as_millis(),
            self.max_ticks
        );

        let mut ticks = 0u64;
        loop {
            if *shutdown.borrow() || self.max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }

            tokio::select! {
                _ = interval.tick() => {
                    let frame = self.session.frame();
                    self.sink.render(&frame)?;
                    ticks += 1;
                    tracing::trace!("tick {} rendered ({:?})", ticks, frame.source);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        tracing::debug!("Shutdown sender dropped, stopping ticker");
                        break;
                    }
                }
            }
        }

        tracing::info!("🛑 Ticker stopped after {} ticks", ticks);
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::terminal::RecordingSink;
    use crate::core::converter::TimeConversionEngine;
    use crate::domain::model::{CustomTimeRequest, FrameSource, Zone};
    use chrono::{TimeZone, Utc};

    fn session() -> ClockSession<FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
        ClockSession::new(TimeConversionEngine::new(clock))
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_exactly_max_ticks() {
        let (_tx, rx) = watch::channel(false);
        let mut ticker = Ticker::new(session(), RecordingSink::default()).with_max_ticks(Some(3));

        let ticks = ticker.run(rx).await.unwrap();
        assert_eq!(ticks, 3);

        let sink = ticker.into_sink();
        assert_eq!(sink.frames.len(), 3);
        assert!(sink.frames.iter().all(|f| f.source == FrameSource::Live));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_shutdown_signal() {
        let (tx, rx) = watch::channel(false);
        let mut ticker = Ticker::new(session(), RecordingSink::default());

        let handle = tokio::spawn(async move {
            let ticks = ticker.run(rx).await.unwrap();
            (ticks, ticker.into_sink())
        });

        tokio::time::sleep(Duration::from_millis(2500)).await;
        tx.send(true).unwrap();

        let (ticks, sink) = handle.await.unwrap();
        // ticks at 0s, 1s, 2s
        assert_eq!(ticks, 3);
        assert_eq!(sink.frames.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_time_is_rendered_when_pinned() {
        let (_tx, rx) = watch::channel(false);
        let mut ticker = Ticker::new(session(), RecordingSink::default()).with_max_ticks(Some(2));
        ticker
            .session_mut()
            .submit(CustomTimeRequest::new("2026-01-15", "12:00", Zone::Ist))
            .unwrap();

        ticker.run(rx).await.unwrap();
        let sink = ticker.into_sink();
        assert!(sink.frames.iter().all(|f| f.source == FrameSource::Custom));
        assert_eq!(sink.frames[0].result.london.hours, 6);
    }
}
