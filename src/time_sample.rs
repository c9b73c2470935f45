/// Wall-clock time decomposed into the fields the clock face is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl From<time::Time> for TimeSample {
    fn from(time: time::Time) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            millisecond: time.millisecond(),
        }
    }
}

pub trait TimeSource {
    fn now(&mut self) -> Result<TimeSample, crate::error::Error>;
}

/// Reads the local wall clock.
///
/// Determining the local offset is only sound while the process is single threaded,
/// which is why the binary runs on a current-thread runtime.
#[derive(Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&mut self) -> Result<TimeSample, crate::error::Error> {
        let now = time::OffsetDateTime::now_local().map_err(crate::error::Error::TimeOffset)?;
        Ok(TimeSample::from(now.time()))
    }
}

/// Always reports the same instant. Used for previews of a given time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeSample);

impl TimeSource for FixedClock {
    fn now(&mut self) -> Result<TimeSample, crate::error::Error> {
        Ok(self.0)
    }
}
