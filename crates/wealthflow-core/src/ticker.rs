// File: crates/wealthflow-core/src/ticker.rs
// Summary: Transfer accumulator (seeded from time of day, grows per tick) and
// the owned timer handle that drives it.
// Notes:
// - Per-tick increment is `rate / (1000ms / interval_ms)`, so the average
//   growth rate is independent of the chosen interval.
// - Once stopped, an accumulator never changes again. The Ticker stops its
//   accumulator on cancel and on drop, under the same lock the timer thread
//   ticks with, so no tick can land after teardown.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveTime, TimeZone, Timelike};

use crate::error::{ChartError, Result};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickerConfig {
    pub rate_per_second: f64,
    pub interval: Duration,
}

impl TickerConfig {
    /// Rate must be finite and positive; interval between 1ms and 1s.
    pub fn try_new(rate_per_second: f64, interval: Duration) -> Result<Self> {
        if interval < Duration::from_millis(1) || interval > Duration::from_secs(1) {
            return Err(ChartError::InvalidInterval(interval));
        }
        if !rate_per_second.is_finite() || rate_per_second <= 0.0 {
            return Err(ChartError::InvalidRate(rate_per_second));
        }
        Ok(Self { rate_per_second, interval })
    }

    fn interval_ms(&self) -> f64 {
        self.interval.as_nanos() as f64 / 1e6
    }

    pub fn ticks_per_second(&self) -> f64 {
        1000.0 / self.interval_ms()
    }

    pub fn increment_per_tick(&self) -> f64 {
        self.rate_per_second / self.ticks_per_second()
    }

    pub fn per_day(&self) -> f64 {
        self.rate_per_second * SECONDS_PER_DAY
    }
}

impl Default for TickerConfig {
    /// ~£576B a year to the top: £18,264 every second, polled every 50ms.
    fn default() -> Self {
        Self { rate_per_second: 18_264.0, interval: Duration::from_millis(50) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Created, waiting for the time-of-day seed.
    Seeding,
    Ticking,
    /// Cancelled; terminal.
    Stopped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransferAccumulator {
    config: TickerConfig,
    value: f64,
    phase: Phase,
    ticks: u64,
    carry: Duration,
}

impl TransferAccumulator {
    pub fn new(config: TickerConfig) -> Self {
        Self { config, value: 0.0, phase: Phase::Seeding, ticks: 0, carry: Duration::ZERO }
    }

    /// Seed from whole seconds elapsed since local midnight and start ticking.
    /// Only the first call has any effect.
    pub fn seed(&mut self, seconds_since_midnight: u32) -> f64 {
        if self.phase == Phase::Seeding {
            self.value = seconds_since_midnight as f64 * self.config.rate_per_second;
            self.phase = Phase::Ticking;
            tracing::debug!(seconds_since_midnight, value = self.value, "seeded transfer accumulator");
        }
        self.value
    }

    pub fn seed_at(&mut self, time: NaiveTime) -> f64 {
        self.seed(time.num_seconds_from_midnight())
    }

    /// Seed from the time actually elapsed since midnight in `now`'s zone.
    /// Differs from [`TransferAccumulator::seed_at`] on days with a clock change.
    pub fn seed_since_midnight<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> f64 {
        self.seed(elapsed_since_midnight(now))
    }

    /// Seed from the local clock.
    pub fn seed_now(&mut self) -> f64 {
        self.seed_since_midnight(&Local::now())
    }

    /// Apply one tick. Returns false (and changes nothing) unless ticking.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Ticking {
            return false;
        }
        self.value += self.config.increment_per_tick();
        self.ticks += 1;
        tracing::trace!(value = self.value, ticks = self.ticks, "tick");
        true
    }

    /// Apply `n` ticks; returns how many were applied.
    pub fn tick_n(&mut self, n: u64) -> u64 {
        if self.phase != Phase::Ticking {
            return 0;
        }
        self.value += self.config.increment_per_tick() * n as f64;
        self.ticks += n;
        n
    }

    /// Apply every whole tick that fits in `elapsed` plus any remainder left
    /// from earlier calls. For hosts that poll instead of running a timer.
    pub fn catch_up(&mut self, elapsed: Duration) -> u64 {
        if self.phase != Phase::Ticking {
            return 0;
        }
        let total = (self.carry + elapsed).as_nanos();
        let interval = self.config.interval.as_nanos();
        self.carry = Duration::from_nanos((total % interval) as u64);
        self.tick_n((total / interval) as u64)
    }

    pub fn stop(&mut self) {
        if self.phase != Phase::Stopped {
            tracing::debug!(value = self.value, ticks = self.ticks, "transfer accumulator stopped");
        }
        self.phase = Phase::Stopped;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }
}

/// Stop flag shared with the timer thread.
#[derive(Clone)]
struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> Self {
        Self { inner: Arc::new((Mutex::new(false), Condvar::new())) }
    }

    fn trigger(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    /// Block until `deadline` or the stop flag. Returns true if stopped.
    fn wait_until(&self, deadline: Instant) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if *stopped {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            stopped = cvar.wait_timeout(stopped, deadline - now).unwrap_or_else(PoisonError::into_inner).0;
        }
    }
}

/// Seconds from the start of `now`'s calendar day to `now`. Falls back to
/// the wall-clock reading when midnight itself does not exist in the zone.
fn elapsed_since_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    let wall = now.time().num_seconds_from_midnight();
    let Some(midnight) = now.date_naive().and_hms_opt(0, 0, 0) else { return wall };
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => u32::try_from(now.clone().signed_duration_since(start).num_seconds()).unwrap_or(wall),
        None => wall,
    }
}

fn lock(acc: &Mutex<TransferAccumulator>) -> MutexGuard<'_, TransferAccumulator> {
    acc.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owned timer driving a [`TransferAccumulator`] on a background thread.
///
/// Starting seeds the accumulator (from the local clock if still seeding).
/// [`Ticker::cancel`] stops and joins the thread; dropping the handle stops
/// it without joining.
pub struct Ticker {
    acc: Arc<Mutex<TransferAccumulator>>,
    stop: StopSignal,
    thread: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    pub fn start(mut acc: TransferAccumulator) -> Self {
        if acc.phase() == Phase::Seeding {
            acc.seed_now();
        }
        let interval = acc.config().interval;
        let acc = Arc::new(Mutex::new(acc));
        let stop = StopSignal::new();

        let thread = {
            let acc = Arc::clone(&acc);
            let stop = stop.clone();
            thread::spawn(move || {
                // Fixed schedule so waiting jitter does not accumulate.
                let mut deadline = Instant::now() + interval;
                while !stop.wait_until(deadline) {
                    if !lock(&acc).tick() {
                        break;
                    }
                    deadline += interval;
                }
            })
        };
        tracing::debug!(?interval, "ticker started");
        Self { acc, stop, thread: Some(thread) }
    }

    pub fn value(&self) -> f64 {
        lock(&self.acc).value()
    }

    pub fn snapshot(&self) -> TransferAccumulator {
        lock(&self.acc).clone()
    }

    /// Stop the timer, join its thread and return the final state.
    pub fn cancel(mut self) -> TransferAccumulator {
        self.halt();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        lock(&self.acc).clone()
    }

    fn halt(&self) {
        lock(&self.acc).stop();
        self.stop.trigger();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.halt();
        // Stop only; cancel() is the joining path.
    }
}

/// Two wealth pools compared side by side (e.g. bottom 50% vs top 1%).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolComparison {
    pub lower: f64,
    pub upper: f64,
}

impl PoolComparison {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn combined(&self) -> f64 {
        self.lower + self.upper
    }

    /// Percent of the combined total held by the lower pool.
    pub fn lower_share(&self) -> f64 {
        percent(self.lower, self.combined())
    }

    pub fn upper_share(&self) -> f64 {
        percent(self.upper, self.combined())
    }

    /// How many times larger the upper pool is; `None` when the lower pool is empty.
    pub fn ratio(&self) -> Option<f64> {
        (self.lower != 0.0).then(|| self.upper / self.lower)
    }
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}
