//! Injected design logging
//!
//! The pipeline never touches process-wide logging state. Callers pass a
//! [`DesignLog`] handle into the design call; its lifetime is the call's.
//! [`NullLog`] discards everything, [`TracingLog`] forwards to `tracing`
//! and [`DefmtLog`] forwards over defmt on embedded targets.

use core::fmt;

/// Severity of a design log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Per-section pairing detail
    Debug,
    /// Design summaries
    Info,
    /// Degenerate but recoverable inputs
    Warn,
}

/// Logging capability handed to a design call.
pub trait DesignLog {
    /// Record one message.
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);
}

impl<T: DesignLog + ?Sized> DesignLog for &T {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).log(level, args);
    }
}

/// Logger that discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLog;

impl DesignLog for NullLog {
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}
}

/// Logger that forwards records to the `tracing` macros.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

#[cfg(feature = "tracing")]
impl DesignLog for TracingLog {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", args),
            LogLevel::Info => tracing::info!("{}", args),
            LogLevel::Warn => tracing::warn!("{}", args),
        }
    }
}

/// Logger that forwards records over defmt.
#[cfg(feature = "defmt")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtLog;

#[cfg(feature = "defmt")]
impl DesignLog for DefmtLog {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let message = defmt::Display2Format(&args);
        match level {
            LogLevel::Debug => defmt::debug!("{}", message),
            LogLevel::Info => defmt::info!("{}", message),
            LogLevel::Warn => defmt::warn!("{}", message),
        }
    }
}
