//! Stack trace snapshots
//!
//! A [`StackTrace`] is taken once, when the first node of a chain is built,
//! and shared by every node that later wraps it. Frames are recorded
//! unresolved; symbols are only looked up when the trace is rendered.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

#[cfg(feature = "backtrace")]
use backtrace::{Backtrace, BacktraceFrame};

/// Capability of an error node that carries a stack trace.
pub trait StackTracer {
    fn stack_trace(&self) -> &StackTrace;
}

/// Immutable snapshot of the call stack at the point an error was created.
///
/// Cloning is cheap and yields the same snapshot. Two traces compare equal
/// only when they come from the same capture.
#[derive(Clone)]
pub struct StackTrace {
    inner: Arc<Snapshot>,
}

struct Snapshot {
    location: &'static Location<'static>,
    #[cfg(feature = "backtrace")]
    frames: Vec<BacktraceFrame>,
}

impl StackTrace {
    /// Capture the current stack.
    ///
    /// `skip` is the number of frames directly above this call that belong to
    /// the caller's own plumbing and should not appear in the trace. The
    /// recorded location is the first caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let location = Location::caller();

        #[cfg(feature = "backtrace")]
        let frames = capture_frames(skip);

        #[cfg(feature = "backtrace")]
        tracing::trace!(skip, frames = frames.len(), %location, "captured stack trace");
        #[cfg(not(feature = "backtrace"))]
        tracing::trace!(skip, %location, "captured caller location");

        Self {
            inner: Arc::new(Snapshot {
                location,
                #[cfg(feature = "backtrace")]
                frames,
            }),
        }
    }

    /// Source location of the call that created the originating error.
    pub fn location(&self) -> &'static Location<'static> {
        self.inner.location
    }

    /// Unresolved native frames, innermost first.
    #[cfg(feature = "backtrace")]
    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.inner.frames
    }

    /// Resolve symbol names and file positions for the recorded frames.
    #[cfg(feature = "backtrace")]
    pub fn resolve(&self) -> Backtrace {
        let mut backtrace = Backtrace::from(self.inner.frames.clone());
        backtrace.resolve();
        backtrace
    }

    /// Whether both handles refer to the same capture.
    pub fn same_capture(&self, other: &StackTrace) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(feature = "backtrace")]
#[inline(never)]
fn capture_frames(skip: usize) -> Vec<BacktraceFrame> {
    let frames = Backtrace::new_unresolved().frames().to_vec();
    let anchor = capture_frames as fn(usize) -> Vec<BacktraceFrame> as usize;
    let idx = frames
        .iter()
        .position(|frame| frame.symbol_address() as usize == anchor);

    trim_frames(frames, idx, skip)
}

/// Drop the capture machinery from the top of a raw trace.
///
/// `anchor` is the index of `capture_frames`; the frame after it is
/// `StackTrace::capture`, and `skip` more frames belong to the caller's own
/// constructors. When `skip` would consume the whole trace only the
/// machinery is dropped.
#[cfg(any(feature = "backtrace", test))]
fn trim_frames<T>(frames: Vec<T>, anchor: Option<usize>, skip: usize) -> Vec<T> {
    let Some(idx) = anchor else {
        tracing::debug!(
            frames = frames.len(),
            "capture frame not found in backtrace, keeping untrimmed trace"
        );
        return frames;
    };

    let start = idx + 2 + skip;
    if start < frames.len() {
        frames.into_iter().skip(start).collect()
    } else {
        frames.into_iter().skip(idx + 2).collect()
    }
}

impl PartialEq for StackTrace {
    fn eq(&self, other: &Self) -> bool {
        self.same_capture(other)
    }
}

impl Eq for StackTrace {}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("StackTrace");
        d.field("location", &format_args!("{}", self.inner.location));
        #[cfg(feature = "backtrace")]
        d.field("frames", &self.inner.frames.len());
        d.finish()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}", self.inner.location)?;

        #[cfg(feature = "backtrace")]
        write!(f, "\n{:?}", self.resolve())?;

        Ok(())
    }
}
