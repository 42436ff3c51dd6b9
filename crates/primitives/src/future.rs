use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

/// A pinned, boxed future that is not required to be Send.
pub type BoxFutureLocal<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Work that continues after the callable that produced it has returned.
///
/// The engine never drives a handle itself; it hands it to the host's
/// scheduling facility, which owns it from then on.
pub struct ResumableHandle {
	label: Box<str>,
	fut: BoxFutureLocal<'static, ()>,
}

impl ResumableHandle {
	pub fn new(label: impl Into<Box<str>>, fut: impl Future<Output = ()> + 'static) -> Self {
		Self {
			label: label.into(),
			fut: Box::pin(fut),
		}
	}

	/// Name of the callable that produced this handle.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Polls the underlying work once without registering for wakeups.
	///
	/// Returns true once the work has finished. Hosts with a real executor
	/// should use [`into_future`](Self::into_future) instead.
	pub fn poll_once(&mut self) -> bool {
		let mut cx = Context::from_waker(Waker::noop());
		matches!(self.fut.as_mut().poll(&mut cx), Poll::Ready(()))
	}

	pub fn into_future(self) -> BoxFutureLocal<'static, ()> {
		self.fut
	}
}

impl fmt::Debug for ResumableHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResumableHandle").field("label", &self.label).finish_non_exhaustive()
	}
}
