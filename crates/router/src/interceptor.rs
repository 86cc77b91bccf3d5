/// Gate consulted right before a resolved request reaches the host.
///
/// Returning `false` suppresses the navigation entirely.
pub trait Interceptor {
	/// Returns true if the navigation may proceed.
	fn allow(&self) -> bool;
}

impl<F> Interceptor for F
where
	F: Fn() -> bool,
{
	fn allow(&self) -> bool {
		self()
	}
}
