use bitflags::bitflags;

bitflags! {
	/// Navigation flags forwarded verbatim to the host's navigation primitive.
	///
	/// The named constants cover the flags hosts commonly understand. Bits
	/// outside them are kept as-is, so host-specific flags can be passed with
	/// [`NavigationFlags::from_bits_retain`].
	///
	/// ```
	/// use waypoint_intent::NavigationFlags;
	///
	/// let flags = NavigationFlags::NEW_TASK | NavigationFlags::CLEAR_TOP;
	/// assert!(flags.contains(NavigationFlags::CLEAR_TOP));
	/// ```
	#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
	pub struct NavigationFlags: u32 {
		/// Start the destination in a new task.
		const NEW_TASK         = 0b0000_0000_0001;
		/// Pop destinations above an existing instance of the target.
		const CLEAR_TOP        = 0b0000_0000_0010;
		/// Reuse the target if it is already on top.
		const SINGLE_TOP       = 0b0000_0000_0100;
		/// Do not keep the destination in the back stack.
		const NO_HISTORY       = 0b0000_0000_1000;
		/// Clear the task before starting the destination.
		const CLEAR_TASK       = 0b0000_0001_0000;
		/// Bring an existing instance to the front instead of recreating it.
		const REORDER_TO_FRONT = 0b0000_0010_0000;
		/// Suppress the host's transition animation.
		const NO_ANIMATION     = 0b0000_0100_0000;
	}
}
