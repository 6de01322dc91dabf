//! Argument presence.

/// Whether an argument value counts as absent.
pub trait Presence {
    fn is_absent(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<P: Presence + ?Sized> Presence for &P {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl Presence for serde_json::Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

/// Argument at `position`, treating positions past the end as absent.
pub(crate) fn absent_at<A: Presence>(args: &[A], position: usize) -> bool {
    args.get(position).map_or(true, Presence::is_absent)
}
