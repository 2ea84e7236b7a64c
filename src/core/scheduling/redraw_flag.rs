use std::sync::atomic::{AtomicU64, Ordering};

/// The "needs redraw" signal shared between input handling and rendering.
///
/// Requests are counted rather than stored as a bool: a render only retires
/// the requests that were pending when it started, so a request that lands
/// while a frame is in progress survives that frame.
#[derive(Debug, Default)]
pub struct RedrawFlag {
    requested: AtomicU64,
    rendered: AtomicU64,
}

/// Proof that a render started; handed back to [`RedrawFlag::finish_render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RenderTicket {
    generation: u64,
}

impl RenderTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl RedrawFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a flag that already asks for a first frame.
    #[must_use]
    pub fn dirty() -> Self {
        let flag = Self::new();
        flag.request();
        flag
    }

    pub fn request(&self) {
        self.requested.fetch_add(1, Ordering::AcqRel);
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.requested.load(Ordering::Acquire) > self.rendered.load(Ordering::Acquire)
    }

    /// Returns a ticket when a redraw is pending. The flag stays set until the
    /// ticket is returned through `finish_render`.
    pub fn begin_render(&self) -> Option<RenderTicket> {
        let requested = self.requested.load(Ordering::Acquire);

        if requested > self.rendered.load(Ordering::Acquire) {
            Some(RenderTicket {
                generation: requested,
            })
        } else {
            None
        }
    }

    pub fn finish_render(&self, ticket: RenderTicket) {
        self.rendered.fetch_max(ticket.generation, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flag_is_clean() {
        let flag = RedrawFlag::new();

        assert!(!flag.is_dirty());
        assert!(flag.begin_render().is_none());
    }

    #[test]
    fn repeated_requests_are_retired_by_one_render() {
        let flag = RedrawFlag::new();

        flag.request();
        flag.request();
        assert!(flag.is_dirty());

        let ticket = flag.begin_render().expect("redraw should be pending");
        flag.finish_render(ticket);

        assert!(!flag.is_dirty());
        assert!(flag.begin_render().is_none());
    }

    #[test]
    fn flag_stays_set_until_render_finishes() {
        let flag = RedrawFlag::dirty();

        let ticket = flag.begin_render().expect("redraw should be pending");
        assert!(flag.is_dirty());

        flag.finish_render(ticket);
        assert!(!flag.is_dirty());
    }

    #[test]
    fn request_during_render_is_not_lost() {
        let flag = RedrawFlag::dirty();

        let ticket = flag.begin_render().expect("redraw should be pending");
        flag.request();
        flag.finish_render(ticket);

        assert!(flag.is_dirty());

        let next = flag.begin_render().expect("second redraw should be pending");
        assert!(next.generation() > ticket.generation());
        flag.finish_render(next);
        assert!(!flag.is_dirty());
    }

    #[test]
    fn stale_ticket_does_not_rewind_progress() {
        let flag = RedrawFlag::dirty();
        let first = flag.begin_render().unwrap();
        flag.request();
        let second = flag.begin_render().unwrap();

        flag.finish_render(second);
        flag.finish_render(first);

        assert!(!flag.is_dirty());
    }
}
