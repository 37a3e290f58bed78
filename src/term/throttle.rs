//! Render throttling for static screens.
//!
//! Animated content renders every frame. When the screen is static (gradient
//! demo, pause, game over) we still re-render occasionally so a garbled
//! terminal self-heals, but not on every loop iteration.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// (render time, content fingerprint) of the last frame let through.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Dynamic content always renders. Static content renders on a
    /// fingerprint change, otherwise at most once per interval. The first
    /// call always renders.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let decision = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.min_static_interval_ms,
        };

        if decision {
            self.last = Some((now_ms, fingerprint));
        }
        decision
    }
}
