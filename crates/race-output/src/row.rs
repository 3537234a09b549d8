//! Plain data row types written by output backends.

/// One competitor's state in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    pub tick:          u64,
    pub elapsed_secs:  f64,
    pub competitor_id: u32,
    /// Normalized position in `[0, 1]`.
    pub position:      f64,
    /// `position` scaled to the race distance.
    pub distance_m:    f64,
    pub velocity:      f64,
    pub stamina:       f64,
    pub finished:      bool,
    /// Whether this competitor led the frame.
    pub leader:        bool,
}

/// One ranked placing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub rank:             u32,
    pub competitor_id:    u32,
    pub finish_tick:      u64,
    pub finish_time_secs: f64,
    pub elapsed_secs:     f64,
    pub final_velocity:   f64,
}
