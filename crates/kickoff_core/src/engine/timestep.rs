//! Frame timing helpers
//!
//! The simulation trusts the dt it is handed. Shells measure wall-clock time
//! and pass it through [`clamp_frame_dt`] first so a stall (window drag,
//! breakpoint, slow disk) cannot tunnel bodies through each other.

/// Nominal frame length at 60 Hz
pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;

/// Longest step the simulation is ever asked to take (s)
pub const MAX_FRAME_DT: f32 = 0.1;

/// Clamp a measured frame duration into `[0, max_dt]`. NaN counts as zero.
pub fn clamp_frame_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Frame length for a fixed update rate; non-positive rates fall back to 60 Hz
pub fn frame_dt_for_rate(hz: f32) -> f32 {
    if hz.is_finite() && hz > 0.0 {
        1.0 / hz
    } else {
        DEFAULT_FRAME_DT
    }
}
