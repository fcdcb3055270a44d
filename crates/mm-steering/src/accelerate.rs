//! Car-following acceleration models.
//!
//! An accelerator answers one question per tick: given the current speed,
//! the allowed speed, and the nearest obstruction ahead, how much should the
//! speed change this tick?  Obstruction distance uses
//! [`UNOBSTRUCTED`][mm_route::UNOBSTRUCTED] (infinity) for a clear road, so
//! models need no separate free-flow branch.

/// Per-tick speed-change policy.
pub trait VehicleAccelerator {
    /// Speed delta for this tick, in m/s.
    ///
    /// `distance_ahead_m` is the gap to the nearest obstruction (vehicle,
    /// red light, edge end) and `lead_speed_mps` that obstruction's speed.
    /// A non-positive gap must yield `-current_speed_mps`: the vehicle has
    /// arrived at the obstruction and stops.
    fn calculate_speed_change(
        &self,
        current_speed_mps: f64,
        max_speed_mps: f64,
        distance_ahead_m: f64,
        lead_speed_mps: f64,
    ) -> f64;
}

// ── SafeBrakingAccelerator ────────────────────────────────────────────────────

/// Kinematic safe-speed model.
///
/// Caps the next speed at the highest value from which the vehicle can still
/// brake to the lead speed within the available gap:
///
/// ```text
/// v_safe = -b·τ + sqrt((b·τ)² + v_lead² + 2·b·gap)
/// ```
///
/// with braking strength `b` and reaction time `τ`.  With `τ` equal to the
/// tick duration the produced speed never carries the vehicle past the
/// obstruction within one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SafeBrakingAccelerator {
    /// Speed gain limit per reaction interval, m/s².
    pub acceleration: f64,
    /// Braking strength `b` assumed by the safe-speed bound, m/s².
    pub deceleration: f64,
    /// Reaction time `τ`, seconds.
    pub reaction_secs: f64,
}

impl Default for SafeBrakingAccelerator {
    fn default() -> Self {
        Self {
            acceleration: 1_000.0,
            deceleration: 1.67,
            reaction_secs: 1.0,
        }
    }
}

impl VehicleAccelerator for SafeBrakingAccelerator {
    fn calculate_speed_change(
        &self,
        current_speed_mps: f64,
        max_speed_mps: f64,
        distance_ahead_m: f64,
        lead_speed_mps: f64,
    ) -> f64 {
        if distance_ahead_m <= 0.0 {
            return -current_speed_mps;
        }
        let bt = self.deceleration * self.reaction_secs;
        let v_safe = -bt
            + (bt * bt + lead_speed_mps * lead_speed_mps
                + 2.0 * self.deceleration * distance_ahead_m)
                .sqrt();
        let target = v_safe.min(max_speed_mps);
        (target - current_speed_mps)
            .clamp(-current_speed_mps, self.acceleration * self.reaction_secs)
    }
}

// ── IntelligentDriverAccelerator ──────────────────────────────────────────────

/// Intelligent Driver Model (IDM).
///
/// Smoother than [`SafeBrakingAccelerator`] and better suited to convoy
/// dynamics, at the cost of a sluggish launch from standstill.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntelligentDriverAccelerator {
    /// Desired time headway to the lead vehicle, seconds.
    pub safe_time_headway: f64,
    /// Maximum acceleration, m/s².
    pub max_acceleration: f64,
    /// Comfortable braking deceleration, m/s².
    pub comfortable_deceleration: f64,
    /// Minimum standstill gap in congestion, metres.
    pub gap_in_congestion: f64,
    /// Extra convoy gap at top speed, metres; scaled by `sqrt(v / v_max)`.
    pub gap_in_convoy: f64,
    /// Free-flow acceleration exponent.
    pub acceleration_exponent: f64,
}

impl Default for IntelligentDriverAccelerator {
    fn default() -> Self {
        Self {
            safe_time_headway: 1.6,
            max_acceleration: 0.73,
            comfortable_deceleration: 1.67,
            gap_in_congestion: 2.0,
            gap_in_convoy: 0.0,
            acceleration_exponent: 4.0,
        }
    }
}

impl VehicleAccelerator for IntelligentDriverAccelerator {
    fn calculate_speed_change(
        &self,
        current_speed_mps: f64,
        max_speed_mps: f64,
        distance_ahead_m: f64,
        lead_speed_mps: f64,
    ) -> f64 {
        if distance_ahead_m <= 0.0 {
            return -current_speed_mps;
        }
        // Speed differences count in magnitude only.
        let closing = (current_speed_mps - lead_speed_mps).abs();
        let dynamic = (current_speed_mps * closing)
            / (2.0 * (self.max_acceleration * self.comfortable_deceleration).sqrt());
        let (convoy, free_term) = if max_speed_mps > 0.0 {
            let ratio = current_speed_mps / max_speed_mps;
            (
                self.gap_in_convoy * ratio.sqrt(),
                ratio.powf(self.acceleration_exponent),
            )
        } else {
            (self.gap_in_convoy, 1.0)
        };
        let desired_gap = self.gap_in_congestion
            + convoy
            + current_speed_mps * self.safe_time_headway
            + dynamic;
        let interaction = desired_gap / distance_ahead_m;
        let accel = self.max_acceleration * (1.0 - free_term - interaction * interaction);
        accel.max(-current_speed_mps)
    }
}
