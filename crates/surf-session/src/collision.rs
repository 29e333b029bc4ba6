//! Pairwise collision detection.
//!
//! The check is a full scan against the rest of the population — O(n) per
//! riding surfer per tick, which dominates session cost for large crowds.

use crate::surfer::Surfer;

/// Whether two surfers collide under the shared-water rules.
///
/// - Two floaters (neither bound to a wave) never collide.
/// - Surfers bound to *different* waves never collide.
/// - Otherwise (same wave, or rider vs. floater) they collide iff their
///   Euclidean distance is strictly below `radius`.
///
/// Symmetric by construction: `surfers_collide(a, b, r) == surfers_collide(b, a, r)`.
pub fn surfers_collide(a: &Surfer, b: &Surfer, radius: f64) -> bool {
    match (a.riding, b.riding) {
        (None, None) => false,
        (Some(wa), Some(wb)) if wa != wb => false,
        _ => {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            dx * dx + dy * dy < radius * radius
        }
    }
}

/// Whether `me` collides with any surfer in `others`.
pub fn any_collision<'a, I>(me: &Surfer, others: I, radius: f64) -> bool
where
    I: IntoIterator<Item = &'a Surfer>,
{
    others.into_iter().any(|other| surfers_collide(me, other, radius))
}
