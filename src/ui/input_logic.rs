use crate::geometry::Point;

/// Whether `(x, y)` lies strictly inside the box from `start` to `end`.
/// Points on the edges do not count.
pub fn within_exclusive(x: i32, y: i32, start: Point, end: Point) -> bool {
    start.x() < x && x < end.x() && start.y() < y && y < end.y()
}

/// Whether `(x, y)` is at most `radius` away from `center`.
pub fn within_radius(x: i32, y: i32, center: Point, radius: i32) -> bool {
    let r = i64::from(radius);
    center.distance_squared(Point::new(x, y)) <= r * r
}

/// Restore deadline for a flash started at `now_ms`.
pub fn flash_deadline(now_ms: u64, duration_ms: u32) -> u64 {
    now_ms.saturating_add(u64::from(duration_ms))
}

/// Whether a flash with `deadline_ms` should be restored at `now_ms`.
pub fn flash_expired(now_ms: u64, deadline_ms: u64) -> bool {
    now_ms >= deadline_ms
}
