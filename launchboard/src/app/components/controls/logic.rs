/// Restores `low <= high` after one end of the payload range was dragged:
/// the end that moved gives way, it never pushes the other end along.
pub(super) fn reconcile_range(
    mut low: f64,
    mut high: f64,
    low_moved: bool,
    high_moved: bool,
) -> [f64; 2] {
    if low > high {
        if low_moved && !high_moved {
            low = high;
        } else {
            high = low;
        }
    }
    [low, high]
}
