//! Integer square root by binary search.

/// Returns the floor of the square root of `n`.
///
/// Values below two are their own root. Otherwise the search narrows `[low, high]`
/// over candidate roots in `[1, n]`, keeping the largest `mid` with
/// `mid * mid <= n`. The comparison is written as `mid <= n / mid` so the square
/// never has to be formed.
///
/// # Arguments
///
/// * `n` - The radicand.
///
/// # Returns
///
/// The largest `r` such that `r * r <= n`.
pub const fn software_isqrt(n: u32) -> u32 {
    if n < 2 {
        return n;
    }

    let mut low = 1;
    let mut high = n;
    let mut ans = 0;
    while low <= high {
        let mid = low + (high - low) / 2;
        if mid <= n / mid {
            ans = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    ans
}
