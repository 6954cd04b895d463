//! Integer helpers for rational time arithmetic.

/// Greatest common divisor.
///
/// Returns 0 when either input is 0. This is a deliberate degenerate-case
/// policy rather than an error: callers treat a zero duration as "no common
/// grid" and handle it themselves.
pub fn gcd(m: u64, n: u64) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }
    let (mut m, mut n) = (m, n);
    while n != 0 {
        let r = m % n;
        m = n;
        n = r;
    }
    m
}

/// Least common multiple. Returns 0 when either input is 0.
pub fn lcm(m: u64, n: u64) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }
    (m / gcd(m, n)) * n
}
