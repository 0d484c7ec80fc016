/// Trial division by odd numbers up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
  if n < 2 {
    return false;
  }
  if n == 2 {
    return true;
  }
  if n % 2 == 0 {
    return false;
  }
  (3..).step_by(2).take_while(|&i| i <= n / i).all(|i| n % i != 0)
}

/// All primes in ascending order.
pub fn primes() -> impl Iterator<Item = u64> {
  (2..).filter(|&n| is_prime(n))
}
