/// The permutation that follows `items` in lexicographic order.
///
/// `items` is left untouched. If it is already the last permutation (sorted
/// in non-increasing order), an unchanged copy is returned.
pub fn next_permutation<T: Ord + Clone>(items: &[T]) -> Vec<T> {
  let mut next = items.to_vec();
  advance(&mut next);
  next
}

/// `items` followed by every later permutation, in lexicographic order.
pub fn permutations<T: Ord + Clone>(items: &[T]) -> Permutations<T> {
  Permutations { next: Some(items.to_vec()) }
}

#[derive(Debug, Clone)]
pub struct Permutations<T> {
  next: Option<Vec<T>>,
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
  type Item = Vec<T>;

  fn next(&mut self) -> Option<Vec<T>> {
    let current = self.next.take()?;
    let mut next = current.clone();
    if advance(&mut next) {
      self.next = Some(next);
    }
    Some(current)
  }
}

/// Rearranges `items` into the next permutation in place; returns `false`,
/// leaving them as they were, if there is none.
fn advance<T: Ord>(items: &mut [T]) -> bool {
  let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
    return false;
  };
  let tail = &items[pivot + 1..];
  let swap = pivot + 1 + tail.iter().rposition(|x| *x > items[pivot]).unwrap_or(0);
  items.swap(pivot, swap);
  items[pivot + 1..].reverse();
  true
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn next() {
    assert_eq!(next_permutation(&[1, 2, 3]), [1, 3, 2]);
    assert_eq!(next_permutation(&[1, 3, 2]), [2, 1, 3]);
    assert_eq!(next_permutation(&[3, 2, 1]), [3, 2, 1]);
    assert_eq!(next_permutation(&[1, 1, 2]), [1, 2, 1]);
    assert_eq!(next_permutation(&["b", "a", "c"]), ["b", "c", "a"]);
    assert!(next_permutation::<u8>(&[]).is_empty());
    assert_eq!(next_permutation(&[7]), [7]);
  }

  #[test]
  fn input_untouched() {
    let items = vec![0, 1, 2];
    let next = next_permutation(&items);
    assert_eq!(items, [0, 1, 2]);
    assert_eq!(next, [0, 2, 1]);
  }

  #[test]
  fn all() {
    let all = permutations(&[0, 1, 2]).collect::<Vec<_>>();
    assert_eq!(all, [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]);
    assert_eq!(permutations(&[1, 1, 2]).count(), 3);
    assert_eq!(permutations(&[2, 1, 0]).count(), 1);
  }

  #[test]
  fn millionth() {
    let digits = (0..10).collect::<Vec<u8>>();
    let millionth = permutations(&digits).nth(999_999).unwrap();
    assert_eq!(millionth, [2, 7, 8, 3, 9, 1, 5, 4, 6, 0]);
  }
}
