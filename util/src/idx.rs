use std::{
  fmt::{self, Debug},
  marker::PhantomData,
  ops::{Index, Range},
};

/// A newtype over `usize` used to index an [`IdxVec`].
pub trait Idx: Copy + Eq + From<usize> + Into<usize> + Debug {}

/// Declares a `usize` newtype implementing [`Idx`], with a `Debug` format
/// given as a format string over the inner value.
#[macro_export]
macro_rules! new_idx {
  ($vis:vis $Ty:ident; $n:ident => [$($fmt:tt)*]) => {
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    $vis struct $Ty(pub usize);

    impl From<$Ty> for usize {
      fn from(i: $Ty) -> usize { i.0 }
    }

    impl From<usize> for $Ty {
      fn from(i: usize) -> Self { Self(i) }
    }

    impl $crate::idx::Idx for $Ty {}

    impl std::fmt::Debug for $Ty {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let $n = self.0;
        write!(f, $($fmt)*)
      }
    }
  };
}

/// An append-only arena addressed by `I` instead of `usize`.
#[derive(Clone)]
pub struct IdxVec<I: Idx, T> {
  items: Vec<T>,
  index: PhantomData<fn(&I)>,
}

impl<I: Idx, T> IdxVec<I, T> {
  pub const fn new() -> Self {
    IdxVec { items: Vec::new(), index: PhantomData }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Appends `value`, returning its index.
  pub fn push(&mut self, value: T) -> I {
    let id = I::from(self.items.len());
    self.items.push(value);
    id
  }

  pub fn get(&self, id: I) -> Option<&T> {
    self.items.get(id.into())
  }

  /// The items from `range.start` up to, not including, `range.end`.
  pub fn slice(&self, range: Range<I>) -> &[T] {
    &self.items[range.start.into()..range.end.into()]
  }

  pub fn keys(&self) -> impl DoubleEndedIterator<Item = I> {
    (0..self.items.len()).map(I::from)
  }

  pub fn values(&self) -> impl Iterator<Item = &T> {
    self.items.iter()
  }

  pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
    self.keys().zip(&self.items)
  }
}

impl<I: Idx, T> Index<I> for IdxVec<I, T> {
  type Output = T;

  fn index(&self, id: I) -> &T {
    &self.items[id.into()]
  }
}

impl<I: Idx, T> From<Vec<T>> for IdxVec<I, T> {
  fn from(items: Vec<T>) -> Self {
    IdxVec { items, index: PhantomData }
  }
}

impl<I: Idx, T: Debug> Debug for IdxVec<I, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

#[test]
fn typed_indices() {
  crate::new_idx!(Id; n => ["#{n}"]);

  let mut vec = IdxVec::<Id, &str>::new();
  let a = vec.push("a");
  let b = vec.push("b");
  let c = vec.push("c");
  assert_eq!((a, b, c), (Id(0), Id(1), Id(2)));
  assert_eq!(vec[b], "b");
  assert_eq!(vec.get(Id(3)), None);
  assert_eq!(vec.keys().rev().collect::<Vec<_>>(), [c, b, a]);
  assert_eq!(vec.slice(b..c), ["b"]);
  assert_eq!(vec.values().copied().collect::<String>(), "abc");
  assert_eq!(format!("{vec:?}"), r#"{#0: "a", #1: "b", #2: "c"}"#);

  let from_vec = IdxVec::<Id, u8>::from(vec![7, 8]);
  assert_eq!((from_vec.len(), from_vec[Id(1)]), (2, 8));
  assert!(IdxVec::<Id, u8>::new().is_empty());
}
