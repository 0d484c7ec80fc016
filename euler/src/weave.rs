use euler_util::{idx::IdxVec, new_idx};

new_idx!(pub CellId; n => ["c{n}"]);

/// A flat sequence arranged as a triangle of rows holding 1, 2, 3, ... cells:
///
/// ```text
///         0
///        / \
///       1   2
///      / \ / \
///     3   4   5
///    / \ / \ / \
///   6   7   8   9
/// ```
///
/// Each cell's children are the two cells diagonally below it, so
/// neighbouring cells share a child. Levels are 1-based and columns 0-based.
#[derive(Debug, Clone)]
pub struct Weave<T> {
  cells: IdxVec<CellId, Cell<T>>,
  depth: usize,
  remainder: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<T> {
  pub value: T,
  pub level: usize,
  pub col: usize,
  pub left: Option<CellId>,
  pub right: Option<CellId>,
}

impl<T> Weave<T> {
  pub fn new(values: impl IntoIterator<Item = T>) -> Self {
    let values = values.into_iter().collect::<Vec<_>>();
    let len = values.len();
    let mut cells = IdxVec::new();
    let mut level = 1;
    let mut col = 0;
    for (i, value) in values.into_iter().enumerate() {
      if col == level {
        level += 1;
        col = 0;
      }
      // the cell below at the same column is `level` cells further on
      let below = i + level;
      cells.push(Cell {
        value,
        level,
        col,
        left: (below < len).then_some(CellId(below)),
        right: (below + 1 < len).then_some(CellId(below + 1)),
      });
      col += 1;
    }
    let remainder = if col == level { 0 } else { col };
    Weave { cells, depth: level, remainder }
  }

  /// The number of rows; at least 1, even when empty.
  pub fn depth(&self) -> usize {
    self.depth
  }

  /// The number of cells in the bottom row if it is incomplete, otherwise 0.
  pub fn remainder(&self) -> usize {
    self.remainder
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn root(&self) -> Option<&Cell<T>> {
    self.cells.get(CellId(0))
  }

  pub fn cell(&self, id: CellId) -> Option<&Cell<T>> {
    self.cells.get(id)
  }

  pub fn get(&self, level: usize, col: usize) -> Option<&Cell<T>> {
    if level == 0 || level > self.depth || col >= level {
      return None;
    }
    self.cells.get(CellId(row_start(level) + col))
  }

  pub fn left(&self, id: CellId) -> Option<&Cell<T>> {
    self.cells.get(self.cells.get(id)?.left?)
  }

  pub fn right(&self, id: CellId) -> Option<&Cell<T>> {
    self.cells.get(self.cells.get(id)?.right?)
  }

  pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> {
    self.cells.iter()
  }

  pub fn rows(&self) -> impl Iterator<Item = &[Cell<T>]> {
    let len = self.cells.len();
    (1..=self.depth)
      .map(move |level| {
        let start = row_start(level).min(len);
        let end = (start + level).min(len);
        self.cells.slice(CellId(start)..CellId(end))
      })
      .filter(|row| !row.is_empty())
  }

  /// Computes a value for every cell from the bottom up: `f` receives the
  /// cell's own value and the results already computed for its children.
  pub fn fold_up<U>(
    &self,
    mut f: impl FnMut(&T, Option<&U>, Option<&U>) -> U,
  ) -> IdxVec<CellId, U> {
    let len = self.cells.len();
    let mut folded = Vec::with_capacity(len);
    for id in self.cells.keys().rev() {
      let cell = &self.cells[id];
      // `folded` is in reverse order
      let left = cell.left.map(|child| &folded[len - 1 - child.0]);
      let right = cell.right.map(|child| &folded[len - 1 - child.0]);
      let value = f(&cell.value, left, right);
      folded.push(value);
    }
    folded.reverse();
    folded.into()
  }
}

fn row_start(level: usize) -> usize {
  level * (level - 1) / 2
}

#[cfg(test)]
mod tests {
  use super::*;

  fn values<T: Clone>(weave: &Weave<T>) -> Vec<Vec<T>> {
    weave.rows().map(|row| row.iter().map(|cell| cell.value.clone()).collect()).collect()
  }

  #[test]
  fn shape() {
    let weave = Weave::new(0..10);
    assert_eq!((weave.depth(), weave.remainder()), (4, 0));
    assert_eq!(values(&weave), [vec![0], vec![1, 2], vec![3, 4, 5], vec![6, 7, 8, 9]]);

    let weave = Weave::new(0..4);
    assert_eq!((weave.depth(), weave.remainder()), (3, 1));
    assert_eq!(values(&weave), [vec![0], vec![1, 2], vec![3]]);

    let weave = Weave::new(0..1);
    assert_eq!((weave.depth(), weave.remainder()), (1, 0));

    let weave = Weave::<u8>::new([]);
    assert_eq!((weave.depth(), weave.remainder()), (1, 0));
    assert!(weave.root().is_none());
    assert_eq!(weave.rows().count(), 0);
  }

  #[test]
  fn links() {
    let weave = Weave::new(0..10);
    let root = weave.root().unwrap();
    assert_eq!((root.left, root.right), (Some(CellId(1)), Some(CellId(2))));
    assert_eq!(weave.left(CellId(2)).map(|c| c.value), Some(4));
    assert_eq!(weave.right(CellId(1)).map(|c| c.value), Some(4));
    assert_eq!(weave.get(3, 2).map(|c| c.value), Some(5));
    assert_eq!(weave.get(4, 3).map(|c| (c.level, c.col)), Some((4, 3)));
    assert!(weave.get(4, 4).is_none());
    assert!(weave.get(5, 0).is_none());
    assert!(weave.left(CellId(6)).is_none());
    assert!(weave.get(1 << 33, 0).is_none());
    assert!(weave.get(usize::MAX, 0).is_none());
    assert!(weave.get(usize::MAX, usize::MAX - 1).is_none());

    let weave = Weave::new(0..5);
    let cell = weave.cell(CellId(2)).unwrap();
    assert_eq!((cell.left, cell.right), (Some(CellId(4)), None));
  }

  #[test]
  fn max_path() {
    let weave = Weave::new([3, 7, 4, 2, 4, 6, 8, 5, 9, 3]);
    let best = weave
      .fold_up(|&value, left: Option<&u32>, right| value + left.max(right).copied().unwrap_or(0));
    assert_eq!(best[CellId(0)], 23);
    assert_eq!(best[CellId(2)], 4 + 6 + 9);

    let counts = weave.fold_up(|_, left: Option<&usize>, right| {
      1 + left.copied().unwrap_or(0) + right.copied().unwrap_or(0)
    });
    assert_eq!(counts.values().copied().collect::<Vec<_>>(), [15, 7, 7, 3, 3, 3, 1, 1, 1, 1]);
  }
}
