/// Weighted union-find (union-find with potential).
///
/// Every element `i` carries a hidden value `x[i]`. The structure records
/// relations `x[i] - x[j] = d` and answers whether a new relation agrees with
/// the ones already recorded.
pub struct WeightedUnionFind<T> {
    uf: Vec<usize>,
    size: Vec<usize>,
    potential: Vec<T>,
    components: usize,
}

/// Abelian group used as the potential of [`WeightedUnionFind`].
pub trait Potential: Clone + Eq {
    const ZERO: Self;

    fn compose(&self, other: &Self) -> Self;

    /// other.compose(output) == self
    fn rev_compose(&self, other: &Self) -> Self;
}

macro_rules! impl_potential {
    ($($t:ty),*) => {
        $(
            impl Potential for $t {
                const ZERO: Self = 0;

                fn compose(&self, other: &Self) -> Self {
                    self + other
                }

                fn rev_compose(&self, other: &Self) -> Self {
                    self - other
                }
            }
        )*
    };
}

impl_potential!(i8, i16, i32, i64, i128, isize);

impl<T: Potential> WeightedUnionFind<T> {
    /// Creates `n` singleton components, addressed `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            uf: (0..n).collect(),
            size: vec![1; n],
            potential: vec![T::ZERO; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.uf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of `i` and `x[i] - x[root]`, compressing the path.
    ///
    /// On the way up, `size` of every non-root node on the path is reused as a
    /// link back to the node below it, so the way down visits the path from
    /// the root's child to `i` without an extra allocation.
    pub fn find(&mut self, mut i: usize) -> (usize, T) {
        debug_assert!(i < self.len());
        let start = i;
        let mut p = self.uf[i];
        let mut prev_i = usize::MAX;
        while p != i {
            self.size[i] = prev_i;
            prev_i = i;
            i = p;
            p = self.uf[i];
        }
        while prev_i < self.uf.len() {
            let parent = self.uf[prev_i];
            if parent != p {
                // parent already holds its potential to the root
                self.potential[prev_i] = self.potential[prev_i].compose(&self.potential[parent]);
                self.uf[prev_i] = p;
            }
            prev_i = self.size[prev_i];
        }
        if start == p {
            (p, T::ZERO)
        } else {
            (p, self.potential[start].clone())
        }
    }

    /// Same as [`find`](Self::find) without path compression.
    pub fn root(&self, mut i: usize) -> (usize, T) {
        debug_assert!(i < self.len());
        let mut acc = T::ZERO;
        let mut p = self.uf[i];
        while p != i {
            acc = acc.compose(&self.potential[i]);
            i = p;
            p = self.uf[i];
        }
        (p, acc)
    }

    /// Records `x[i] - x[j] = diff`.
    ///
    /// Returns `false` if `i` and `j` are already related by a different
    /// value. The root of `i` is always attached under the root of `j`.
    pub fn unite(&mut self, i: usize, j: usize, diff: T) -> bool {
        let (root_i, pot_i) = self.find(i);
        let (root_j, pot_j) = self.find(j);
        if root_i != root_j {
            self.uf[root_i] = root_j;
            self.size[root_j] += self.size[root_i];
            self.potential[root_i] = pot_j.rev_compose(&pot_i).compose(&diff);
            self.components -= 1;
            true
        } else {
            pot_i.rev_compose(&pot_j) == diff
        }
    }

    /// `x[i] - x[j]` if it is determined, `None` if `i` and `j` are unrelated.
    pub fn diff(&mut self, i: usize, j: usize) -> Option<T> {
        let (root_i, pot_i) = self.find(i);
        let (root_j, pot_j) = self.find(j);
        (root_i == root_j).then(|| pot_i.rev_compose(&pot_j))
    }

    pub fn same(&mut self, i: usize, j: usize) -> bool {
        self.find(i).0 == self.find(j).0
    }

    pub fn size(&mut self, i: usize) -> usize {
        let (root, _) = self.find(i);
        self.size[root]
    }
}
