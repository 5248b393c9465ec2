use fxhash::FxHashMap;

use crate::vertex::VertexId;

/// Disjoint-set-union over vertex ids, with union by size and path
/// compression. Ids are sparse user-chosen names, hence the map-based
/// parent store.
#[derive(Debug, Default)]
pub struct Dsu {
    parent: FxHashMap<VertexId, VertexId>,
    size: FxHashMap<VertexId, usize>,
}

impl Dsu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make_set(&mut self, x: VertexId) {
        self.parent.insert(x, x);
        self.size.insert(x, 1);
    }

    pub fn find(&mut self, x: VertexId) -> VertexId {
        let p = self.parent[&x];
        if p == x {
            return x;
        }
        let root = self.find(p);
        self.parent.insert(x, root);
        root
    }

    /// Merges the sets of `x` and `y`; the larger set absorbs the smaller.
    pub fn union(&mut self, x: VertexId, y: VertexId) {
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return;
        }
        if self.size[&x] < self.size[&y] {
            std::mem::swap(&mut x, &mut y);
        }
        self.parent.insert(y, x);
        *self.size.get_mut(&x).unwrap() += self.size[&y];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_merge_components() {
        let mut dsu = Dsu::new();
        for v in [1, 2, 3, 4] {
            dsu.make_set(v);
        }
        assert_ne!(dsu.find(1), dsu.find(2));

        dsu.union(1, 2);
        dsu.union(3, 4);
        assert_eq!(dsu.find(1), dsu.find(2));
        assert_ne!(dsu.find(2), dsu.find(3));

        dsu.union(2, 4);
        assert_eq!(dsu.find(1), dsu.find(3));
    }

    #[test]
    fn union_is_idempotent() {
        let mut dsu = Dsu::new();
        dsu.make_set(5);
        dsu.make_set(6);
        dsu.union(5, 6);
        dsu.union(6, 5);
        assert_eq!(dsu.find(5), dsu.find(6));
    }
}
