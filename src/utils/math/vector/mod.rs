pub mod math;

use std::fmt::{self, Debug};

use num::Num;

/// ZeroSpVec is a sparse vector that stores only its non-zero elements.
///
/// It keeps a logical length `len` (the dimension of the space) and, for
/// every non-zero element, an index and a value. Indices are strictly
/// ascending and always `< len`.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Empty vector of dimension 0
    #[inline]
    pub fn new() -> Self {
        Self::with_len(0)
    }

    /// All-zero vector of dimension `len`
    #[inline]
    pub fn with_len(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    /// Build a vector of dimension `len` from `(index, value)` entries in any order.
    /// Zero values are dropped.
    ///
    /// # Panics
    /// If an index is out of range or appears twice.
    pub fn from_entries<I>(len: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = entries
            .into_iter()
            .filter(|(_, v)| !v.is_zero())
            .collect();
        pairs.sort_unstable_by_key(|(idx, _)| *idx);

        let mut vec = ZeroSpVec {
            inds: Vec::with_capacity(pairs.len()),
            vals: Vec::with_capacity(pairs.len()),
            len,
        };
        for (idx, val) in pairs {
            assert!(idx < len, "index {idx} out of range for dimension {len}");
            if let Some(&last) = vec.inds.last() {
                assert!(last < idx, "duplicate index {idx}");
            }
            vec.inds.push(idx);
            vec.vals.push(val);
        }
        vec
    }

    /// Dimension of the vector, zero elements included
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Value at `index`; zero when the element is not stored or out of range
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate the non-zero elements in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec(len: {}, nnz: {}) ", self.len, self.nnz())?;
            f.debug_map().entries(self.raw_iter()).finish()
        } else {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("inds", &self.inds)
                .field("vals", &self.vals)
                .finish()
        }
    }
}
