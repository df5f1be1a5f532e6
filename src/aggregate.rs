//! Range summaries combining under concatenation.
//!
//! An [`Aggregate`] describes a contiguous range of the input with just enough
//! information to compute the maximum subarray sum of any concatenation of
//! ranges. [`Aggregate::merge`] is associative, so a sequence of adjacent
//! aggregates can be reduced in any tree shape as long as left stays left.

/// The four sums of a non-empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// best sum of a subrange anywhere inside the range
    pub interior: i64,
    /// best sum of a subrange starting at the first element
    pub prefix: i64,
    /// best sum of a subrange ending at the last element
    pub suffix: i64,
    /// sum of all elements
    pub total: i64,
}

/// Summary of a possibly empty range.
///
/// The empty range is its own variant instead of carrying `-inf` sentinels:
/// it merges as the identity on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregate {
    #[default]
    Empty,
    Range(Summary),
}

impl Aggregate {
    /// Aggregate of a range holding the single value `v`.
    pub fn singleton(v: i32) -> Self {
        let v = i64::from(v);
        Aggregate::Range(Summary {
            interior: v,
            prefix: v,
            suffix: v,
            total: v,
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Aggregate::Empty)
    }

    /// Best subarray sum, `None` for the empty range.
    pub fn interior(&self) -> Option<i64> {
        self.summary().map(|s| s.interior)
    }

    pub fn prefix(&self) -> Option<i64> {
        self.summary().map(|s| s.prefix)
    }

    pub fn suffix(&self) -> Option<i64> {
        self.summary().map(|s| s.suffix)
    }

    /// Sum of all elements, 0 for the empty range.
    pub fn total(&self) -> i64 {
        self.summary().map(|s| s.total).unwrap_or(0)
    }

    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Aggregate::Empty => None,
            Aggregate::Range(summary) => Some(summary),
        }
    }

    /// Aggregate of the concatenation of `self` followed by `right`.
    ///
    /// Not commutative: `right` must cover the range immediately after ours.
    pub fn merge(self, right: Aggregate) -> Aggregate {
        match (self, right) {
            (Aggregate::Empty, other) | (other, Aggregate::Empty) => other,
            (Aggregate::Range(l), Aggregate::Range(r)) => Aggregate::Range(Summary {
                // third candidate crosses the boundary
                interior: l.interior.max(r.interior).max(l.suffix + r.prefix),
                prefix: l.prefix.max(l.total + r.prefix),
                suffix: r.suffix.max(r.total + l.suffix),
                total: l.total + r.total,
            }),
        }
    }

    /// Left to right fold of adjacent aggregates given in sequence order.
    pub fn fold<I>(aggregates: I) -> Aggregate
    where
        I: IntoIterator<Item = Aggregate>,
    {
        aggregates
            .into_iter()
            .fold(Aggregate::Empty, Aggregate::merge)
    }
}

impl std::iter::Sum for Aggregate {
    fn sum<I: Iterator<Item = Aggregate>>(iter: I) -> Self {
        Aggregate::fold(iter)
    }
}
