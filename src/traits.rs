// Work which can be cut in two order preserving pieces.
//
// Chunks of the input are divisible (this is how we partition),
// and so are lists of chunks (this is how the join scheduler
// hands half of the chunks to another thread).

pub trait Divisible: Sized {
    /// Is there still more than one piece of work in here ?
    fn should_be_divided(&self) -> bool;
    /// Cut in two halves.
    fn divide(self) -> (Self, Self) {
        let mid = self.len() / 2;
        self.divide_at(mid)
    }
    /// Cut after `index` units of work.
    /// An index past the end is clamped: the right part is then empty.
    fn divide_at(self, index: usize) -> (Self, Self);
    /// Units of work left.
    fn len(&self) -> usize;
}

impl<'c, T: Sync> Divisible for &'c [T] {
    fn should_be_divided(&self) -> bool {
        <[T]>::len(self) >= 2
    }
    fn divide_at(self, index: usize) -> (Self, Self) {
        self.split_at(index.min(<[T]>::len(self)))
    }
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
