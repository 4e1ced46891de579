use crate::core::CapStack;

/// Iterator over stack elements from bottom to top
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct CapStackIter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for CapStackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CapStackIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for CapStackIter<'_, T> {}

impl<'a, T> IntoIterator for &'a CapStack<T> {
    type Item = &'a T;
    type IntoIter = CapStackIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CapStackIter {
            inner: self.as_slice().iter(),
        }
    }
}
