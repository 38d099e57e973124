use std::{fmt, iter::FusedIterator, ops::Range};

/// Name of one synthetic label: the configured prefix followed by the
/// undecorated decimal index, e.g. `Label7`. Borrowed from the config and
/// only alive for as long as it takes to render one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelName<'a> {
    prefix: &'a str,
    index: u64,
}

impl<'a> LabelName<'a> {
    pub fn new(prefix: &'a str, index: u64) -> Self {
        Self { prefix, index }
    }
}

impl<'a> fmt::Display for LabelName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.index)
    }
}

/// Label names for the indices `0..count`, in increasing order.
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    prefix: &'a str,
    indices: Range<u64>,
}

impl<'a> Labels<'a> {
    pub fn new(prefix: &'a str, count: u64) -> Self {
        Self {
            prefix,
            indices: 0..count,
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = LabelName<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;

        Some(LabelName::new(self.prefix, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a> FusedIterator for Labels<'a> {}
