use core::fmt;
use std::fmt::Display;

/*
 * One element of a singly-linked chain.
 * Each node exclusively owns its successor, so a chain is a single
 * finite path with no cycles by construction.
 */
#[derive(Debug)]
struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/*
 * Handle to a singly-linked chain of integers.
 * An empty chain is a None head.
 */
#[derive(Debug)]
pub struct List {
    head: Option<Box<Node>>,
}

impl List {
    pub fn new() -> Self {
        List { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /*
     * Forward traversal over the values of the chain.
     */
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /*
     * Returns a freshly built chain holding the same values in
     * non-decreasing order : walk the receiver once collecting its
     * values, sort them, then link up brand new nodes. The receiver
     * is only read and stays traversable afterwards. Equal values
     * keep no particular relative order (the sort is unstable).
     */
    pub fn sorted(&self) -> List {
        let mut values: Vec<i64> = self.iter().collect();
        values.sort_unstable();
        values.into_iter().collect()
    }
}

/*
 * Build a chain in one forward pass, appending through a tail
 * cursor instead of re-walking to the end for every element.
 */
impl FromIterator<i64> for List {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
        }
        list
    }
}

/*
 * The default recursive drop would burn one stack frame per node
 * and overflow on long chains. Unlink iteratively instead.
 */
impl Drop for List {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/*
 * Values concatenated with no separator : [4, 2, 1, 3] prints "4213"
 */
impl Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        for value in self {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}
