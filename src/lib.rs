mod linkedlist;

pub use linkedlist::{Iter, LinkedList};
