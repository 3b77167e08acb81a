use bumpalo::Bump;
use core::fmt;
use std::cell::Cell;
use std::ptr;

/*
 * A single element of the chain : one value and a forward link.
 * The value is fixed at construction ; only the link is ever rewritten,
 * and only by the owning list.
 */
struct Node<'bump, T> {
    value: T,
    next: Cell<Option<&'bump Node<'bump, T>>>,
}

/*
 * A singly linked list whose nodes live in a bump arena.
 *
 * Allocating every node from the same arena gives them all one lifetime,
 * so links are plain shared references and a node may legally point back
 * at an earlier one. That is what lets `create_cycle` exist and lets
 * `has_cycle` compare nodes by address. An unlinked node is not reclaimed
 * until the arena itself is dropped.
 *
 * Except for `has_cycle`, every traversing operation assumes the chain is
 * acyclic and will not terminate on a cyclic one.
 */
pub struct LinkedList<'bump, T> {
    arena: &'bump Bump,
    head: Option<&'bump Node<'bump, T>>,
}

impl<'bump, T> LinkedList<'bump, T> {
    pub fn new(arena: &'bump Bump) -> Self {
        LinkedList { arena, head: None }
    }

    fn alloc(&self, value: T, next: Option<&'bump Node<'bump, T>>) -> &'bump Node<'bump, T> {
        self.arena.alloc(Node {
            value,
            next: Cell::new(next),
        })
    }

    /*
     * Walk to the final node. None on an empty list.
     */
    fn last_node(&self) -> Option<&'bump Node<'bump, T>> {
        let mut node = self.head?;
        while let Some(next) = node.next.get() {
            node = next;
        }
        Some(node)
    }

    /// Prepend a value. O(1).
    pub fn push_front(&mut self, value: T) {
        let node = self.alloc(value, self.head);
        self.head = Some(node);
    }

    /// Append a value, traversing to the current tail. O(n).
    pub fn push_back(&mut self, value: T) {
        let node = self.alloc(value, None);
        match self.last_node() {
            Some(last) => last.next.set(Some(node)),
            None => self.head = Some(node),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|node| &node.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.last_node().map(|node| &node.value)
    }

    /// Value at `index`, counting from zero at the head. None when the
    /// index is past the end of the chain.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().max()
    }

    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().min()
    }

    /*
     * Unlink the first node holding `value` by pointing its predecessor
     * past it. A value that is not present leaves the list untouched.
     */
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev: Option<&'bump Node<'bump, T>> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            if node.value == *value {
                match prev {
                    Some(p) => p.next.set(node.next.get()),
                    None => self.head = node.next.get(),
                }
                return true;
            }
            prev = curr;
            curr = node.next.get();
        }
        false
    }

    /*
     * Reverse in place by relinking each node onto the front of a new
     * chain. Nodes are moved, never copied.
     */
    pub fn reverse(&mut self) {
        let mut reversed: Option<&'bump Node<'bump, T>> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            curr = node.next.get();
            node.next.set(reversed);
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /*
     * Middle value in one pass with a slow and a fast cursor : the fast
     * one takes two steps per iteration, so the slow one ends up halfway.
     * An even length lands on the upper middle.
     */
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head?;
        let mut fast = self.head;
        loop {
            let Some(f) = fast else { break };
            let Some(one) = f.next.get() else { break };
            fast = one.next.get();
            if let Some(next) = slow.next.get() {
                slow = next;
            }
        }
        Some(&slow.value)
    }

    /*
     * Value n steps before the final node, zero-indexed from the end.
     * The lead cursor starts n nodes ahead ; when it reaches the tail the
     * trailing cursor is on the answer. Single pass.
     */
    pub fn nth_from_end(&self, n: usize) -> Option<&T> {
        let mut lead = self.head?;
        for _ in 0..n {
            lead = lead.next.get()?;
        }
        let mut trail = self.head?;
        while let Some(next) = lead.next.get() {
            lead = next;
            trail = trail.next.get()?;
        }
        Some(&trail.value)
    }

    /*
     * Floyd's cursor race. The fast cursor moves two nodes per step ; if
     * the chain ever loops back, the slow cursor gets caught at the same
     * address. Terminates on cyclic chains, unlike every other traversal
     * here.
     */
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;
        loop {
            let (Some(s), Some(f)) = (slow, fast) else {
                return false;
            };
            let Some(one) = f.next.get() else {
                return false;
            };
            slow = s.next.get();
            fast = one.next.get();
            if let (Some(s), Some(f)) = (slow, fast) {
                if ptr::eq(s, f) {
                    return true;
                }
            }
        }
    }

    /*
     * Insert into a chain already sorted ascending, keeping it sorted.
     * An equal value goes after the existing run of equals.
     */
    pub fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        match self.head {
            Some(head) if head.value <= value => {
                let mut curr = head;
                while let Some(next) = curr.next.get() {
                    if next.value > value {
                        break;
                    }
                    curr = next;
                }
                let node = self.alloc(value, curr.next.get());
                curr.next.set(Some(node));
            }
            _ => self.push_front(value),
        }
    }

    /*
     * Test helper : link the final node back to the head, making traversal
     * non-terminating. Only `has_cycle` is safe to call afterwards.
     */
    pub fn create_cycle(&mut self) {
        let Some(head) = self.head else { return };
        let mut curr = head;
        while let Some(next) = curr.next.get() {
            curr = next;
        }
        curr.next.set(Some(head));
    }

    pub fn iter(&self) -> Iter<'bump, T> {
        Iter { curr: self.head }
    }
}

/*
 * Forward iterator over values, head to tail.
 */
pub struct Iter<'bump, T> {
    curr: Option<&'bump Node<'bump, T>>,
}

impl<'bump, T> Iterator for Iter<'bump, T> {
    type Item = &'bump T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next.get();
        Some(&node.value)
    }
}

impl<'bump, 'a, T> IntoIterator for &'a LinkedList<'bump, T> {
    type Item = &'bump T;
    type IntoIter = Iter<'bump, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/*
 * Space-separated traversal order.
 */
impl<'bump, T: fmt::Display> fmt::Display for LinkedList<'bump, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for value in self {
            write!(f, "{}{}", sep, value)?;
            sep = " ";
        }
        Ok(())
    }
}
