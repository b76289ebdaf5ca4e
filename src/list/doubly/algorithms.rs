use super::DoublyLinkedList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr;

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublyLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns `true` if the list contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Reverse the order of the elements in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            // SAFETY: the list is cyclic, so every node reached from the ghost
            // node is valid. Links are accessed through raw places only.
            unsafe {
                let links = node.as_ptr();
                ptr::swap(ptr::addr_of_mut!((*links).next), ptr::addr_of_mut!((*links).prev));
                node = (*links).prev;
            }
            if node == ghost {
                break;
            }
        }
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn compare_lists() {
        let a = DoublyLinkedList::from_iter([1, 2, 3]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(a < DoublyLinkedList::from_iter([1, 2, 4]));
        assert!(a > DoublyLinkedList::from_iter([1, 2]));
        assert_ne!(a, DoublyLinkedList::from_iter([1, 2]));
    }

    #[test]
    fn reverse_in_place() {
        let mut list = DoublyLinkedList::from_iter(0..5);
        list.reverse();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![4, 3, 2, 1, 0]);
        assert!(list.contains(&3));
        assert!(!list.contains(&5));
    }
}
