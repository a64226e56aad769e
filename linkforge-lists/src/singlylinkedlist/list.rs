/*
   Singly Linked List: A singly linked list that allows for inserts
   and removes at either end of the list. Operations at the head of
   the list complete in constant time while operations at the tail
   require a traversal of the chain.

   Copyright 2025 The Linkforge Authors

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::singlylinkedlist::{error::EmptyStructure, node::Node};

/// A singly linked list that owns its nodes and supports pushing and
/// popping elements at either end.
///
/// The list holds a single reference to the first node and every node
/// owns its successor, forming a chain that terminates at the node
/// with no successor. The list tracks neither a tail nor a count, so
/// pushing and popping at the head complete in constant time while
/// operations at the tail traverse the chain.
///
/// Popping from an empty list is the only operation that can fail. It
/// returns an
/// [`EmptyStructure`](singlylinkedlist/struct.EmptyStructure.html)
/// error and leaves the list untouched.
///
/// # Getting Started
///
/// To get started add the linkforge dependency to Cargo.toml and the
/// use declaration in your source.
///
/// ```text
/// [dependencies]
/// linkforge = "0.1.0"
/// ```
///
/// ```
/// use linkforge::lists::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::<u8>::new();
/// for i in 0..10 {
///     list.push_front(i);
/// }
///
/// while let Ok(val) = list.pop_front() {
///     println!("{}", val);
/// }
/// ```
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // unlink the chain one node at a time so a long list does not
        // overflow the stack with the recursive Box drop
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> SinglyLinkedList<T> {
        SinglyLinkedList::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkforge::lists::SinglyLinkedList;
    /// let list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.is_empty(), true);
    /// ```
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList { head: None }
    }

    /// Returns true if the list is empty and false otherwise. The
    /// list is empty exactly when it holds no reference to a first
    /// node.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkforge::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.is_empty(), true);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.is_empty(), false);
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds an element to the front (head) of the list. The new node
    /// takes the current first node as its successor and becomes the
    /// new head. This operation always succeeds.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkforge::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// ```
    pub fn push_front(&mut self, val: T) {
        let node = Box::new(Node::new(val, self.head.take()));
        self.head = Some(node);
    }

    /// Adds an element to the back (tail) of the list. The chain is
    /// traversed to the last node and a new node with no successor is
    /// linked after it. This operation always succeeds.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkforge::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// ```
    pub fn push_back(&mut self, val: T) {
        if self.is_empty() {
            // the new node is both the first and the last node, which
            // is exactly a push at the head
            self.push_front(val);
            return;
        }

        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(val, None)));
    }

    /// Removes and returns the value at the front (head) of the list.
    /// The head reference is relinked to the second node and the old
    /// first node is released.
    ///
    /// If the list is empty this method returns an
    /// [`EmptyStructure`](singlylinkedlist/struct.EmptyStructure.html)
    /// error and the list is not modified.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkforge::lists::SinglyLinkedList;
    /// use linkforge::lists::singlylinkedlist::EmptyStructure;
    ///
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.pop_front(), Err(EmptyStructure));
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(EmptyStructure));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, EmptyStructure> {
        match self.head.take() {
            None => Err(EmptyStructure),
            Some(node) => {
                let node = *node;
                self.head = node.next;
                Ok(node.val)
            }
        }
    }

    /// Removes and returns the value at the back (tail) of the list.
    /// The chain is traversed to the second to last node and its
    /// successor link is cleared, releasing the last node.
    ///
    /// If the list is empty this method returns an
    /// [`EmptyStructure`](singlylinkedlist/struct.EmptyStructure.html)
    /// error and the list is not modified.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkforge::lists::SinglyLinkedList;
    /// use linkforge::lists::singlylinkedlist::EmptyStructure;
    ///
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.pop_back(), Err(EmptyStructure));
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_back(), Ok(2));
    /// assert_eq!(list.pop_back(), Ok(1));
    /// assert_eq!(list.pop_back(), Err(EmptyStructure));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyStructure> {
        let single = match self.head.as_deref() {
            None => return Err(EmptyStructure),
            Some(node) => node.next.is_none(),
        };
        if single {
            // the sole node is both the first and the last node, so
            // removing it is exactly a pop at the head
            return self.pop_front();
        }

        // walk to the link that owns the last node, held by the
        // second to last node in the chain
        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| node.next.is_some()) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        match link.take() {
            None => Err(EmptyStructure),
            Some(node) => Ok(node.val),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! assert_empty {
        ($list:ident) => {
            assert!($list.head.is_none());
            assert_eq!($list.is_empty(), true);
        };
    }

    macro_rules! assert_chain {
        ($list:ident, $($val:expr),+) => {
            let mut cur = $list.head.as_deref();
            $(
                match cur {
                    None => panic!("chain ended before expected value {}", $val),
                    Some(node) => {
                        assert_eq!(node.val, $val);
                        cur = node.next.as_deref();
                    }
                }
            )+
            assert!(cur.is_none(), "chain has more nodes than expected");
        };
    }

    #[test]
    fn test_new() {
        let list = SinglyLinkedList::<u8>::new();
        assert_empty!(list);
    }

    #[test]
    fn test_default() {
        let list = SinglyLinkedList::<u8>::default();
        assert_empty!(list);
    }

    #[test]
    fn test_is_empty_idempotent() {
        let mut list = SinglyLinkedList::<u8>::new();
        assert_eq!(list.is_empty(), true);
        assert_eq!(list.is_empty(), true);

        list.push_front(1);
        assert_eq!(list.is_empty(), false);
        assert_eq!(list.is_empty(), false);
    }

    #[test]
    fn test_push_front() {
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_front(11);
        assert_chain!(list, 11);
        //now push a second node
        list.push_front(12);
        assert_chain!(list, 12, 11);
        //now push a third node
        list.push_front(13);
        assert_chain!(list, 13, 12, 11);
        assert_eq!(list.is_empty(), false);
    }

    #[test]
    fn test_push_back() {
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_back(33);
        assert_chain!(list, 33);
        //now push a second node
        list.push_back(44);
        assert_chain!(list, 33, 44);
        //now push a third node
        list.push_back(55);
        assert_chain!(list, 33, 44, 55);
    }

    #[test]
    fn test_push_back_on_empty_list() {
        // pushing at the back of an empty list is the same as pushing
        // at the front
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_back(5);
        assert_chain!(list, 5);
        assert_eq!(list.pop_back(), Ok(5));
        assert_empty!(list);
    }

    #[test]
    fn test_pop_front() {
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_front(11);
        assert_eq!(list.pop_front(), Ok(11));
        assert_empty!(list);

        //now push two nodes
        list.push_front(11);
        list.push_front(12);
        assert_eq!(list.pop_front(), Ok(12));
        assert_chain!(list, 11);
        assert_eq!(list.pop_front(), Ok(11));
        assert_empty!(list);
    }

    #[test]
    fn test_pop_back() {
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_back(11);
        list.push_back(12);
        list.push_back(13);
        assert_eq!(list.pop_back(), Ok(13));
        assert_chain!(list, 11, 12);
        assert_eq!(list.pop_back(), Ok(12));
        assert_chain!(list, 11);
        assert_eq!(list.pop_back(), Ok(11));
        assert_empty!(list);
    }

    #[test]
    fn test_pop_back_single_node() {
        // removing the only node from the back takes the same path as
        // removing it from the front
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_front(7);
        assert_eq!(list.pop_back(), Ok(7));
        assert_empty!(list);
    }

    #[test]
    fn test_pop_from_empty_list() {
        let mut list = SinglyLinkedList::<u8>::new();
        assert_eq!(list.pop_front(), Err(EmptyStructure));
        assert_empty!(list);
        assert_eq!(list.pop_back(), Err(EmptyStructure));
        assert_empty!(list);

        //the list stays usable after a failed pop
        list.push_front(1);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(EmptyStructure));
        assert_empty!(list);
    }

    #[test]
    fn test_push_pop_both_ends() {
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_chain!(list, 2, 1, 3);

        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(3));
        assert_empty!(list);
    }

    #[test]
    fn test_interleaved() {
        let mut list = SinglyLinkedList::<u8>::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        list.push_front(0);
        assert_chain!(list, 0, 1, 2, 3);

        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_front(), Ok(1));
        assert_empty!(list);
    }

    #[test]
    fn test_long_list_drop() {
        // the iterative drop must release a long chain without
        // overflowing the stack
        let mut list = SinglyLinkedList::<u32>::new();
        for i in 0..100_000 {
            list.push_front(i);
        }
        assert_eq!(list.pop_front(), Ok(99_999));
        assert_eq!(list.pop_back(), Ok(0));
        drop(list);
    }
}
