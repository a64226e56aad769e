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

use thiserror::Error;

/// The error returned when a value is removed from an empty list.
///
/// This is the only failure in the list API. It is returned by
/// [`pop_front`](../struct.SinglyLinkedList.html#method.pop_front) and
/// [`pop_back`](../struct.SinglyLinkedList.html#method.pop_back) when
/// the list has no nodes. The list is not modified when this error is
/// returned.
///
/// # Examples
/// ```
/// use linkforge::lists::SinglyLinkedList;
/// use linkforge::lists::singlylinkedlist::EmptyStructure;
///
/// let mut list = SinglyLinkedList::<u8>::new();
/// assert_eq!(list.pop_front(), Err(EmptyStructure));
/// assert_eq!(list.is_empty(), true);
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot remove from an empty list")]
pub struct EmptyStructure;
