//! A collection of data structures and algorithms with hand crafted
//! implementations and extensive APIs.

/// A collection of list data structures and algorithms
pub mod lists {
    pub use linkforge_lists::singlylinkedlist::list::SinglyLinkedList;
    /// This module contains structs specific to the [`SinglyLinkedList`]
    pub mod singlylinkedlist {
        pub use linkforge_lists::singlylinkedlist::error::EmptyStructure;
    }
}
