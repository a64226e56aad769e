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

//! A singly linked list that owns its nodes and supports pushing and
//! popping elements at either end. The list holds a reference to the
//! first node only, so operations at the head complete in constant
//! time while operations at the tail traverse the chain.
//!
//! Popping from an empty list fails with an explicit error instead of
//! panicking, and leaves the list unmodified.
//!
pub mod error;
pub mod list;
pub mod node;
