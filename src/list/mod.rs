//! Node-based containers.
//!
//! - [`DoublyLinkedList`]: a cyclic doubly-linked list with a ghost node,
//!   handing out bidirectional cursors.
//! - [`SinglyLinkedList`]: head and tail pointers, forward-only cursors.
//! - [`CircularList`]: a cycle held by its last node, forward-only cursors.

pub mod circular;
pub mod doubly;
mod forward;
pub mod singly;

pub use circular::CircularList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
