//! Linked list implementations.
//!
//! # Examples
//!
//! ```
//! use single_linked_list::linked_list::forward::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::from([1, 2, 3]);
//! assert_eq!(list.len(), 3);
//! assert!(list.iter().eq(&[1, 2, 3]));
//!
//! let mut cursor = list.cursor_before_begin_mut();
//! assert_eq!(cursor.erase_after(), 1);
//! cursor.insert_after(0);
//!
//! assert!(list.iter().eq(&[0, 2, 3]));
//! assert_eq!(list.pop_front(), Some(0));
//! assert_eq!(list.front(), Some(&2));
//! ```
pub mod forward;
