//! Event lookups.
//!
//! A request to `/event?keyword=..&type=..` names a crisis topic in English
//! or Arabic together with the kind of content wanted. It is answered with a
//! redirect: to a page or media file on this site when one matches, and to
//! an external search otherwise. Lookups never produce a 404.
//!
//! - **`topics`**: the fixed alias and topic page tables
//! - **`media`**: finds an image or video file for a topic
//! - **`resolver`**: picks between local content and an external search

pub mod media;
pub mod resolver;
pub mod topics;

pub use resolver::{ContentType, Destination, EventQuery, EventResolver};
pub use topics::{Language, Topic};
