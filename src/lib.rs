pub mod breadcrumb;
pub mod error;
pub mod format;
pub mod html;
pub mod key;
pub mod node;

pub use breadcrumb::{render, render_value};
pub use key::{Segment, Trail};
pub use node::{Element, Node};
