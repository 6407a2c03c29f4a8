//! Output painters for [`crate::view::PageView`].

pub mod html;
