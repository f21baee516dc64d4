pub mod footer;
pub mod form;
pub mod header;
pub mod hero;
pub mod image;
pub mod layout;
pub mod scroll_lock;
pub mod toast;
