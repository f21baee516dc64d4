//! View-independent UI state. Components drive these through `use_reducer`
//! or plain method calls; nothing here touches the DOM.

pub mod accordion;
pub mod carousel;
pub mod form;
