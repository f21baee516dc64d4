pub mod about;
pub mod contact;
pub mod events;
pub mod faq;
pub mod forms;
pub mod forms_centre;
pub mod give;
pub mod groups;
pub mod home;
pub mod im_new;
pub mod sermons;
