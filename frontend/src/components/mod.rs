pub mod cards;
pub mod contact_form;
pub mod faq;
pub mod icon;
pub mod map;
pub mod nav;
pub mod scroll_top;
