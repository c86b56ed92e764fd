pub mod comparison;
pub mod demo;
pub mod final_cta;
pub mod footer;
pub mod nav;
pub mod notice;
pub mod venue_form;
pub mod waitlist_form;
