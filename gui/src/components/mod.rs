pub mod meeting_list;
pub mod spin_controls;
pub mod wheel;
