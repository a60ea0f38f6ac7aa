pub mod catalog;
pub mod controls;
pub mod helpers;
pub mod posts;
pub mod sheet;
