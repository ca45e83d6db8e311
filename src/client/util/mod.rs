pub mod booking;
pub mod catalog;
pub mod chart;
pub mod countdown;
pub mod form;
pub mod format;
pub mod guard;
pub mod lifecycle;
pub mod password;
pub mod payment;
pub mod time;
