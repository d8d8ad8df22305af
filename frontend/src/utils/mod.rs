pub mod carousel;
pub mod chart;
pub mod contact;
pub mod nav;
pub mod reveal;
