pub mod about;
pub mod contact;
pub mod hero;
pub mod icons;
pub mod performance;
pub mod strategy;
pub mod template;
pub mod testimonials;
