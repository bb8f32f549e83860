//! The landing page, one component per vertical band.

mod about;
mod audience;
mod footer;
mod hero;
mod join;
mod offerings;
mod values;
mod video;

pub use about::About;
pub use audience::Audience;
pub use footer::Footer;
pub use hero::Hero;
pub use join::Join;
pub use offerings::Offerings;
pub use values::Values;
pub use video::VideoTeaser;
