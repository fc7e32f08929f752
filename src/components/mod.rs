//! UI components for the wedding invitation page.

mod countdown;
mod gallery;
mod hero;
mod lazy_image;
mod music;
mod reveal;
mod sections;

pub use countdown::CountdownSection;
pub use gallery::GallerySection;
pub use hero::Hero;
pub use lazy_image::LazyImage;
pub use music::MusicControl;
pub use reveal::Reveal;
pub use sections::{InvitationSection, ReceptionSection};
