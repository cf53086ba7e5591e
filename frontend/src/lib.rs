//! Landing page interactions: phone tilt, smooth in-page scrolling,
//! scroll-triggered reveals and logo hover effects.

pub mod config;
pub mod dom;
pub mod error;
pub mod interactions {
    pub mod logo_hover;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod tilt;
}
pub mod page;

pub use config::PageConfig;
pub use error::InteractionError;
pub use page::{install, run, InstallReport};
