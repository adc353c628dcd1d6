//! haikucore — placement and fade lifecycle for slowHaiku
//!
//! Everything here is independent of the window: the app feeds a
//! [`FrameInput`] into [`HaikuField::tick`] each frame and paints what
//! [`HaikuField::draw_list`] returns.

pub mod config;
pub mod corpus;
pub mod error;
pub mod fade;
pub mod field;
pub mod item;
pub mod placement;
pub mod style;
pub mod theme;
pub mod timer;

pub use config::{AppConfig, FieldConfig};
pub use corpus::{Corpus, HaikuDetails, LawEntry};
pub use error::{HaikuError, Result};
pub use field::{DrawRequest, FrameInput, HaikuField};
pub use item::{FadePhase, HaikuItem};
pub use placement::TextMeasure;
pub use style::HaikuStyle;
pub use theme::HaikuTheme;
