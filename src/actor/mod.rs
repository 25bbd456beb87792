//! Input decoding for edit sessions.
//!
//! The core renderer is synchronous; terminal input is decoded on a
//! separate thread and delivered over a crossbeam channel:
//!
//! ```text
//! ┌──────────────┐     EditEvent       ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │   App Loop   │ ──▶ Input::apply
//! └──────────────┘                     └──────────────┘
//! ```

mod input;
mod messages;

pub use input::{convert_event, convert_key, InputActor};
pub use messages::{EditEvent, EditOutcome};
