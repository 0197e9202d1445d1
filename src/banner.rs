//! Notification banner
//!
//! Renders the first few unread/recent server notifications as cards at
//! the top of the screen. The list itself lives in the store and refreshes
//! on a 30-second poll; this module owns selection, the dismiss and
//! mark-read-then-navigate actions, and the card rendering.

mod banner_events;
mod banner_render;
mod banner_state;

pub use banner_events::handle_banner_key;
pub use banner_render::render_banner;
pub use banner_state::{BannerState, ENTRANCE_STAGGER, MAX_VISIBLE, accent, glyph, visible};
