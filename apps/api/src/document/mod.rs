// Document pipeline: assembly of the fixed section tree, HTML projection
// in screen and export modes, and the single-slot store handlers read from.
// All record-shaped input goes through normalize first, so nothing downstream
// handles missing fields.

pub mod assemble;
pub mod handlers;
pub mod html;
pub mod store;
