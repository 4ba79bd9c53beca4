//! The six template variants

pub mod classic;
pub mod elegant;
pub mod gst;
pub mod minimal;
pub mod modern;
pub mod professional;
