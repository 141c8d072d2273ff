//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`visibility`, `conversation`, `mode`, `upload`,
//! `activity`, `scroll`) so each piece stays small and testable on its own.
//! `ChatWidget` composes them; none of these types touch the network.

pub mod activity;
pub mod conversation;
pub mod mode;
pub mod scroll;
pub mod upload;
pub mod visibility;
