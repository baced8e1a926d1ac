//! Platform glue shared by the site runtime: browser bindings on wasm,
//! inert stand-ins on native so the engine and its tests build everywhere.

pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
