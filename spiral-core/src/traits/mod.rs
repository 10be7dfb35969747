pub mod profile_engine;

pub use profile_engine::IProfileEngine;
