//! End-to-end tests for generated Rust code.
//!
//! `build.rs` runs the generator over `fixtures/savegame.h`; the output is
//! compiled here against `savestruct-core` and exercised from `tests/`.

/// Records generated from the fixture header.
pub mod savegame {
    /// `MAX_NAME` from the fixture header.
    pub const MAX_NAME: usize = 16;
    /// `MAX_INVENTORY` from the fixture header.
    pub const MAX_INVENTORY: usize = 4;
    /// `MAX_UPGRADE_SOCKETS` from the fixture header.
    pub const MAX_UPGRADE_SOCKETS: usize = 2;

    include!(concat!(env!("OUT_DIR"), "/savegame_types.rs"));
    include!(concat!(env!("OUT_DIR"), "/savegame.rs"));
}

/// Generated struct declarations, as text.
pub const GENERATED_TYPES: &str = include_str!(concat!(env!("OUT_DIR"), "/savegame_types.rs"));

/// Generated save/read functions, as text.
pub const GENERATED_FUNCTIONS: &str = include_str!(concat!(env!("OUT_DIR"), "/savegame.rs"));
