//! Prints the code generated for a small header.
//!
//! ```text
//! cargo run --example generate -- rust
//! ```

use savestruct::prelude::*;

const HEADER: &str = r#"
#define MAX_NAME 20

typedef struct gps_s {
    float x;
    float y;
    int z;
} gps;

typedef struct tux_s {
    gps pos;
    int level;
    unsigned short health;
    char name[MAX_NAME];  // shown in the HUD
    int skills[4];
    struct enemy_s *target; /* reset on load */
} tux_t;
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let target = std::env::args()
        .nth(1)
        .map_or(Ok(Target::C), |arg| arg.parse())
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(2);
        });

    let config = GeneratorConfig::new().with_target(target);
    let artifacts = generate_from_header(HEADER, "savegame", &config);

    for artifact in [&artifacts.interface, &artifacts.implementation] {
        println!("==> {} <==", artifact.file_name);
        println!("{}", artifact.contents);
    }
}
