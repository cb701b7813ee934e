use savestruct_codegen::GeneratorConfig;
use std::error::Error;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=fixtures/savegame.h");
    println!("cargo:rerun-if-changed=fixtures/savestruct.toml");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let config: GeneratorConfig =
        toml::from_str(&std::fs::read_to_string("fixtures/savestruct.toml")?)?;

    savestruct_codegen::run(
        Path::new("fixtures/savegame.h"),
        &out_dir.join("savegame"),
        &config,
    )?;
    Ok(())
}
