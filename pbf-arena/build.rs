use std::fs;
use std::path::Path;

const PROTO_DIR: &str = "src/pbf/proto";
const PROTO_FILES: [&str; 2] = ["fileformat.proto", "osmformat.proto"];

// The generated messages are only used on the write path; decoding walks the
// wire format directly.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let inputs: Vec<String> = PROTO_FILES
        .iter()
        .map(|name| format!("{}/{}", PROTO_DIR, name))
        .collect();

    for path in &inputs {
        println!("cargo:rerun-if-changed={}", path);
    }

    protobuf_codegen_pure::Codegen::new()
        .out_dir(PROTO_DIR)
        .inputs(&inputs)
        .include(PROTO_DIR)
        .run()?;

    let modules: String = PROTO_FILES
        .iter()
        .filter_map(|name| name.strip_suffix(".proto"))
        .map(|stem| format!("pub mod {};\n", stem))
        .collect();
    fs::write(Path::new(PROTO_DIR).join("mod.rs"), modules)?;

    Ok(())
}
