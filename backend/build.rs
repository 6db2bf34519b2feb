use std::fs;
use std::path::Path;

// Copies the trunk output of the UI next to this crate so it can be embedded. The target
// directory always exists: without a UI build the server still compiles and answers 404.
fn main() {
    let out_dir = Path::new("static");
    let embed_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    }
    fs::create_dir_all(&embed_dir).unwrap();
    println!("cargo:rerun-if-changed=../frontend/dist");
}
