use std::{env, fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=config.json");

    // OUT_DIR = target/<profile>/build/<crate>/out
    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => dir,
        Err(e) => {
            println!("cargo:warning=OUT_DIR not set, config.json not copied: {e}");
            return;
        }
    };

    // target/<profile> sits three levels above OUT_DIR
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        println!("cargo:warning=Cannot resolve binary directory from {out_dir}");
        return;
    };

    let src = Path::new("config.json");
    if !src.exists() {
        println!("cargo:warning=No config.json in project root, server will use defaults");
        return;
    }

    let dst = profile_dir.join("config.json");
    if let Err(e) = fs::copy(src, &dst) {
        println!("cargo:warning=Could not copy config.json to {}: {e}", dst.display());
    }
}
