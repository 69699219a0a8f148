#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Embeds res/rdowntime.ico only when the icon is shipped with the sources
    if !std::path::Path::new("res/rdowntime.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rdowntime.ico")
        .set("FileDescription", "rDowntime CLI")
        .set("ProductName", "rDowntime")
        .set("OriginalFilename", "rdowntime.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
