#[cfg(windows)]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set("FileDescription", "Quadratic Equation Solver");
    res.set("ProductName", "quadratic");
    if let Err(e) = res.compile() {
        eprintln!("winres compile warning: {e}");
    }
}

#[cfg(not(windows))]
fn main() {}
