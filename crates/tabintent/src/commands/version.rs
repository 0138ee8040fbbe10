pub fn run() -> anyhow::Result<()> {
    println!("tabintent {}", env!("CARGO_PKG_VERSION"));
    println!("Remember why you opened a tab");
    Ok(())
}
