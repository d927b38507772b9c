use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("maclink version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
