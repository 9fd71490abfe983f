use anyhow::Result;

use kinesio_core::interpret;

pub fn execute(score: u8) -> Result<()> {
    let interpretation = interpret::interpret(score)?;
    println!("{score}: {}", interpretation.label());
    Ok(())
}
