use anyhow::Result;

use kinesio_core::Session;

#[derive(Debug)]
pub struct ScoreInputs {
    pub name: String,
    pub intention: String,
    pub item: String,
    pub timing: String,
    pub json: bool,
}

pub fn execute(inputs: ScoreInputs) -> Result<()> {
    let mut session = Session::new();
    session.set_subject(&inputs.name)?;
    let record = session.evaluate_timed(&inputs.intention, &inputs.item, &inputs.timing)?;

    if inputs.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Score: {} - {}", record.score, record.interpretation.label());
        println!("Hash: {}", record.digest);
    }
    Ok(())
}
