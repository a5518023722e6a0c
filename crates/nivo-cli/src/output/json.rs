use nivo_core::error::NivoError;

use crate::record::BulletinRecord;

pub fn print(record: &BulletinRecord) -> Result<(), NivoError> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{json}");
    Ok(())
}
