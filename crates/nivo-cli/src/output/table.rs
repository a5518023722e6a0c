use nivo_core::model::ALTITUDE_THRESHOLD_M;

use crate::record::BulletinRecord;

pub fn print(record: &BulletinRecord) {
    println!("Bulletin: {}", record.source);
    println!(
        "Generated: {}",
        record.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    let above_header = format!("Above {ALTITUDE_THRESHOLD_M} m");
    let below_header = format!("Below {ALTITUDE_THRESHOLD_M} m");
    println!(
        "  {:<14} {:<18} {:<18} {}",
        "Massif", above_header, below_header, "Source"
    );
    println!("  {:-<14} {:-<18} {:-<18} {:-<16}", "", "", "", "");

    for (id, result) in &record.massifs {
        if result.found {
            println!(
                "  {:<14} {:<18} {:<18} {}",
                id,
                result.above.to_string(),
                result.below.to_string(),
                result.provenance
            );
        } else {
            println!("  {:<14} {:<18} {:<18} no data", id, "-", "-");
        }
    }
}
