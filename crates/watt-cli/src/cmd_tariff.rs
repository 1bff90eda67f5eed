use watt_core::{format_amount, tiers, METER_CHARGE};

pub fn execute() -> anyhow::Result<()> {
    println!("Progressive rate schedule:");
    let mut lower = 0i64;
    for tier in tiers() {
        match tier.upto {
            Some(upper) => {
                println!("  {lower:>4}-{upper:<5} Rs. {:.2}/unit", tier.rate);
                lower = upper + 1;
            }
            None => println!("  {lower:>4}+      Rs. {:.2}/unit", tier.rate),
        }
    }
    println!("Fixed meter charge: Rs. {}", format_amount(METER_CHARGE));
    Ok(())
}
