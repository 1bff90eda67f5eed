use watt_core::{calculate, format_amount};

pub fn execute(units: i64, json: bool) -> anyhow::Result<()> {
    let amount = calculate(units)?;
    if json {
        println!(
            "{}",
            serde_json::json!({
                "units": units,
                "amount": amount,
                "rendered": format_amount(amount),
            })
        );
    } else {
        println!("{units} units -> Rs. {}", format_amount(amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_units_error_out() {
        assert!(execute(-1, false).is_err());
    }

    #[test]
    fn valid_units_succeed() {
        execute(250, false).unwrap();
        execute(250, true).unwrap();
    }
}
