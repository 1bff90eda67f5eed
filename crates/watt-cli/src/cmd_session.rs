use std::io::{BufRead, Write};
use std::path::Path;
use watt_core::{BillingError, Consumer};
use watt_session::Session;

pub fn execute(output: &Path) -> anyhow::Result<()> {
    let session = Session::stdout();
    let stdin = std::io::stdin();
    run_loop(&session, &mut stdin.lock(), output)
}

enum MenuChoice {
    Add,
    View,
    Save,
    Quit,
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().to_lowercase().as_str() {
        "a" | "add" | "1" => Some(MenuChoice::Add),
        "v" | "view" | "2" => Some(MenuChoice::View),
        "s" | "save" | "3" => Some(MenuChoice::Save),
        "q" | "quit" | "exit" | "4" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// The interactive menu. Every billing error is recoverable here: report
/// and keep the loop running. EOF on the input behaves like quit.
fn run_loop(session: &Session, input: &mut impl BufRead, output: &Path) -> anyhow::Result<()> {
    loop {
        println!("\n==== Electricity Billing ====");
        println!("[A] Add bill   [V] View all   [S] Save to file   [Q] Quit");
        print!("> ");
        let _ = std::io::stdout().flush();

        let Some(line) = read_line(input)? else { break };
        match parse_choice(&line) {
            Some(MenuChoice::Add) => {
                if let Err(e) = add_bill(session, input) {
                    println!("Could not add bill: {e}");
                }
            }
            Some(MenuChoice::View) => view_bills(session),
            Some(MenuChoice::Save) => match session.export(output) {
                Ok(n) => println!("Saved {n} bills to {}", output.display()),
                Err(e) => println!("Could not save bills: {e}"),
            },
            Some(MenuChoice::Quit) => break,
            None => println!("Invalid choice. Enter A, V, S, or Q."),
        }
    }
    println!("Exiting. Thank you!");
    Ok(())
}

/// Prompt for one consumer and submit it; blocks until the worker finishes.
fn add_bill(session: &Session, input: &mut impl BufRead) -> anyhow::Result<()> {
    let id = prompt(input, "Consumer ID: ")?;
    let name = prompt(input, "Consumer name: ")?;
    let raw_units = prompt(input, "Units consumed: ")?;
    let units: i64 = raw_units.trim().parse().map_err(|_| {
        BillingError::InvalidInput(format!("units must be an integer, got \"{raw_units}\""))
    })?;

    let consumer = Consumer::new(id, name, units)?;
    session.submit(consumer)?;
    Ok(())
}

fn view_bills(session: &Session) {
    let bills = session.bills();
    if bills.is_empty() {
        println!("No bills available.");
        return;
    }
    for bill in &bills {
        println!("\n{bill}");
    }
    println!("\n({} bills)", bills.len());
}

fn prompt(input: &mut impl BufRead, label: &str) -> anyhow::Result<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();
    read_line(input)?
        .map(|l| l.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("unexpected end of input"))
}

/// One line of input; `None` on EOF.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}
