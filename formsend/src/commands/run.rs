use std::sync::Arc;

use anyhow::Context;
use formsend_config::Config;
use formsend_models::form::FormField;
use formsend_ui_contracts::FormPage;
use formsend_ui_headless::HeadlessPage;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::bootstrap::{bootstrap, pump_events};

/// Interactive console host for the contact form: a line-oriented stand-in
/// for the page the form would normally live on.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let page = Arc::new(HeadlessPage::new());

    let Some(controller) = bootstrap(&config, &page) else {
        // diagnostic already emitted
        return Ok(());
    };

    let events = page.subscribe();
    let pump = tokio::spawn(pump_events(controller, events));

    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "" => {}
            "name" => page.enter(FormField::Name, rest),
            "email" => page.enter(FormField::Email, rest),
            "message" => page.enter(FormField::Message, rest),
            "submit" => {
                page.press_submit();
            }
            "show" => print_page(&page),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => eprintln!("Unknown command: {other}"),
        }
    }

    pump.abort();
    Ok(())
}

fn print_page(page: &HeadlessPage) {
    for field in FormField::ALL {
        let feedback = page
            .feedback(field)
            .map(|feedback| format!("  [invalid: {feedback}]"))
            .unwrap_or_default();
        println!("{field:?}: {:?}{feedback}", page.field_value(field));
    }
    println!(
        "Submit: {:?} ({})",
        page.submit_label(),
        if page.submit_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    for panel in page.toasts() {
        println!("Toast [{:?}] {}", panel.toast.severity, panel.toast.message);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  name <text>     fill the name field and leave it");
    println!("  email <text>    fill the email field and leave it");
    println!("  message <text>  fill the message field and leave it");
    println!("  submit          press the submit control");
    println!("  show            print the current page state");
    println!("  quit            exit");
}
