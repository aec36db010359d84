//! Path Builder Demo
//!
//! Builds a few locators for a desktop calculator and prints them.
//!
//! Run with: `RUST_LOG=trace cargo run --example path_demo`

use tracing_subscriber::EnvFilter;
use xpath_builder::prelude::*;

fn main() -> XPathResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== XPath Builder Demo ===\n");

    let mut builder = PathBuilder::new();
    builder.set_root_with(|root| {
        root.window_with(|w| {
            w.with_name("Calculator");
            w.with_class_name("ApplicationFrameWindow");
        });
    });
    println!("Root:          {}", builder.root());

    builder.chain(
        |b| {
            b.group_with(|g| {
                g.with_automation_id("NumberPad");
            })
            .button_with(|btn| {
                btn.with_automation_id("num7Button");
            });
        },
        ChainOptions::default(),
    );
    println!("Seven button:  {builder}");

    builder.back()?;
    println!("After back():  {builder}");

    builder.chain_with_root(
        "/Pane",
        |b| {
            b.custom_component("Text", |t| {
                t.starts_with("AutomationId", "Calculator");
            });
        },
        ChainOptions::default(),
    );
    println!("Display text:  {builder}");

    let mut bare = PathBuilder::new();
    bare.window().pane();
    match bare.back() {
        Ok(_) => println!("unexpected removal: {bare}"),
        Err(e) => println!("Bare path:     {bare} ({e})"),
    }

    let config = BuilderConfig::from_json(r#"{"trace_operations": false}"#)?;
    println!("\nConfig:\n{}", config.to_json()?);

    Ok(())
}
