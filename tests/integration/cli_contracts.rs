use std::fs;
use std::io::{self, BufReader, Cursor, Read};

use inventory::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

fn context(temp: &TempDir) -> CliContext {
    CliContext::new(
        temp.path().to_path_buf(),
        None,
        Some(temp.path().join("inventory.txt")),
    )
    .unwrap()
}

fn add(cli: &CliContext, id: i32, name: &str, price: f64, quantity: i32) -> String {
    cli.execute(&Commands::Add {
        id: Some(id),
        name: Some(name.to_string()),
        price: Some(price),
        quantity: Some(quantity),
    })
    .unwrap()
}

#[test]
fn add_persists_and_reports_record() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);

    let output = add(&cli, 1, "Widget", 9.99, 10);
    assert_eq!(
        output,
        "Product added: ID: 1, Name: Widget, Price: 9.99, Quantity: 10"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap(),
        "1 Widget 9.99 10\n"
    );
}

#[test]
fn list_text_matches_display_lines() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    add(&cli, 1, "Widget", 9.99, 10);
    add(&cli, 2, "Gadget", 19.5, 3);

    let output = cli
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(
        output,
        "ID: 1, Name: Widget, Price: 9.99, Quantity: 10\nID: 2, Name: Gadget, Price: 19.5, Quantity: 3"
    );
}

#[test]
fn list_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    add(&cli, 4, "Bolt", 0.25, 400);

    let output = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
    let products = parsed
        .get("products")
        .and_then(|v| v.as_array())
        .expect("products array should exist");
    let entry = &products[0];
    assert_eq!(entry.get("id").and_then(|v| v.as_i64()), Some(4));
    assert_eq!(entry.get("name").and_then(|v| v.as_str()), Some("Bolt"));
    assert_eq!(entry.get("price").and_then(|v| v.as_f64()), Some(0.25));
    assert_eq!(entry.get("quantity").and_then(|v| v.as_i64()), Some(400));
}

#[test]
fn list_rejects_unknown_format() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    assert!(cli
        .execute(&Commands::List {
            format: "xml".to_string(),
        })
        .is_err());
}

#[test]
fn remove_reports_count_and_miss() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    add(&cli, 1, "Widget", 9.99, 10);
    add(&cli, 1, "WidgetB", 8.0, 1);
    add(&cli, 2, "Gadget", 19.5, 3);

    let output = cli.execute(&Commands::Remove { id: 1 }).unwrap();
    assert_eq!(output, "Removed 2 product(s) with ID 1");
    let output = cli.execute(&Commands::Remove { id: 1 }).unwrap();
    assert_eq!(output, "No product with ID 1");
    assert_eq!(
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap(),
        "2 Gadget 19.5 3\n"
    );
}

#[test]
fn update_changes_first_match_only() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    add(&cli, 1, "Widget", 9.99, 10);
    add(&cli, 1, "WidgetB", 8.0, 1);

    let output = cli
        .execute(&Commands::Update {
            id: 1,
            name: Some("Widget2".to_string()),
            price: Some(12.0),
            quantity: Some(5),
        })
        .unwrap();
    assert_eq!(
        output,
        "Product updated: ID: 1, Name: Widget2, Price: 12, Quantity: 5"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap(),
        "1 Widget2 12 5\n1 WidgetB 8 1\n"
    );
}

#[test]
fn update_missing_id_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let output = cli
        .execute(&Commands::Update {
            id: 9,
            name: None,
            price: None,
            quantity: None,
        })
        .unwrap();
    assert_eq!(output, "No product with ID 9");
}

#[test]
fn add_rejects_name_with_whitespace() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let result = cli.execute(&Commands::Add {
        id: Some(1),
        name: Some("Blue Widget".to_string()),
        price: Some(1.0),
        quantity: Some(1),
    });
    assert!(result.is_err());
    assert!(!temp.path().join("inventory.txt").exists());
}

#[test]
fn menu_session_saves_on_exit() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    add(&cli, 1, "Widget", 9.99, 10);

    let mut out = Vec::new();
    cli.run_menu(
        Cursor::new("1\n2\nGadget\n19.5\n3\n3\n1\nWidget2\n12.0\n5\n4\n5\n"),
        &mut out,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("ID: 1, Name: Widget2, Price: 12, Quantity: 5\nID: 2, Name: Gadget, Price: 19.5, Quantity: 3\n"));
    assert_eq!(
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap(),
        "1 Widget2 12 5\n2 Gadget 19.5 3\n"
    );
}

#[test]
fn menu_session_tolerates_invalid_utf8_input() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let mut out = Vec::new();
    let script: &[u8] = b"1 1 Widget 9.99 10\n\xE9\n1 2 Caf\xE9 1.5 3\n5\n";
    cli.run_menu(Cursor::new(script), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Invalid choice, please try again."));
    let saved = fs::read_to_string(temp.path().join("inventory.txt")).unwrap();
    assert!(saved.starts_with("1 Widget 9.99 10\n2 Caf"));
    assert_eq!(saved.lines().count(), 2);
}

/// Yields an error on every read, like a terminal that went away.
struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }
}

#[test]
fn menu_session_saves_before_reporting_input_error() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let input = Cursor::new("1 1 Widget 9.99 10\n").chain(BufReader::new(BrokenInput));

    let mut out = Vec::new();
    let err = cli.run_menu(input, &mut out).unwrap_err();
    assert!(err.to_string().contains("terminal closed"));
    assert_eq!(
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap(),
        "1 Widget 9.99 10\n"
    );
}

#[test]
fn relative_file_resolves_against_workspace() {
    let temp = TempDir::new().unwrap();
    let cli =
        CliContext::new(temp.path().to_path_buf(), None, Some("nested.txt".into())).unwrap();
    assert_eq!(cli.store_path(), temp.path().join("nested.txt"));
}

#[test]
fn menu_session_saves_without_changes() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let mut out = Vec::new();
    cli.run_menu(Cursor::new("5\n"), &mut out).unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap(),
        ""
    );
}

#[test]
fn workspace_config_sets_inventory_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("inventory.toml"),
        "[storage]\npath = \"stock.txt\"\n",
    )
    .unwrap();

    let cli = CliContext::new(temp.path().to_path_buf(), None, None).unwrap();
    assert_eq!(cli.store_path(), temp.path().join("stock.txt"));
    add(&cli, 1, "Widget", 9.99, 10);
    assert!(temp.path().join("stock.txt").exists());
}

#[test]
fn unwritable_inventory_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let cli = CliContext::new(
        temp.path().to_path_buf(),
        None,
        Some(temp.path().join("missing").join("inventory.txt")),
    )
    .unwrap();
    let err = cli.execute(&Commands::Remove { id: 1 }).unwrap_err();
    assert!(err.to_string().contains("Failed to write inventory file"));
}
