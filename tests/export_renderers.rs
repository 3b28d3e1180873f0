use csv::ReaderBuilder;
use signoff::data::Dataset;
use signoff::output::csv::{UTF8_BOM, export, write_delimited};
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn render(dataset: &Dataset) -> Vec<u8> {
    let mut buf = Vec::new();
    write_delimited(dataset, &mut buf).expect("Failed to render CSV");
    buf
}

#[test]
fn test_csv_round_trips_through_a_standard_reader() {
    // Cells with embedded delimiters, quotes and newlines must survive a
    // write/read cycle exactly
    let dataset = Dataset::new(
        strings(&["Employee", "Note", "Hours"]),
        vec![
            strings(&["Ada, Countess", "said \"done\"", "7.5"]),
            strings(&["Grace", "line1\nline2", "8"]),
            strings(&["", "", ""]),
        ],
    );

    let bytes = render(&dataset);
    assert_eq!(&bytes[..3], UTF8_BOM);

    let mut reader = ReaderBuilder::new().from_reader(&bytes[3..]);
    let headers: Vec<String> = reader
        .headers()
        .expect("Failed to read headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, dataset.headers);

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.expect("Failed to read record").iter().map(str::to_string).collect())
        .collect();
    assert_eq!(rows, dataset.rows);
}

#[test]
fn test_csv_escaping_is_exact() {
    let dataset = Dataset::new(strings(&["col"]), vec![strings(&["a,b\"c"])]);
    let bytes = render(&dataset);
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text, "col\n\"a,b\"\"c\"\n");
}

#[test]
fn test_zero_rows_still_produce_header_row() {
    let dataset = Dataset::new(strings(&["A", "B"]), vec![]);
    let bytes = render(&dataset);
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text, "A,B\n");
}

#[test]
fn test_export_appends_csv_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("payroll");

    let dataset = Dataset::new(strings(&["A"]), vec![strings(&["1"])]);
    let written = export(&dataset, target.to_str().unwrap()).expect("Export failed");

    assert!(written.ends_with("payroll.csv"));
    let bytes = std::fs::read(&written).expect("Exported file missing");
    assert_eq!(&bytes[..3], UTF8_BOM);
}

#[test]
fn test_export_keeps_existing_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("payroll.csv");

    let dataset = Dataset::new(strings(&["A"]), vec![]);
    let written = export(&dataset, target.to_str().unwrap()).expect("Export failed");

    assert_eq!(written, target.to_str().unwrap());
    assert!(target.exists());
}
