use std::io::{BufReader, Cursor};

use gridcost_core::{CostGrid, GridReader, Point, ReadError, read_grid};

#[test]
fn display_output_reads_back() {
    let g = CostGrid::from_rows(&[&[3, 0, 12], &[7, 1, 1]]).unwrap();
    let text = format!("{} {}\n{g}", g.rows(), g.cols());
    assert_eq!(read_grid(text.as_bytes()).unwrap(), g);
}

#[test]
fn small_buffer_reads_long_lines() {
    let values: Vec<String> = (0..400).map(|i| (i % 10).to_string()).collect();
    let text = format!("20 20 {}", values.join(" "));
    let reader = BufReader::with_capacity(8, Cursor::new(text));
    let g = read_grid(reader).unwrap();
    assert_eq!(g.at(Point::new(19, 19)), Some(9));
    assert_eq!(g.iter().map(|(_, c)| c).sum::<i64>(), 40 * 45);
}

#[test]
fn reader_stops_after_the_grid() {
    let mut gr = GridReader::new("1 1 4 leftover".as_bytes());
    let (r, c) = gr.dimensions().unwrap();
    let g = gr.cells(r, c).unwrap();
    assert_eq!(g.at(Point::ZERO), Some(4));
    assert_eq!(gr.consumed(), 3);
}

#[test]
fn oversized_dimensions_are_rejected_up_front() {
    let err = read_grid("99999999999 99999999999".as_bytes()).unwrap_err();
    assert!(matches!(err, ReadError::Grid(_)), "{err}");
}
