use usng_rs::{GridCoordinate, Notation, ParseError};

fn main() -> Result<(), ParseError> {
    let coord = GridCoordinate::parse("18S UJ 23480 06712", Notation::Usng)?;

    println!("Zone: {}", coord.zone_number());
    println!("Band: {}", coord.latitude_band());
    if let (Some(column), Some(row)) = (coord.column_letter(), coord.row_letter()) {
        println!("Square: {}{}", column, row);
    }
    println!("Precision: {:?}", coord.precision());
    println!("USNG: {}", coord.to_usng());
    println!("MGRS: {}", coord.to_mgrs());

    Ok(())
}
