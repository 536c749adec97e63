use std::error::Error;
use std::io;

use volcanium::{duo, solo, DUO_MINUTES, SOLO_MINUTES};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let answer = match args[..] {
        ["solo"] => solo(io::stdin().lock(), SOLO_MINUTES)?,
        ["solo", minutes] => solo(io::stdin().lock(), minutes.parse()?)?,
        ["duo"] => duo(io::stdin().lock(), DUO_MINUTES)?,
        ["duo", minutes] => duo(io::stdin().lock(), minutes.parse()?)?,
        _ => return Err("usage: volcanium solo|duo [minutes]".into()),
    };
    println!("{answer}");
    Ok(())
}
