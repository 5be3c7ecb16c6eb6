use std::{error::Error, io, io::Write};

use terminfo_view::{NumberCap, Parameter, Session, StringCap, load};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Empty name means the terminal from `TERM`.
    let terminfo = load("")?;
    let mut session = Session::new();
    let mut stdout = io::stdout();

    if let Some(cap) = terminfo.string_by_name("Smulx") {
        println!(
            "Found styled underscore capability Smulx={:#?}",
            String::from_utf8_lossy(cap)
        );
        for param in [0, 1, 2, 3, 4, 5, 0] {
            stdout.write_all(&session.expand(cap, &[Parameter::from(param)]))?;
            println!("Parameter {param}");
        }
    } else {
        println!("Your terminal has no styled underscore capability");
    }

    let Some(colors) = terminfo.number(NumberCap::colors) else {
        println!("Your terminal has no colors");
        return Ok(());
    };
    for color in 0..colors.min(16) {
        if let Some(setaf) =
            session.expand_capability(&terminfo, StringCap::setaf, &[Parameter::from(color)])
        {
            stdout.write_all(&setaf)?;
        }
        print!("{color:>3}");
    }
    if let Some(sgr0) = session.expand_capability(&terminfo, StringCap::sgr0, &[]) {
        stdout.write_all(&sgr0)?;
    }
    println!();

    Ok(())
}
