use anyhow::Result;
use clap::Command;

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    Command::new("randkit-demo")
        .about("Prints one sample from every randkit generator")
        .get_matches();

    log::debug!("sampling every generator once");

    println!("=== Random Utilities Demo ===");
    println!();

    println!("Secure token (hex, 16 bytes): {}", randkit::token(16, "hex")?);
    println!(
        "Secure token (base64 url-safe, 18 bytes): {}",
        randkit::token(18, "base64")?
    );

    println!("UUID v4: {}", randkit::uuid_v4()?);

    println!(
        "Random password (12 chars): {}",
        randkit::password(12, true, true, true)?
    );
    println!(
        "Random password (16 chars, no symbols): {}",
        randkit::password(16, false, true, true)?
    );

    println!("Random hex color: {}", randkit::hex_color()?);

    println!(
        "Secure random integer between 1 and 100: {}",
        randkit::int(1, 100)?
    );

    let original: Vec<i64> = (1..=10).collect();
    let shuffled = randkit::shuffle(&original);
    println!("Original array: [{}]", join(&original));
    println!("Shuffled array: [{}]", join(&shuffled));

    println!("Random phrase: {}", randkit::phrase(4)?);

    println!();
    println!("Done.");
    Ok(())
}
