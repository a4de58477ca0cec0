use std::env;
use std::fs;
use std::io::Read;

use cookbook_render::cookbook_from_json;
use log::debug;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the recipe file from command-line arguments
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a recipe JSON file as an argument, or - for stdin")?;

    let json = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    debug!("read {} bytes of recipe JSON from {}", json.len(), path);

    let cookbook = cookbook_from_json(&json)?;
    println!("{}", cookbook);

    Ok(())
}
