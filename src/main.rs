mod display;
mod greeting;
mod runner;
mod system;

use std::env;
use std::process;

fn main() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async_main());
}

async fn async_main() {
    // PLAIN_OUTPUT=true drops the banner decoration for pipe-friendly output
    let plain = match runner::parse_toggle("PLAIN_OUTPUT", env::var("PLAIN_OUTPUT").ok()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = runner::run(plain).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
