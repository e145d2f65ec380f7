// CLASSIFICATION: COMMUNITY
// Filename: bin/translate.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-20

use std::io;
use std::time::Duration;

use clap::Parser;
use deafnav::translator::Translator;

#[derive(Parser)]
#[command(about = "Run Vision AI sign language translation")]
struct Args {
    /// Path to the video file to translate
    #[arg(long)]
    video: String,
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let translator = Translator::new(Duration::from_secs(1));
    translator.run(&args.video, &mut io::stdout().lock())?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("[ERROR] Failed to run AI translation: {err}");
        std::process::exit(1);
    }
}
