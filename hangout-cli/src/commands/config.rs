use anyhow::Result;
use hangout_core::Hangout;
use hangout_core::config::HangoutConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = HangoutConfig::config_path()?;
    let hangout = Hangout::load()?;
    let storage = hangout.storage()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!(
        "  Data:     {} {}",
        hangout.display_path().display(),
        format!("({})", hangout.data_path().display()).dimmed()
    );
    println!("  Storage:  {}", storage.path().display());

    println!();
    println!("{}", "Storage".bold());
    println!("  Events:   {}", storage.len());
    match hangout.config().quota() {
        Some(quota) => println!("  Quota:    {} bytes", quota),
        None => println!("  Quota:    {}", "none".dimmed()),
    }

    Ok(())
}
